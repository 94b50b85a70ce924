// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Address types and the 32-bit MIPS kernel segment layout.
//!
//! The classic MIPS32 virtual address space is split into four segments:
//!
//! ```text
//! 0xffff_ffff +-----------------+
//!             |  kseg2 / kseg3  |  kernel, TLB mapped
//! 0xc000_0000 +-----------------+
//!             |      kseg1      |  direct mapped, uncached
//! 0xa000_0000 +-----------------+
//!             |      kseg0      |  direct mapped, cached
//! 0x8000_0000 +-----------------+
//!             |      kuseg      |  user, TLB mapped
//! 0x0000_0000 +-----------------+
//! ```
//!
//! [`Segment::of`] classifies a virtual address and the `kseg*_to_phys` /
//! `phys_to_kseg*` helpers translate between the direct-mapped segments and
//! physical memory.
#![cfg_attr(not(test), no_std)]

mod addr;
mod page;
mod segment;

pub use self::{
    addr::{PhysAddr, Pfn, VirtAddr},
    page::{PAGE_SHIFT, PAGE_SIZE, btop, ptob, round_page, trunc_page},
    segment::{
        KSEG0_START, KSEG1_START, KSEG2_START, PHYS_MASK, Segment, kseg0_to_phys, kseg1_to_kseg0,
        kseg1_to_phys, phys_to_kseg0, phys_to_kseg1,
    },
};
