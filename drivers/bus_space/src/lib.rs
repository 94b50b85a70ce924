// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Bus-space address translation.
//!
//! A [`BusSpace`] describes one bus aperture: a range of bus addresses,
//! together with the physical and kernel virtual addresses its first byte
//! lives at. Drivers [`map`](BusSpaceOps::map) bus addresses into handles,
//! which are plain kernel virtual addresses, and may ask for the range to be
//! cached. Whether that is possible depends on which MIPS segment the
//! handle lands in:
//!
//! - kseg1 handles are moved to the same physical address in kseg0;
//! - kseg2 handles are returned uncached, since the page may be wired or
//!   shared with other buses;
//! - kuseg and kseg0 handles mean the descriptor is misconfigured, and the
//!   kernel panics.
#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

mod error;
mod flags;
mod lanes;
mod ops;
mod space;

pub use mipsaddr::{PhysAddr, Pfn, VirtAddr};

pub use self::{
    error::{BusError, Result},
    flags::{MapFlags, Prot},
    lanes::{AccessWidth, ByteLanes, Endian, PLATFORM_ENDIAN},
    ops::BusSpaceOps,
    space::BusSpace,
};

/// An address on a bus.
pub type BusAddr = usize;
/// A length in bus units.
pub type BusSize = usize;
/// A mapped bus range, identified by the kernel virtual address of its
/// first register.
pub type BusHandle = VirtAddr;
