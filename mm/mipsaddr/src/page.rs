// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

use crate::{PhysAddr, Pfn};

/// Log2 of the base page size.
pub const PAGE_SHIFT: usize = 12;
/// The base page size, 4K.
pub const PAGE_SIZE: usize = 1 << PAGE_SHIFT;

/// Converts a physical address to the number of the page containing it.
#[inline]
pub const fn btop(pa: PhysAddr) -> Pfn {
    Pfn::from_usize(pa.as_usize() >> PAGE_SHIFT)
}

/// Converts a page frame number back to the physical address of its first byte.
#[inline]
pub const fn ptob(pfn: Pfn) -> PhysAddr {
    PhysAddr::from_usize(pfn.as_usize() << PAGE_SHIFT)
}

#[inline]
pub const fn trunc_page(addr: usize) -> usize {
    addr & !(PAGE_SIZE - 1)
}

#[inline]
pub const fn round_page(addr: usize) -> usize {
    trunc_page(addr + PAGE_SIZE - 1)
}
