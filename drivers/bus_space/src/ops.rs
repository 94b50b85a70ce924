// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

use mipsaddr::{PhysAddr, Pfn};

use crate::{BusAddr, BusHandle, BusSize, MapFlags, Prot, Result};

/// The operations a bus space offers to drivers.
///
/// Drivers are written against this trait so they do not depend on how a
/// particular platform lays out its buses.
pub trait BusSpaceOps {
    /// Translates `addr` to a handle without checking it against the
    /// aperture.
    ///
    /// # Panics
    ///
    /// Panics if [`MapFlags::CACHEABLE`] is requested and the resulting
    /// address is already cached or lies in user space.
    fn compose_handle(&self, addr: BusAddr, size: BusSize, flags: MapFlags) -> Result<BusHandle>;

    /// Releases whatever [`compose_handle`](Self::compose_handle) acquired.
    fn dispose_handle(&self, handle: BusHandle, size: BusSize) -> Result;

    /// Returns the physical address backing `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` lies in user space.
    fn paddr(&self, handle: BusHandle) -> Result<PhysAddr>;

    /// Maps `[addr, addr + size)` and returns a handle to its first byte.
    ///
    /// Fails with [`BusError::OutOfRange`](crate::BusError::OutOfRange) if
    /// the range is not entirely inside the aperture.
    fn map(&self, addr: BusAddr, size: BusSize, flags: MapFlags) -> Result<BusHandle>;

    fn unmap(&self, handle: BusHandle, size: BusSize);

    /// Returns a handle `offset` bus units past `handle`.
    ///
    /// The caller is responsible for staying within the original mapping.
    fn subregion(&self, handle: BusHandle, offset: BusSize, size: BusSize) -> Result<BusHandle>;

    /// Returns the page frame backing byte `off` of the range at `addr`,
    /// for mapping into user space.
    fn mmap(&self, addr: BusAddr, off: usize, prot: Prot, flags: MapFlags) -> Result<Pfn>;

    /// Allocates a region of bus space within `[start, end)`.
    fn alloc(
        &self,
        start: BusAddr,
        end: BusAddr,
        size: BusSize,
        align: BusSize,
        boundary: BusSize,
        flags: MapFlags,
    ) -> Result<(BusAddr, BusHandle)>;

    /// Frees a region obtained from [`alloc`](Self::alloc).
    fn free(&self, handle: BusHandle, size: BusSize);
}
