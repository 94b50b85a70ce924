// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

use core::fmt;

use mipsaddr::{
    PhysAddr, Pfn, Segment, VirtAddr, btop, kseg0_to_phys, kseg1_to_kseg0, kseg1_to_phys,
};

use crate::{
    AccessWidth, BusAddr, BusError, BusHandle, BusSize, BusSpaceOps, ByteLanes, MapFlags,
    PLATFORM_ENDIAN, Prot, Result,
};

/// Descriptor of one bus aperture.
///
/// Bus address `start` sits at physical address `pbase` and kernel virtual
/// address `vbase`; every later bus address is `1 << stride` bytes further
/// on per unit. Descriptors hold no resources and live as long as the bus.
#[derive(Debug, Clone)]
pub struct BusSpace {
    name: &'static str,
    start: BusAddr,
    size: BusSize,
    pbase: PhysAddr,
    vbase: VirtAddr,
    stride: u32,
    lanes: ByteLanes,
    bswap: bool,
}

impl BusSpace {
    /// Creates a descriptor with no register striding.
    pub const fn new(
        name: &'static str,
        pbase: PhysAddr,
        vbase: VirtAddr,
        start: BusAddr,
        size: BusSize,
    ) -> Self {
        Self {
            name,
            start,
            size,
            pbase,
            vbase,
            stride: 0,
            lanes: ByteLanes::for_stride(PLATFORM_ENDIAN, 0),
            bswap: false,
        }
    }

    /// (Re)initializes the descriptor in place and resets the stride to 0.
    pub fn init(
        &mut self,
        name: &'static str,
        pbase: PhysAddr,
        vbase: VirtAddr,
        start: BusAddr,
        size: BusSize,
    ) {
        self.name = name;
        self.start = start;
        self.size = size;
        self.pbase = pbase;
        self.vbase = vbase;
        self.bswap = false;
        self.set_aligned_stride(0);
    }

    /// Spaces consecutive bus units `1 << shift` bytes apart.
    ///
    /// Must not race with users of handles derived from this descriptor;
    /// the `&mut` receiver makes the platform finish this before sharing it.
    pub fn set_aligned_stride(&mut self, shift: u32) {
        debug_assert!(
            shift < usize::BITS,
            "bus_space {}: stride {} too wide",
            self.name,
            shift
        );
        self.stride = shift;
        self.lanes = ByteLanes::for_stride(PLATFORM_ENDIAN, shift);
        debug!("bus_space {}: stride {} lanes {:?}", self.name, shift, self.lanes);
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn start(&self) -> BusAddr {
        self.start
    }

    pub const fn size(&self) -> BusSize {
        self.size
    }

    /// First bus address past the aperture, saturating at the top of the
    /// address space.
    pub const fn end(&self) -> BusAddr {
        self.start.saturating_add(self.size)
    }

    pub const fn pbase(&self) -> PhysAddr {
        self.pbase
    }

    pub const fn vbase(&self) -> VirtAddr {
        self.vbase
    }

    pub const fn stride(&self) -> u32 {
        self.stride
    }

    pub const fn lanes(&self) -> ByteLanes {
        self.lanes
    }

    /// Whether stream accesses swap bytes. Never on this platform.
    pub const fn bswap(&self) -> bool {
        self.bswap
    }

    /// Whether `[addr, addr + size)` lies entirely within the aperture.
    pub const fn contains(&self, addr: BusAddr, size: BusSize) -> bool {
        if addr < self.start {
            return false;
        }
        match (addr.checked_add(size), self.start.checked_add(self.size)) {
            (Some(end), Some(limit)) => end <= limit,
            _ => false,
        }
    }

    /// Returns the address an access of `width` to register `offset` of
    /// `handle` goes to, including the byte-lane correction.
    pub fn reg_addr(&self, handle: BusHandle, offset: BusSize, width: AccessWidth) -> VirtAddr {
        handle
            .wrapping_add(offset << self.stride)
            .wrapping_add(self.lanes.offset(width))
    }

    fn offset_in_mmap_range(&self, addr: BusAddr, off: usize) -> bool {
        if addr < self.start {
            return false;
        }
        match (addr.checked_add(off), self.start.checked_add(self.size)) {
            (Some(end), Some(limit)) => end < limit,
            _ => false,
        }
    }
}

impl BusSpaceOps for BusSpace {
    fn compose_handle(&self, addr: BusAddr, _size: BusSize, flags: MapFlags) -> Result<BusHandle> {
        let handle = self
            .vbase
            .wrapping_add(addr.wrapping_sub(self.start) << self.stride);

        // Every aperture here is linearly mappable, so LINEAR and
        // PREFETCHABLE need no work.
        if !flags.contains(MapFlags::CACHEABLE) {
            return Ok(handle);
        }
        match Segment::of(handle) {
            Segment::Kuseg | Segment::Kseg0 => {
                panic!("bus_space {}: compose_handle: bad address {:#x}", self.name, handle)
            }
            Segment::Kseg1 => Ok(kseg1_to_kseg0(handle)),
            Segment::Kseg2 => {
                // The page may hold other buses' registers or be wired, and
                // neither allows changing cacheability per page.
                #[cfg(feature = "diagnostic")]
                warn!(
                    "bus_space {}: compose_handle: ignore cacheable {:#x}",
                    self.name, handle
                );
                Ok(handle)
            }
        }
    }

    fn dispose_handle(&self, _handle: BusHandle, _size: BusSize) -> Result {
        Ok(())
    }

    fn paddr(&self, handle: BusHandle) -> Result<PhysAddr> {
        let pa = match Segment::of(handle) {
            Segment::Kuseg => panic!("bus_space {}: paddr({:#x}): bad address", self.name, handle),
            Segment::Kseg0 => kseg0_to_phys(handle),
            Segment::Kseg1 => kseg1_to_phys(handle),
            // Wired entries are not visible to a page table walk.
            Segment::Kseg2 => self
                .pbase
                .wrapping_add(handle.as_usize().wrapping_sub(self.vbase.as_usize())),
        };
        Ok(pa)
    }

    fn map(&self, addr: BusAddr, size: BusSize, flags: MapFlags) -> Result<BusHandle> {
        trace!("bus_space {}: map {:#x}+{:#x} {:?}", self.name, addr, size, flags);
        if !self.contains(addr, size) {
            return Err(BusError::OutOfRange);
        }
        self.compose_handle(addr, size, flags)
    }

    fn unmap(&self, handle: BusHandle, size: BusSize) {
        // Disposing a handle cannot fail.
        self.dispose_handle(handle, size).ok();
    }

    fn subregion(&self, handle: BusHandle, offset: BusSize, _size: BusSize) -> Result<BusHandle> {
        Ok(handle.wrapping_add(offset << self.stride))
    }

    // TODO: refuse user mappings of I/O space once the VM layer can tell
    // device pages from memory.
    fn mmap(&self, addr: BusAddr, off: usize, _prot: Prot, _flags: MapFlags) -> Result<Pfn> {
        if !self.offset_in_mmap_range(addr, off) {
            return Err(BusError::OutOfRange);
        }
        Ok(btop(self.pbase.wrapping_add(addr - self.start + off)))
    }

    fn alloc(
        &self,
        _start: BusAddr,
        _end: BusAddr,
        _size: BusSize,
        _align: BusSize,
        _boundary: BusSize,
        _flags: MapFlags,
    ) -> Result<(BusAddr, BusHandle)> {
        panic!("bus_space_alloc() not implemented");
    }

    fn free(&self, _handle: BusHandle, _size: BusSize) {
        panic!("bus_space_free() not implemented");
    }
}

impl fmt::Display for BusSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: [{:#x}, {:#x}) at {:?} / {:?}",
            self.name,
            self.start,
            self.end(),
            self.pbase,
            self.vbase
        )
    }
}
