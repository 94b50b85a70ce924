// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

use crate::{PhysAddr, VirtAddr};

/// Start of the cached direct-mapped segment.
pub const KSEG0_START: usize = 0x8000_0000;
/// Start of the uncached direct-mapped segment.
pub const KSEG1_START: usize = 0xa000_0000;
/// Start of the TLB-mapped kernel segment.
pub const KSEG2_START: usize = 0xc000_0000;
/// Physical address bits reachable through kseg0/kseg1.
pub const PHYS_MASK: usize = 0x1fff_ffff;

/// A segment of the MIPS32 virtual address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// User space, TLB mapped.
    Kuseg,
    /// Kernel, cached, direct mapped.
    Kseg0,
    /// Kernel, uncached, direct mapped.
    Kseg1,
    /// Kernel, TLB mapped. Also covers kseg3.
    Kseg2,
}

impl Segment {
    /// Returns the segment `va` falls in.
    pub const fn of(va: VirtAddr) -> Self {
        let va = va.as_usize();
        if va < KSEG0_START {
            Self::Kuseg
        } else if va < KSEG1_START {
            Self::Kseg0
        } else if va < KSEG2_START {
            Self::Kseg1
        } else {
            Self::Kseg2
        }
    }

    /// Whether addresses in this segment translate without the TLB.
    pub const fn is_direct_mapped(self) -> bool {
        matches!(self, Self::Kseg0 | Self::Kseg1)
    }

    /// Whether accesses through this segment go through the cache.
    ///
    /// TLB-mapped segments take their cacheability from the page entry, so
    /// only kseg0 is known to be cached here.
    pub const fn is_cached(self) -> bool {
        matches!(self, Self::Kseg0)
    }
}

#[inline]
pub const fn kseg0_to_phys(va: VirtAddr) -> PhysAddr {
    PhysAddr::from_usize(va.as_usize() & PHYS_MASK)
}

#[inline]
pub const fn kseg1_to_phys(va: VirtAddr) -> PhysAddr {
    PhysAddr::from_usize(va.as_usize() & PHYS_MASK)
}

#[inline]
pub const fn phys_to_kseg0(pa: PhysAddr) -> VirtAddr {
    VirtAddr::from_usize(pa.as_usize() | KSEG0_START)
}

#[inline]
pub const fn phys_to_kseg1(pa: PhysAddr) -> VirtAddr {
    VirtAddr::from_usize(pa.as_usize() | KSEG1_START)
}

/// Re-expresses an uncached kseg1 address in the cached kseg0 window.
#[inline]
pub const fn kseg1_to_kseg0(va: VirtAddr) -> VirtAddr {
    phys_to_kseg0(kseg1_to_phys(va))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pa, va};

    #[test]
    fn test_segment_boundaries() {
        assert_eq!(Segment::of(va!(0)), Segment::Kuseg);
        assert_eq!(Segment::of(va!(KSEG0_START - 1)), Segment::Kuseg);
        assert_eq!(Segment::of(va!(KSEG0_START)), Segment::Kseg0);
        assert_eq!(Segment::of(va!(KSEG1_START - 1)), Segment::Kseg0);
        assert_eq!(Segment::of(va!(KSEG1_START)), Segment::Kseg1);
        assert_eq!(Segment::of(va!(KSEG2_START - 1)), Segment::Kseg1);
        assert_eq!(Segment::of(va!(KSEG2_START)), Segment::Kseg2);
        assert_eq!(Segment::of(va!(0xffff_f000)), Segment::Kseg2);
    }

    #[test]
    fn test_segment_properties() {
        assert!(!Segment::Kuseg.is_direct_mapped());
        assert!(Segment::Kseg0.is_direct_mapped() && Segment::Kseg0.is_cached());
        assert!(Segment::Kseg1.is_direct_mapped() && !Segment::Kseg1.is_cached());
        assert!(!Segment::Kseg2.is_direct_mapped());
    }

    #[test]
    fn test_direct_translations() {
        assert_eq!(kseg1_to_phys(va!(0xbfc0_0000)), pa!(0x1fc0_0000));
        assert_eq!(kseg0_to_phys(va!(0x8000_1000)), pa!(0x1000));
        assert_eq!(phys_to_kseg1(pa!(0x1fc0_0000)), va!(0xbfc0_0000));
        assert_eq!(phys_to_kseg0(pa!(0x1000)), va!(0x8000_1000));
        assert_eq!(kseg1_to_kseg0(va!(0xbfc0_0000)), va!(0x9fc0_0000));
    }
}
