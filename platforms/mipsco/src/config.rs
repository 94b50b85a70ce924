// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Platform configuration constants.

use bus_space::{BusAddr, BusSize, PhysAddr, VirtAddr};

/// Address layout of the machine.
pub mod plat {
    use mipsaddr::{KSEG1_START, KSEG2_START, PHYS_MASK};

    /// Onboard I/O: the whole physical range kseg1 can reach.
    pub const OBIO_PADDR: usize = 0;
    pub const OBIO_VADDR: usize = KSEG1_START;
    pub const OBIO_SIZE: usize = PHYS_MASK + 1;

    /// VME A32 window. It sits above 512M physical, so only a wired TLB
    /// entry in kseg2 can reach it.
    pub const VME_PADDR: usize = 0x6000_0000;
    pub const VME_VADDR: usize = KSEG2_START;
    pub const VME_SIZE: usize = 0x0100_0000;
    /// VME registers are one byte wide on 4-byte boundaries.
    pub const VME_STRIDE: u32 = 2;
}

/// A bus aperture found at boot.
#[derive(Debug, Clone, Copy)]
pub struct BusWindow {
    pub name: &'static str,
    pub pbase: PhysAddr,
    pub vbase: VirtAddr,
    pub start: BusAddr,
    pub size: BusSize,
    /// Log2 of the register spacing.
    pub stride: u32,
}

impl BusWindow {
    /// Kernel virtual range covered by the window, as (start, size).
    pub const fn virt_range(&self) -> (usize, usize) {
        (self.vbase.as_usize(), self.size << self.stride)
    }
}

pub mod devices {
    use bus_space::{PhysAddr, VirtAddr};

    use super::{BusWindow, plat::*};

    /// Buses present on every machine, ordered by virtual address.
    pub const BUS_WINDOWS: &[BusWindow] = &[
        BusWindow {
            name: "obio",
            pbase: PhysAddr::from_usize(OBIO_PADDR),
            vbase: VirtAddr::from_usize(OBIO_VADDR),
            start: 0,
            size: OBIO_SIZE,
            stride: 0,
        },
        BusWindow {
            name: "vme",
            pbase: PhysAddr::from_usize(VME_PADDR),
            vbase: VirtAddr::from_usize(VME_VADDR),
            start: 0,
            size: VME_SIZE,
            stride: VME_STRIDE,
        },
    ];
}
