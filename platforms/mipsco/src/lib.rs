// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Bus discovery for MIPS Computer Systems machines.
//!
//! Every bus the machine has is listed in [`config::devices::BUS_WINDOWS`].
//! [`init_buses`] turns each window into a [`BusSpace`] that drivers look up
//! by name.
#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

pub mod config;

use core::ops::Range;

use bus_space::BusSpace;
use lazyinit::LazyInit;

use crate::config::{BusWindow, devices::BUS_WINDOWS};

static BUSES: [LazyInit<BusSpace>; BUS_WINDOWS.len()] =
    [const { LazyInit::new() }; BUS_WINDOWS.len()];

/// Error returned when two windows overlap in kernel virtual space.
pub type OverlapError = (Range<usize>, Range<usize>);

/// Checks that the windows, sorted by virtual base, do not overlap.
pub fn check_overlap<'a>(
    windows: impl IntoIterator<Item = &'a BusWindow>,
) -> Result<(), OverlapError> {
    let mut last = Range::default();
    for w in windows {
        let (s, n) = w.virt_range();
        if last.end > s {
            return Err((last, s..s + n));
        }
        last = s..s + n;
    }
    Ok(())
}

fn attach(w: &BusWindow) -> BusSpace {
    let mut bs = BusSpace::new(w.name, w.pbase, w.vbase, w.start, w.size);
    // Stride is fixed before the descriptor is published.
    bs.set_aligned_stride(w.stride);
    bs
}

/// Initializes a descriptor for every configured bus. Later calls do
/// nothing.
///
/// # Panics
///
/// Panics if the configured windows overlap.
pub fn init_buses() {
    if let Err((a, b)) = check_overlap(BUS_WINDOWS) {
        panic!("bus windows overlap: {:#x?} and {:#x?}", a, b);
    }
    for (slot, w) in BUSES.iter().zip(BUS_WINDOWS) {
        if let Some(bs) = slot.call_once(|| attach(w)) {
            info!("bus_space: attached {}", bs);
        }
    }
}

/// Returns the initialized buses.
pub fn buses() -> impl Iterator<Item = &'static BusSpace> {
    BUSES.iter().filter_map(LazyInit::get)
}

/// Looks up an initialized bus by name.
pub fn bus(name: &str) -> Option<&'static BusSpace> {
    buses().find(|bs| bs.name() == name)
}

/// The onboard I/O bus.
pub fn obio() -> Option<&'static BusSpace> {
    bus("obio")
}
