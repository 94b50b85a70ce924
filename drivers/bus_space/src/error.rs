// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Recoverable bus-space errors.
//!
//! Address invariant violations are not represented here: those panic.

/// Errors a caller can correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// The requested range is not inside the bus aperture.
    OutOfRange,
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BusError::OutOfRange => write!(f, "address range outside bus aperture"),
        }
    }
}

/// Result type for bus-space operations.
pub type Result<T = ()> = core::result::Result<T, BusError>;
