// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Byte-lane corrections for registers narrower than their spacing.
//!
//! When a bus places 1- or 2-byte registers on 4-byte boundaries, a
//! big-endian CPU finds the meaningful byte at the *end* of each word.
//! The correction is only known for one bus configuration; other
//! combinations are left uncorrected rather than guessed.

/// Byte order of a bus as seen from the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

/// Byte order of every bus on this platform.
pub const PLATFORM_ENDIAN: Endian = Endian::Big;

/// Width of a single register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessWidth {
    U8,
    U16,
    U32,
    U64,
}

/// Per-width address corrections added to a register address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteLanes {
    pub off1: usize,
    pub off2: usize,
    pub off4: usize,
    pub off8: usize,
}

impl ByteLanes {
    /// No correction at any width.
    pub const NONE: Self = Self {
        off1: 0,
        off2: 0,
        off4: 0,
        off8: 0,
    };

    /// Big-endian bus, registers on 4-byte boundaries.
    const BIG_STRIDE_4: Self = Self {
        off1: 3,
        off2: 2,
        off4: 0,
        off8: 0,
    };

    /// Looks up the correction table for a bus of byte order `endian`
    /// whose registers are spaced `1 << shift` bytes apart.
    pub const fn for_stride(endian: Endian, shift: u32) -> Self {
        match (endian, shift) {
            (Endian::Big, 2) => Self::BIG_STRIDE_4,
            _ => Self::NONE,
        }
    }

    /// Returns the correction for an access of `width`.
    pub const fn offset(&self, width: AccessWidth) -> usize {
        match width {
            AccessWidth::U8 => self.off1,
            AccessWidth::U16 => self.off2,
            AccessWidth::U32 => self.off4,
            AccessWidth::U64 => self.off8,
        }
    }
}
