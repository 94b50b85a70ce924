// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

use core::fmt;

bitflags::bitflags! {
    /// Hints passed to [`map`](crate::BusSpaceOps::map).
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct MapFlags: u32 {
        /// Access the range through the cache.
        const CACHEABLE = 0x01;
        /// The range must be linearly addressable.
        const LINEAR = 0x02;
        /// Reads may be prefetched.
        const PREFETCHABLE = 0x04;
    }
}

bitflags::bitflags! {
    /// Protection requested by [`mmap`](crate::BusSpaceOps::mmap).
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct Prot: u32 {
        const READ = 1 << 0;
        const WRITE = 1 << 1;
        const EXEC = 1 << 2;
    }
}

impl fmt::Debug for MapFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

impl fmt::Debug for Prot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}
