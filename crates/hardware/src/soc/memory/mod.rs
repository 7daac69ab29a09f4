//! Flat system RAM.
//!
//! This module implements the reference memory collaborator. It provides:
//! 1. **Storage:** A zero-initialized byte vector mapped at a base address.
//! 2. **Byte Order:** Little-endian half-word and word transfers.
//! 3. **Fault Policy:** Range checks and optional natural-alignment checks,
//!    reported as load/store traps.

use std::fmt;

use crate::common::{MemWidth, Trap};
use crate::config::MemoryConfig;
use crate::soc::traits::Memory;

/// Flat little-endian RAM.
#[derive(Clone)]
pub struct Ram {
    data: Vec<u8>,
    base: u32,
    enforce_alignment: bool,
}

/// Direction of an access, used to pick the right trap variant.
#[derive(Clone, Copy)]
enum Access {
    Load,
    Store,
}

impl Ram {
    /// Creates a zero-filled RAM of `size` bytes mapped at `base`.
    ///
    /// # Arguments
    ///
    /// * `base` - Address of the first byte.
    /// * `size` - Size in bytes.
    /// * `enforce_alignment` - Reject half-word and word accesses that are not naturally aligned.
    pub fn new(base: u32, size: usize, enforce_alignment: bool) -> Self {
        Self {
            data: vec![0; size],
            base,
            enforce_alignment,
        }
    }

    /// Creates RAM from the memory section of a configuration.
    pub fn from_config(config: &MemoryConfig) -> Self {
        Self::new(config.ram_base, config.ram_size, config.enforce_alignment)
    }

    /// Base address of the RAM region.
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Size of the RAM region in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the RAM region has no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Copies `bytes` into RAM starting at absolute address `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::StoreAccessFault`] carrying `addr`
    /// if the image does not fit. Nothing is written in that case.
    pub fn load(&mut self, addr: u32, bytes: &[u8]) -> Result<(), Trap> {
        let start = self.offset(addr, bytes.len(), Access::Store)?;
        self.data[start..start + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    /// Returns a view of `len` bytes starting at absolute address `addr`, if in range.
    pub fn slice(&self, addr: u32, len: usize) -> Option<&[u8]> {
        let start = addr.checked_sub(self.base)? as usize;
        self.data.get(start..start.checked_add(len)?)
    }

    fn offset(&self, addr: u32, len: usize, access: Access) -> Result<usize, Trap> {
        let fault = || match access {
            Access::Load => Trap::LoadAccessFault(addr),
            Access::Store => Trap::StoreAccessFault(addr),
        };
        let start = addr.checked_sub(self.base).ok_or_else(fault)? as usize;
        let end = start.checked_add(len).ok_or_else(fault)?;
        if end > self.data.len() {
            return Err(fault());
        }
        Ok(start)
    }

    fn check(&self, addr: u32, width: MemWidth, access: Access) -> Result<usize, Trap> {
        if self.enforce_alignment && !width.is_aligned(addr) {
            return Err(match access {
                Access::Load => Trap::LoadAddressMisaligned(addr),
                Access::Store => Trap::StoreAddressMisaligned(addr),
            });
        }
        self.offset(addr, width.bytes() as usize, access)
    }
}

impl fmt::Debug for Ram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ram")
            .field("base", &format_args!("{:#010x}", self.base))
            .field("len", &self.data.len())
            .field("enforce_alignment", &self.enforce_alignment)
            .finish()
    }
}

impl Memory for Ram {
    fn read(&mut self, addr: u32, width: MemWidth) -> Result<u32, Trap> {
        let i = self.check(addr, width, Access::Load)?;
        let d = &self.data;
        Ok(match width {
            MemWidth::Byte => u32::from(d[i]),
            MemWidth::Half => u32::from(u16::from_le_bytes([d[i], d[i + 1]])),
            MemWidth::Word => u32::from_le_bytes([d[i], d[i + 1], d[i + 2], d[i + 3]]),
        })
    }

    fn write(&mut self, addr: u32, width: MemWidth, val: u32) -> Result<(), Trap> {
        let i = self.check(addr, width, Access::Store)?;
        let n = width.bytes() as usize;
        self.data[i..i + n].copy_from_slice(&val.to_le_bytes()[..n]);
        Ok(())
    }
}
