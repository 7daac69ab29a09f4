//! Memory collaborator trait.
//!
//! This module defines the `Memory` trait implemented by every backing store the
//! executors can target. It provides:
//! 1. **Access:** Sized reads and writes at absolute addresses.
//! 2. **Fault Policy:** Implementors decide alignment and range rules and report
//!    violations as [`Trap`] values, which the executors pass through untouched.

use crate::common::{MemWidth, Trap};

/// Byte-addressable store with sized transfers.
///
/// Reads return the transferred bytes zero-extended to 32 bits; the executor
/// applies any sign extension. Writes receive a value already masked to `width`.
pub trait Memory {
    /// Reads `width` bytes at `addr`.
    ///
    /// # Errors
    ///
    /// Returns a load trap if the implementor rejects the access.
    fn read(&mut self, addr: u32, width: MemWidth) -> Result<u32, Trap>;

    /// Writes the low `width` bytes of `val` at `addr`.
    ///
    /// # Errors
    ///
    /// Returns a store trap if the implementor rejects the access.
    fn write(&mut self, addr: u32, width: MemWidth, val: u32) -> Result<(), Trap>;
}
