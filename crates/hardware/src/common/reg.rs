//! Register File.
//!
//! This module provides the register-file collaborator used by the decoder and executors.
//! It provides:
//! 1. **Abstraction:** The `RegisterFile` trait (`read`/`write` by index).
//! 2. **Storage:** `Gpr`, a 32-entry general-purpose register file.
//! 3. **Invariant Enforcement:** `Gpr` hardwires register 0 to zero.
//! 4. **Observability:** Debug dumping of the register state.

use std::fmt;

use crate::isa::abi::{AbiNames, RegisterNames};

/// Number of architectural general-purpose registers.
pub const NUM_REGS: usize = 32;

/// Register storage indexed 0..31.
///
/// Index-0 semantics are the implementor's business; the executors read and
/// write every index the same way.
pub trait RegisterFile {
    /// Reads the 32-bit value of register `idx`.
    fn read(&self, idx: usize) -> u32;

    /// Writes `val` to register `idx`.
    fn write(&mut self, idx: usize, val: u32);
}

/// General-purpose register file with `$zero` hardwired to 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Returns a snapshot of all 32 registers.
    pub const fn snapshot(&self) -> [u32; NUM_REGS] {
        self.regs
    }

    /// Renders the register file as a two-column table using ABI names.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl RegisterFile for Gpr {
    /// Reads a register. Register 0 always returns 0.
    #[inline]
    fn read(&self, idx: usize) -> u32 {
        if idx == 0 {
            0
        } else {
            self.regs.get(idx).copied().unwrap_or(0)
        }
    }

    /// Writes a register. Writes to register 0 and out-of-range indices are ignored.
    #[inline]
    fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            if let Some(slot) = self.regs.get_mut(idx) {
                *slot = val;
            }
        }
    }
}

impl fmt::Display for Gpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = AbiNames;
        for i in (0..NUM_REGS).step_by(2) {
            writeln!(
                f,
                "{:>4}={:#010x} {:>4}={:#010x}",
                names.name(i),
                self.read(i),
                names.name(i + 1),
                self.read(i + 1)
            )?;
        }
        Ok(())
    }
}
