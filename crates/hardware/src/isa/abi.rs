//! MIPS o32 register name conventions.
//!
//! Defines the conventional register names used by the disassembler and the
//! register-name lookup collaborator.

/// Register 0 (`$zero`, hardwired to zero by the register file).
pub const REG_ZERO: usize = 0;
/// Register 1 (`$at`, assembler temporary).
pub const REG_AT: usize = 1;
/// Register 2 (`$v0`, first return value).
pub const REG_V0: usize = 2;
/// Register 4 (`$a0`, first argument).
pub const REG_A0: usize = 4;
/// Register 8 (`$t0`, first temporary).
pub const REG_T0: usize = 8;
/// Register 16 (`$s0`, first saved register).
pub const REG_S0: usize = 16;
/// Register 28 (`$gp`, global pointer).
pub const REG_GP: usize = 28;
/// Register 29 (`$sp`, stack pointer).
pub const REG_SP: usize = 29;
/// Register 30 (`$fp`, frame pointer).
pub const REG_FP: usize = 30;
/// Register 31 (`$ra`, return address).
pub const REG_RA: usize = 31;

/// Conventional names for `$0`-`$31`.
const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp", "fp",
    "ra",
];

/// Register index to display name lookup, used only for disassembly.
pub trait RegisterNames {
    /// Returns the display name for register `idx`.
    fn name(&self, idx: usize) -> &str;
}

/// The conventional o32 register names (`zero`, `at`, `v0`, ...).
#[derive(Clone, Copy, Debug, Default)]
pub struct AbiNames;

impl RegisterNames for AbiNames {
    #[inline]
    fn name(&self, idx: usize) -> &str {
        REG_NAMES.get(idx).copied().unwrap_or("$??")
    }
}
