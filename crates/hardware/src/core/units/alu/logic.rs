//! ALU immediate logical and comparison operations.
//!
//! `slti` and `sltiu` compare against the sign-extended immediate; `sltiu`
//! then reinterprets both sides as unsigned, so an immediate of `0xFFFF`
//! compares as `0xFFFF_FFFF`. The bitwise operations zero-extend the
//! immediate and never touch the upper half-word of the source.

use super::AluImmOp;
use crate::isa::instruction::{sign_extend16, zero_extend16};

/// Executes a logical or comparison operation.
///
/// Returns `0` for non-logic operations. Comparisons produce `0` or `1`.
pub const fn execute(op: AluImmOp, src: u32, imm: u16) -> u32 {
    match op {
        AluImmOp::Slti => ((src as i32) < (sign_extend16(imm) as i32)) as u32,
        AluImmOp::Sltiu => (src < sign_extend16(imm)) as u32,
        AluImmOp::Andi => src & zero_extend16(imm),
        AluImmOp::Ori => src | zero_extend16(imm),
        AluImmOp::Xori => src ^ zero_extend16(imm),
        _ => 0,
    }
}
