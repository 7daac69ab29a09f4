//! ALU immediate arithmetic operations.
//!
//! `addi` and `addiu` compute the same wrapping sum. The signed-overflow trap
//! that distinguishes `addi` architecturally is not modeled.

use super::AluImmOp;
use crate::isa::instruction::{sign_extend16, zero_extend16};

/// Shift that places the `lui` immediate in the upper half-word.
const LUI_SHIFT: u32 = 16;

/// Executes an immediate arithmetic operation.
///
/// Returns `0` for non-arithmetic operations.
pub const fn execute(op: AluImmOp, src: u32, imm: u16) -> u32 {
    match op {
        AluImmOp::Lui => zero_extend16(imm) << LUI_SHIFT,
        AluImmOp::Addi | AluImmOp::Addiu => src.wrapping_add(sign_extend16(imm)),
        _ => 0,
    }
}
