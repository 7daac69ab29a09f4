//! Arithmetic Logic Unit (ALU) for immediate operations.
//!
//! This module implements the ALU-immediate executor: `dest = f(src1, imm)`.
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: lui, addi, addiu
//! - [`logic`]:      slti, sltiu, andi, ori, xori
//!
//! The extension policy is part of each operation. Arithmetic and compare
//! operations sign-extend the immediate; the bitwise operations zero-extend it.

/// Immediate arithmetic operations (lui, addi, addiu).
pub mod arithmetic;

/// Immediate logical and comparison operations (slti, sltiu, andi, ori, xori).
pub mod logic;

use tracing::trace;

use super::ExecContext;
use crate::isa::decode::decode_imm_type;
use crate::isa::disasm;

/// ALU operation selected by an I-type opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluImmOp {
    /// `dest = imm << 16`
    Lui,
    /// `dest = src1 + sext(imm)`, wrapping
    Addi,
    /// `dest = src1 + sext(imm)`, wrapping
    Addiu,
    /// `dest = (src1 as i32) < sext(imm) as i32`
    Slti,
    /// `dest = src1 < sext(imm)` (unsigned compare)
    Sltiu,
    /// `dest = src1 & zext(imm)`
    Andi,
    /// `dest = src1 | zext(imm)`
    Ori,
    /// `dest = src1 ^ zext(imm)`
    Xori,
}

impl AluImmOp {
    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lui => "lui",
            Self::Addi => "addi",
            Self::Addiu => "addiu",
            Self::Slti => "slti",
            Self::Sltiu => "sltiu",
            Self::Andi => "andi",
            Self::Ori => "ori",
            Self::Xori => "xori",
        }
    }
}

/// Computes the result of an ALU-immediate operation.
///
/// # Arguments
///
/// * `op`  - The operation to perform.
/// * `src` - Value of the source register (ignored by `Lui`).
/// * `imm` - Raw 16-bit immediate field.
///
/// # Examples
///
/// ```
/// use mipsim_core::core::units::alu::{self, AluImmOp};
///
/// assert_eq!(alu::execute(AluImmOp::Lui, 0, 0x1234), 0x1234_0000);
/// assert_eq!(alu::execute(AluImmOp::Addiu, 5, 0xFFFF), 4);
/// assert_eq!(alu::execute(AluImmOp::Andi, 0xFFFF_FFFF, 0x8000), 0x8000);
/// assert_eq!(alu::execute(AluImmOp::Slti, (-1i32) as u32, 1), 1);
/// assert_eq!(alu::execute(AluImmOp::Sltiu, 0xFFFF_FFFF, 1), 0);
/// ```
pub const fn execute(op: AluImmOp, src: u32, imm: u16) -> u32 {
    match op {
        AluImmOp::Lui | AluImmOp::Addi | AluImmOp::Addiu => arithmetic::execute(op, src, imm),
        AluImmOp::Slti | AluImmOp::Sltiu | AluImmOp::Andi | AluImmOp::Ori | AluImmOp::Xori => {
            logic::execute(op, src, imm)
        }
    }
}

/// Arithmetic Logic Unit for I-type immediate operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Decodes `inst`, computes `op`, and writes the destination register.
    ///
    /// # Returns
    ///
    /// The rendered assembly text.
    pub fn execute_imm(op: AluImmOp, inst: u32, ctx: &mut ExecContext<'_>) -> String {
        let ops = decode_imm_type(inst, &*ctx.regs);
        let result = execute(op, ops.src1.val, ops.src2.raw);
        ctx.regs.write(ops.dest, result);
        trace!(op = op.mnemonic(), rd = ops.dest, result, "alu writeback");

        if op == AluImmOp::Lui {
            disasm::render_lui(ctx.names, ops.dest, ops.src2.raw)
        } else {
            disasm::render_alu(op.mnemonic(), ctx.names, ops.dest, ops.src1.idx, ops.src2.raw)
        }
    }
}
