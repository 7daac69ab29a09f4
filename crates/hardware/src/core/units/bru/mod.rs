//! Branch Resolution Unit (BRU).
//!
//! Resolves `beq`/`bne`: compares the source register against the immediate
//! operand (or, under [`BranchCompare::Register`], the register in the second
//! register field) and, when the condition holds, hands the program counter a
//! word-aligned displacement. The displacement is added to the PC of
//! the branch itself; stepping past the branch is the fetch loop's job.

use tracing::trace;

use super::ExecContext;
use crate::config::{BranchCompare, BranchDisplacement};
use crate::isa::decode::decode_imm_type;
use crate::isa::disasm;
use crate::isa::instruction::{sign_extend16, zero_extend16};

/// Shift that turns a word offset into a byte offset.
const WORD_SHIFT: u32 = 2;

/// Branch condition selected by an I-type opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BranchOp {
    /// Taken when both operands are equal.
    Beq,
    /// Taken when the operands differ.
    Bne,
}

impl BranchOp {
    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Beq => "beq",
            Self::Bne => "bne",
        }
    }
}

/// Evaluates the branch condition.
#[inline]
pub const fn taken(op: BranchOp, a: u32, b: u32) -> bool {
    match op {
        BranchOp::Beq => a == b,
        BranchOp::Bne => a != b,
    }
}

/// Converts a raw branch immediate into a signed byte displacement.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::BranchDisplacement;
/// use mipsim_core::core::units::bru::displacement;
///
/// assert_eq!(displacement(0x0003, BranchDisplacement::SignExtended), 12);
/// assert_eq!(displacement(0xFFFF, BranchDisplacement::SignExtended), -4);
/// assert_eq!(displacement(0xFFFF, BranchDisplacement::Unextended), 0x3_FFFC);
/// ```
#[inline]
pub const fn displacement(imm: u16, policy: BranchDisplacement) -> i32 {
    let widened = match policy {
        BranchDisplacement::SignExtended => sign_extend16(imm),
        BranchDisplacement::Unextended => zero_extend16(imm),
    };
    (widened << WORD_SHIFT) as i32
}

/// Branch Resolution Unit for conditional PC displacement.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Decodes `inst`, evaluates `op`, and displaces the PC if taken.
    ///
    /// # Returns
    ///
    /// The rendered assembly text.
    pub fn execute(op: BranchOp, inst: u32, ctx: &mut ExecContext<'_>) -> String {
        let ops = decode_imm_type(inst, &*ctx.regs);
        let rhs = match ctx.branch_compare {
            BranchCompare::Immediate => ops.src2.val,
            BranchCompare::Register => ctx.regs.read(ops.dest),
        };

        if taken(op, ops.src1.val, rhs) {
            let disp = displacement(ops.src2.raw, ctx.branch_displacement);
            ctx.pc.add(disp);
            trace!(op = op.mnemonic(), disp, target = ctx.pc.read(), "branch taken");
        }

        disasm::render_alu(op.mnemonic(), ctx.names, ops.dest, ops.src1.idx, ops.src2.raw)
    }
}
