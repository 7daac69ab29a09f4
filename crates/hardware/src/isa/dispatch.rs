//! Opcode dispatch for the I-type family.
//!
//! Maps the primary opcode field onto an [`IOp`] through an exhaustive match.
//! An `IOp` is the handler: [`IOp::execute`] routes the word to the unit that
//! implements it.

use crate::common::Trap;
use crate::core::units::ExecContext;
use crate::core::units::alu::{Alu, AluImmOp};
use crate::core::units::bru::{BranchOp, Bru};
use crate::core::units::lsu::{LoadOp, Lsu, StoreOp};
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes;

/// An I-type instruction, grouped by the executor that implements it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IOp {
    /// ALU-immediate executor.
    Alu(AluImmOp),
    /// Branch executor.
    Branch(BranchOp),
    /// Memory-access executor, load side.
    Load(LoadOp),
    /// Memory-access executor, store side.
    Store(StoreOp),
}

impl IOp {
    /// Looks up the handler for a primary opcode (bits 31-26 already shifted down).
    pub const fn from_opcode(opcode: u32) -> Option<Self> {
        Some(match opcode {
            opcodes::OP_LUI => Self::Alu(AluImmOp::Lui),
            opcodes::OP_ADDI => Self::Alu(AluImmOp::Addi),
            opcodes::OP_ADDIU => Self::Alu(AluImmOp::Addiu),
            opcodes::OP_SLTI => Self::Alu(AluImmOp::Slti),
            opcodes::OP_SLTIU => Self::Alu(AluImmOp::Sltiu),
            opcodes::OP_ANDI => Self::Alu(AluImmOp::Andi),
            opcodes::OP_ORI => Self::Alu(AluImmOp::Ori),
            opcodes::OP_XORI => Self::Alu(AluImmOp::Xori),

            opcodes::OP_BEQ => Self::Branch(BranchOp::Beq),
            opcodes::OP_BNE => Self::Branch(BranchOp::Bne),

            opcodes::OP_LB => Self::Load(LoadOp::Lb),
            opcodes::OP_LBU => Self::Load(LoadOp::Lbu),
            opcodes::OP_LH => Self::Load(LoadOp::Lh),
            opcodes::OP_LHU => Self::Load(LoadOp::Lhu),
            opcodes::OP_LW => Self::Load(LoadOp::Lw),

            opcodes::OP_SB => Self::Store(StoreOp::Sb),
            opcodes::OP_SH => Self::Store(StoreOp::Sh),
            opcodes::OP_SW => Self::Store(StoreOp::Sw),

            _ => return None,
        })
    }

    /// Looks up the handler for a full instruction word.
    #[inline]
    pub fn decode(inst: u32) -> Option<Self> {
        Self::from_opcode(inst.opcode())
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Alu(op) => op.mnemonic(),
            Self::Branch(op) => op.mnemonic(),
            Self::Load(op) => op.mnemonic(),
            Self::Store(op) => op.mnemonic(),
        }
    }

    /// Executes `inst` against the borrowed machine state.
    ///
    /// The caller is responsible for having looked `inst` up to this `IOp`.
    ///
    /// # Errors
    ///
    /// Memory traps from loads and stores, unmodified.
    pub fn execute(self, inst: u32, ctx: &mut ExecContext<'_>) -> Result<String, Trap> {
        match self {
            Self::Alu(op) => Ok(Alu::execute_imm(op, inst, ctx)),
            Self::Branch(op) => Ok(Bru::execute(op, inst, ctx)),
            Self::Load(op) => Lsu::load(op, inst, ctx),
            Self::Store(op) => Lsu::store(op, inst, ctx),
        }
    }
}

/// Looks up and executes a single instruction word.
///
/// # Errors
///
/// [`Trap::IllegalInstruction`] for opcodes outside the I-type family, or the
/// memory trap raised by a load or store.
pub fn execute(inst: u32, ctx: &mut ExecContext<'_>) -> Result<String, Trap> {
    IOp::decode(inst)
        .ok_or(Trap::IllegalInstruction(inst))?
        .execute(inst, ctx)
}
