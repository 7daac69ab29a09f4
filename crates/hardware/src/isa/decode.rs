//! I-type Operand Decoder.
//!
//! Turns a raw instruction word into the operand set every I-type handler
//! consumes. The decoder reads the source register once and never applies
//! sign or zero extension beyond widening the raw immediate; each executor
//! picks its own extension policy.

use crate::common::RegisterFile;
use crate::isa::instruction::{InstructionBits, zero_extend16};

/// Source register operand: index plus the value read at decode time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegOperand {
    /// Register index (0-31).
    pub idx: usize,
    /// Register value read from the register file.
    pub val: u32,
}

/// Immediate operand: the raw field and its zero-extended 32-bit form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImmOperand {
    /// Raw 16-bit immediate (bits 15-0).
    pub raw: u16,
    /// Raw immediate zero-extended to 32 bits.
    pub val: u32,
}

/// Operand set shared by every I-type instruction.
///
/// Produced fresh per call, so two decodes never alias each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImmOperands {
    /// Source register (bits 25-21) and its value.
    pub src1: RegOperand,
    /// Immediate (bits 15-0).
    pub src2: ImmOperand,
    /// Destination/second register index (bits 20-16). Not read at decode time.
    pub dest: usize,
}

/// Decodes the operands of an I-type instruction.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction word.
/// * `regs` - Register file used to read the source register value.
///
/// # Returns
///
/// The populated operand set.
pub fn decode_imm_type(inst: u32, regs: &dyn RegisterFile) -> ImmOperands {
    let rs = inst.rs();
    let imm = inst.imm16();

    ImmOperands {
        src1: RegOperand {
            idx: rs,
            val: regs.read(rs),
        },
        src2: ImmOperand {
            raw: imm,
            val: zero_extend16(imm),
        },
        dest: inst.rt(),
    }
}
