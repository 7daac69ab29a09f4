//! Instruction encoding and field extraction utilities.
//!
//! Provides the bit masks and the `InstructionBits` trait used to pull the
//! shared I-type fields out of a 32-bit instruction word.

/// Bit mask for the source register field (bits 25-21), before shifting.
pub const RS_MASK: u32 = 0x03E0_0000;
/// Bit mask for the destination/second register field (bits 20-16), before shifting.
pub const RT_MASK: u32 = 0x001F_0000;
/// Bit mask for the immediate field (bits 15-0).
pub const IMM_MASK: u32 = 0x0000_FFFF;

/// Width of the immediate field in bits.
pub const IMM_SIZE: u32 = 16;
/// Width of a register field in bits.
pub const RT_SIZE: u32 = 5;
/// Shift that brings the opcode field down to bit 0.
pub const OPCODE_SHIFT: u32 = 26;

/// Trait for extracting I-type fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the primary opcode field (bits 31-26).
    fn opcode(&self) -> u32;

    /// Extracts the source register field (bits 25-21).
    fn rs(&self) -> usize;

    /// Extracts the destination/second register field (bits 20-16).
    fn rt(&self) -> usize;

    /// Extracts the raw 16-bit immediate field (bits 15-0).
    fn imm16(&self) -> u16;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self >> OPCODE_SHIFT
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self & RS_MASK) >> (RT_SIZE + IMM_SIZE)) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self & RT_MASK) >> IMM_SIZE) as usize
    }

    #[inline(always)]
    fn imm16(&self) -> u16 {
        (self & IMM_MASK) as u16
    }
}

/// Sign-extends a 16-bit field to 32 bits by replicating bit 15.
#[inline(always)]
pub const fn sign_extend16(imm: u16) -> u32 {
    imm as i16 as i32 as u32
}

/// Zero-extends a 16-bit field to 32 bits.
#[inline(always)]
pub const fn zero_extend16(imm: u16) -> u32 {
    imm as u32
}
