//! Primary opcode constants (bits 31-26) for the MIPS32 I-type family.

/// Branch on equal.
pub const OP_BEQ: u32 = 0x04;
/// Branch on not equal.
pub const OP_BNE: u32 = 0x05;
/// Add immediate (overflow trap not modeled).
pub const OP_ADDI: u32 = 0x08;
/// Add immediate unsigned.
pub const OP_ADDIU: u32 = 0x09;
/// Set on less than immediate.
pub const OP_SLTI: u32 = 0x0A;
/// Set on less than immediate unsigned.
pub const OP_SLTIU: u32 = 0x0B;
/// And immediate.
pub const OP_ANDI: u32 = 0x0C;
/// Or immediate.
pub const OP_ORI: u32 = 0x0D;
/// Xor immediate.
pub const OP_XORI: u32 = 0x0E;
/// Load upper immediate.
pub const OP_LUI: u32 = 0x0F;
/// Load byte.
pub const OP_LB: u32 = 0x20;
/// Load half-word.
pub const OP_LH: u32 = 0x21;
/// Load word.
pub const OP_LW: u32 = 0x23;
/// Load byte unsigned.
pub const OP_LBU: u32 = 0x24;
/// Load half-word unsigned.
pub const OP_LHU: u32 = 0x25;
/// Store byte.
pub const OP_SB: u32 = 0x28;
/// Store half-word.
pub const OP_SH: u32 = 0x29;
/// Store word.
pub const OP_SW: u32 = 0x2B;
