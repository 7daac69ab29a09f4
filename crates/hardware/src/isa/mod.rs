//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains field extraction, opcode constants, operand decoding, dispatch, and
//! disassembly for the MIPS32 immediate-operand (I-type) instruction family.
//!
//! # I-type layout
//!
//! ```text
//!  31      26 25   21 20   16 15                0
//! +----------+-------+-------+-------------------+
//! |  opcode  |  rs   |  rt   |     immediate     |
//! +----------+-------+-------+-------------------+
//! ```

/// Register name mappings and the register-name lookup trait.
pub mod abi;

/// Operand decoding shared by every I-type instruction.
pub mod decode;

/// Instruction disassembler for trace output and tooling.
pub mod disasm;

/// Opcode-to-handler dispatch for the I-type family.
pub mod dispatch;

/// Instruction field extraction utilities.
pub mod instruction;

/// Primary opcode constants.
pub mod opcodes;
