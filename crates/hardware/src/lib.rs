//! MIPS32 I-type interpreter core.
//!
//! This crate implements the bit-exact execution engine for the immediate-operand
//! instruction family of a 32-bit MIPS interpreter:
//! 1. **ISA:** Field extraction, operand decoding, opcode dispatch, and disassembly.
//! 2. **Units:** ALU-immediate, branch, and load/store executors.
//! 3. **Collaborators:** Register file, program counter, and memory traits with
//!    reference implementations (`Gpr`, `Ram`).
//! 4. **CPU:** A minimal fetch/dispatch/execute step loop over those collaborators.

/// Common types (traps, register file, program counter, access widths).
pub mod common;
/// Interpreter configuration (defaults, enums, JSON loading).
pub mod config;
/// CPU core (step loop and execution units).
pub mod core;
/// Instruction set (fields, decode, dispatch, disassembly, ABI names).
pub mod isa;
/// Memory subsystem (`Memory` trait and flat RAM).
pub mod soc;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Main CPU type; owns registers, PC, and RAM.
pub use crate::core::Cpu;
/// Architectural trap raised by collaborators and the dispatcher.
pub use crate::common::Trap;
