//! Core processor implementation.
//!
//! This module contains the execution units for the I-type family and the
//! minimal CPU that owns the collaborators and runs the step loop.

/// CPU state and the fetch/dispatch/execute step loop.
pub mod cpu;

/// Execution units (ALU-immediate, branch, load/store) and their shared context.
pub mod units;

pub use self::cpu::Cpu;
pub use self::units::ExecContext;
