//! Common utilities and types used throughout the interpreter.
//!
//! This module provides the building blocks shared by every executor:
//! 1. **Traps:** The fault taxonomy raised by memory, fetch, and dispatch.
//! 2. **Register Management:** The register-file collaborator and its reference implementation.
//! 3. **Program Counter:** The additive-displacement PC collaborator.
//! 4. **Access Widths:** Sized memory transfer descriptors.

/// Memory access width definitions.
pub mod data;

/// Error types and trap definitions.
pub mod error;

/// Program counter collaborator.
pub mod pc;

/// Register file trait and general-purpose register implementation.
pub mod reg;

pub use data::MemWidth;
pub use error::Trap;
pub use pc::ProgramCounter;
pub use reg::{Gpr, RegisterFile};
