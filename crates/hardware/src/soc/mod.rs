//! Memory subsystem.
//!
//! This module provides the memory collaborator the load/store executor talks to:
//! 1. **Traits:** `Memory`, the sized read/write interface with its own fault policy.
//! 2. **RAM:** `Ram`, a flat little-endian backing store mapped at a base address.

/// Flat RAM backing store.
pub mod memory;

/// The `Memory` collaborator trait.
pub mod traits;

pub use memory::Ram;
pub use traits::Memory;
