//! Trap definitions.
//!
//! This module defines the faults that can abort an instruction. It provides:
//! 1. **Trap Representation:** Fetch, dispatch, load, and store faults.
//! 2. **Propagation:** Collaborators raise these and executors return them unmodified.
//! 3. **Error Handling:** Integration with `std::error::Error` through `thiserror`.

use thiserror::Error;

/// Faults raised while fetching, dispatching, or executing an instruction.
///
/// The executors never construct load/store variants themselves; those come
/// from the [`Memory`](crate::soc::Memory) collaborator and are passed through
/// as-is so the fetch loop can decide what to do with them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// Program counter is not word aligned. Carries the PC.
    #[error("InstructionAddressMisaligned({0:#010x})")]
    InstructionAddressMisaligned(u32),

    /// Instruction fetch hit an address the memory rejected. Carries the PC.
    #[error("InstructionAccessFault({0:#010x})")]
    InstructionAccessFault(u32),

    /// Opcode is outside the implemented instruction family. Carries the raw word.
    #[error("IllegalInstruction({0:#010x})")]
    IllegalInstruction(u32),

    /// Load effective address is not naturally aligned.
    #[error("LoadAddressMisaligned({0:#010x})")]
    LoadAddressMisaligned(u32),

    /// Load effective address is outside the backing store.
    #[error("LoadAccessFault({0:#010x})")]
    LoadAccessFault(u32),

    /// Store effective address is not naturally aligned.
    #[error("StoreAddressMisaligned({0:#010x})")]
    StoreAddressMisaligned(u32),

    /// Store effective address is outside the backing store.
    #[error("StoreAccessFault({0:#010x})")]
    StoreAccessFault(u32),
}

impl Trap {
    /// Returns the faulting address or instruction word carried by the trap.
    pub const fn value(&self) -> u32 {
        match *self {
            Self::InstructionAddressMisaligned(v)
            | Self::InstructionAccessFault(v)
            | Self::IllegalInstruction(v)
            | Self::LoadAddressMisaligned(v)
            | Self::LoadAccessFault(v)
            | Self::StoreAddressMisaligned(v)
            | Self::StoreAccessFault(v) => v,
        }
    }
}
