//! CPU Core Definition and Initialization.
//!
//! This module defines the `Cpu` structure, the owner of every collaborator the
//! I-type executors borrow. It coordinates the following:
//! 1. **State Management:** Register file, program counter, and RAM.
//! 2. **Program Loading:** Copying raw images into RAM.
//! 3. **Execution:** The fetch/dispatch/execute step loop (see [`execution`]).

/// Instruction fetch, dispatch, and retirement.
pub mod execution;

use crate::common::{Gpr, Trap};
use crate::config::{BranchCompare, BranchDisplacement, Config};
use crate::isa::abi::AbiNames;
use crate::soc::Ram;

pub use self::execution::Retired;

/// Size of one instruction word in bytes.
pub const INST_BYTES: u32 = 4;

/// CPU state: collaborators plus execution policy.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Program counter.
    pub pc: u32,
    /// Flat RAM.
    pub mem: Ram,
    /// Register names used for disassembly.
    pub names: AbiNames,
    /// Emit a trace event per retired instruction.
    pub trace: bool,
    /// Branch displacement policy.
    pub branch_displacement: BranchDisplacement,
    /// Branch comparison operand.
    pub branch_compare: BranchCompare,
    /// Number of instructions retired since construction.
    pub retired: u64,
    /// Assembly text of the most recently executed instruction.
    last_assembly: Option<String>,
}

impl Cpu {
    /// Creates a CPU with zeroed registers and RAM sized by `config`.
    pub fn new(config: &Config) -> Self {
        Self::with_memory(Ram::from_config(&config.memory), config)
    }

    /// Creates a CPU around an existing RAM.
    pub fn with_memory(mem: Ram, config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            pc: config.start_pc(),
            mem,
            names: AbiNames,
            trace: config.general.trace_instructions || cfg!(feature = "always-trace"),
            branch_displacement: config.exec.branch_displacement,
            branch_compare: config.exec.branch_compare,
            retired: 0,
            last_assembly: None,
        }
    }

    /// Copies a raw byte image into RAM at `addr`.
    ///
    /// # Errors
    ///
    /// [`Trap::StoreAccessFault`] if the image does not fit in RAM.
    pub fn load_program(&mut self, addr: u32, image: &[u8]) -> Result<(), Trap> {
        self.mem.load(addr, image)
    }

    /// Copies instruction words into RAM at `addr`, little-endian.
    ///
    /// # Errors
    ///
    /// [`Trap::StoreAccessFault`] if the words do not fit in RAM.
    pub fn load_words(&mut self, addr: u32, words: &[u32]) -> Result<(), Trap> {
        let image: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        self.mem.load(addr, &image)
    }

    /// Assembly text of the last instruction that completed, if any.
    ///
    /// Cleared at the start of every step, so it is `None` after a trap.
    pub fn last_assembly(&self) -> Option<&str> {
        self.last_assembly.as_deref()
    }
}
