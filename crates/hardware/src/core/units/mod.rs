//! Execution units and their shared context.
//!
//! Each unit implements one executor of the I-type family:
//! - [`alu`]: lui, addi, addiu, slti, sltiu, andi, ori, xori
//! - [`bru`]: beq, bne
//! - [`lsu`]: lb, lbu, lh, lhu, lw, sb, sh, sw
//!
//! Units borrow the machine state through [`ExecContext`] for the duration of
//! a single instruction and return the rendered assembly text.

/// Arithmetic Logic Unit for immediate operations.
pub mod alu;

/// Branch Resolution Unit for conditional PC displacement.
pub mod bru;

/// Load/Store Unit for sized, extension-aware memory transfers.
pub mod lsu;

use std::fmt;

use crate::common::{ProgramCounter, RegisterFile};
use crate::config::{BranchCompare, BranchDisplacement};
use crate::isa::abi::RegisterNames;
use crate::soc::Memory;

/// Machine state borrowed by an executor for one instruction.
pub struct ExecContext<'a> {
    /// Register file collaborator.
    pub regs: &'a mut dyn RegisterFile,
    /// Program counter collaborator.
    pub pc: &'a mut dyn ProgramCounter,
    /// Memory collaborator.
    pub mem: &'a mut dyn Memory,
    /// Register-name lookup used for disassembly.
    pub names: &'a dyn RegisterNames,
    /// Branch displacement policy.
    pub branch_displacement: BranchDisplacement,
    /// Branch comparison operand.
    pub branch_compare: BranchCompare,
}

impl<'a> ExecContext<'a> {
    /// Bundles the collaborators with the default branch policies.
    pub fn new(
        regs: &'a mut dyn RegisterFile,
        pc: &'a mut dyn ProgramCounter,
        mem: &'a mut dyn Memory,
        names: &'a dyn RegisterNames,
    ) -> Self {
        Self {
            regs,
            pc,
            mem,
            names,
            branch_displacement: BranchDisplacement::default(),
            branch_compare: BranchCompare::default(),
        }
    }

    /// Overrides the branch displacement policy.
    #[must_use]
    pub fn with_branch_displacement(mut self, policy: BranchDisplacement) -> Self {
        self.branch_displacement = policy;
        self
    }

    /// Overrides the branch comparison operand.
    #[must_use]
    pub fn with_branch_compare(mut self, compare: BranchCompare) -> Self {
        self.branch_compare = compare;
        self
    }
}

impl fmt::Debug for ExecContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecContext")
            .field("pc", &self.pc.read())
            .field("branch_displacement", &self.branch_displacement)
            .field("branch_compare", &self.branch_compare)
            .finish_non_exhaustive()
    }
}
