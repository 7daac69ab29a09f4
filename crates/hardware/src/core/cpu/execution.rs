//! Instruction Execution.
//!
//! This module implements the step loop around the I-type executors. It performs:
//! 1. **Fetch:** Reads the word at the PC, checking word alignment.
//! 2. **Dispatch:** Maps the opcode to an [`IOp`] or raises an illegal-instruction trap.
//! 3. **Execute:** Runs the handler against borrowed collaborators.
//! 4. **Retire:** Advances the PC by one word and records the assembly text.
//!
//! A trap aborts the step before the PC advances, and is returned to the caller.

use tracing::{debug, trace};

use super::{Cpu, INST_BYTES};
use crate::common::{MemWidth, Trap};
use crate::core::units::ExecContext;
use crate::isa::dispatch::IOp;
use crate::soc::Memory;

/// Record of one retired instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Retired {
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// Decoded handler.
    pub op: IOp,
    /// Rendered assembly text.
    pub assembly: String,
}

impl Cpu {
    /// Fetches the instruction word at the current PC.
    ///
    /// # Errors
    ///
    /// [`Trap::InstructionAddressMisaligned`] if the PC is not word aligned,
    /// [`Trap::InstructionAccessFault`] if RAM rejects the read.
    pub fn fetch(&mut self) -> Result<u32, Trap> {
        let pc = self.pc;
        if !MemWidth::Word.is_aligned(pc) {
            return Err(Trap::InstructionAddressMisaligned(pc));
        }
        self.mem
            .read(pc, MemWidth::Word)
            .map_err(|_| Trap::InstructionAccessFault(pc))
    }

    /// Executes exactly one instruction.
    ///
    /// # Errors
    ///
    /// Any fetch, dispatch, or memory trap. The PC is left at the faulting
    /// instruction and no register is written.
    pub fn step(&mut self) -> Result<Retired, Trap> {
        let pc = self.pc;
        self.last_assembly = None;

        let result = self.fetch().and_then(|inst| {
            let op = IOp::decode(inst).ok_or(Trap::IllegalInstruction(inst))?;
            let mut ctx = ExecContext::new(
                &mut self.regs,
                &mut self.pc,
                &mut self.mem,
                &self.names,
            )
            .with_branch_displacement(self.branch_displacement)
            .with_branch_compare(self.branch_compare);
            let assembly = op.execute(inst, &mut ctx)?;
            Ok((inst, op, assembly))
        });

        let (inst, op, assembly) = result.inspect_err(|trap| {
            debug!(value = trap.value(), "{pc:#010x}: trapped with {trap}");
        })?;

        self.pc = self.pc.wrapping_add(INST_BYTES);
        self.retired += 1;
        if self.trace {
            trace!("{pc:#010x}: {inst:08x}  {assembly}");
        }
        self.last_assembly = Some(assembly.clone());

        Ok(Retired {
            pc,
            inst,
            op,
            assembly,
        })
    }

    /// Steps until `max_steps` instructions retire or a trap occurs.
    ///
    /// # Returns
    ///
    /// The number of instructions retired by this call.
    ///
    /// # Errors
    ///
    /// The first trap encountered; instructions retired before it stay committed
    /// and are counted in [`Cpu::retired`].
    pub fn run(&mut self, max_steps: u64) -> Result<u64, Trap> {
        for n in 0..max_steps {
            if let Err(trap) = self.step() {
                debug!(retired = n, "run stopped");
                return Err(trap);
            }
        }
        Ok(max_steps)
    }
}
