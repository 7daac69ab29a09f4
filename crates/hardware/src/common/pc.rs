//! Program counter collaborator.
//!
//! The executors never own the PC. Branches only hand it a signed displacement.

/// Program counter storage owned outside the executors.
pub trait ProgramCounter {
    /// Returns the current program counter.
    fn read(&self) -> u32;

    /// Adds a signed displacement to the program counter, wrapping at 2^32.
    fn add(&mut self, displacement: i32);
}

impl ProgramCounter for u32 {
    #[inline]
    fn read(&self) -> u32 {
        *self
    }

    #[inline]
    fn add(&mut self, displacement: i32) {
        *self = self.wrapping_add_signed(displacement);
    }
}
