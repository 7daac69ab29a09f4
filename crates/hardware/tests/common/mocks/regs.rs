use mipsim_core::common::RegisterFile;

/// Plain 32-entry register array; register 0 is writable.
///
/// Lets tests observe that executors leave index-0 policy to the collaborator.
#[derive(Clone, Debug, Default)]
pub struct RawRegs(pub [u32; 32]);

impl RegisterFile for RawRegs {
    fn read(&self, idx: usize) -> u32 {
        self.0[idx]
    }

    fn write(&mut self, idx: usize, val: u32) {
        self.0[idx] = val;
    }
}
