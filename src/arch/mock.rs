use std::vec::Vec;

use super::Machine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Write32 { addr: usize, value: u32 },
    Smc(u32),
}

/// Records every primitive instead of touching hardware. Nothing halts, so
/// each reset path runs to its failure return.
#[derive(Debug, Default)]
pub struct MockMachine {
    pub accesses: Vec<Access>,
    /// x0 handed back from every SMC.
    pub smc_ret: usize,
}

impl MockMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<Access> {
        core::mem::take(&mut self.accesses)
    }
}

impl Machine for MockMachine {
    unsafe fn mmio_write32(&mut self, addr: usize, value: u32) {
        self.accesses.push(Access::Write32 { addr, value });
    }

    unsafe fn smc(&mut self, function: u32) -> usize {
        self.accesses.push(Access::Smc(function));
        self.smc_ret
    }
}
