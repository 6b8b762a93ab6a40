// Builds for anything other than an aarch64 RK35xx target have no reset
// hardware: every action is a no-op, so every reset reports back.

use super::Machine;
use crate::driver::psci::NOT_SUPPORTED;

#[derive(Debug, Default, Clone, Copy)]
pub struct Hardware;

impl Hardware {
    pub const fn new() -> Self {
        Self
    }
}

impl Machine for Hardware {
    unsafe fn mmio_write32(&mut self, addr: usize, value: u32) {
        log::trace!("mmio write {:#x} <- {:#x} ignored", addr, value);
    }

    unsafe fn smc(&mut self, function: u32) -> usize {
        log::trace!("smc {:#x} ignored", function);
        NOT_SUPPORTED as usize
    }
}
