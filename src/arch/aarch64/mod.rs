use aarch64_cpu::asm::barrier;
use core::arch::asm;
use tock_registers::{interfaces::Writeable, registers::WriteOnly};

use super::Machine;

/// The real SoC, reached through physical addresses and EL3.
#[derive(Debug, Default, Clone, Copy)]
pub struct Hardware;

impl Hardware {
    pub const fn new() -> Self {
        Self
    }
}

impl Machine for Hardware {
    unsafe fn mmio_write32(&mut self, addr: usize, value: u32) {
        let reg = &*(addr as *const WriteOnly<u32>);
        reg.set(value);
        barrier::dsb(barrier::SY);
    }

    unsafe fn smc(&mut self, function: u32) -> usize {
        let ret: usize;
        asm!(
            "smc #0",
            inlateout("x0") function as usize => ret,
            lateout("x1") _,
            lateout("x2") _,
            lateout("x3") _,
            // SMCCC 1.0 lets the monitor clobber up to x17
            lateout("x4") _, lateout("x5") _, lateout("x6") _, lateout("x7") _,
            lateout("x8") _, lateout("x9") _, lateout("x10") _, lateout("x11") _,
            lateout("x12") _, lateout("x13") _, lateout("x14") _, lateout("x15") _,
            lateout("x16") _, lateout("x17") _,
            options(nostack),
        );
        ret
    }
}
