//! Synopsys DesignWare 8250 UART, transmit side only.
//!
//! Rockchip wires the 8250 registers at a 4-byte stride. The boot loader
//! already programmed line settings and baud rate, so this only pushes
//! bytes out.

use tock_registers::{
    interfaces::{Readable, Writeable},
    register_bitfields, register_structs,
    registers::{ReadOnly, WriteOnly},
};

register_bitfields! {
    u32,

    /// Line Status Register
    LSR [
        /// Transmit holding register empty
        THRE OFFSET(5) NUMBITS(1) []
    ]
}

register_structs! {
    #[allow(non_snake_case)]
    pub UartBlock {
        (0x00 => THR: WriteOnly<u32>),
        (0x04 => _reserved1),
        (0x14 => LSR: ReadOnly<u32, LSR::Register>),
        (0x18 => @END),
    }
}

pub struct Uart {
    addr: usize,
}

impl Uart {
    /// # Safety
    ///
    /// `addr` must be the base of an enabled 8250 block.
    pub const unsafe fn new(addr: usize) -> Self {
        Self { addr }
    }

    fn regs(&self) -> &UartBlock {
        unsafe { &*(self.addr as *const UartBlock) }
    }

    pub fn put(&self, byte: u8) {
        let regs = self.regs();
        while !regs.LSR.is_set(LSR::THRE) {
            core::hint::spin_loop();
        }
        regs.THR.set(byte as u32);
    }
}

impl core::fmt::Write for Uart {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for b in s.bytes() {
            if b == b'\n' {
                self.put(b'\r');
            }
            self.put(b);
        }
        Ok(())
    }
}
