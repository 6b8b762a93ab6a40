//! PMU general register file.
//!
//! OS_REG0 survives a global soft reset and is read by the boot ROM and
//! the loader to decide where to boot after the reset.

use crate::arch::Machine;

/// Boot ROM download mode (Rockusb "maskrom").
pub const BOOT_BROM_DOWNLOAD: u32 = 0xEF08_A53C;

/// Leaves a boot-mode request for the next boot.
///
/// # Safety
///
/// `os_reg` must be the PMU GRF OS_REG0 of the running SoC.
pub unsafe fn set_boot_mode<M: Machine>(machine: &mut M, os_reg: usize, mode: u32) {
    machine.mmio_write32(os_reg, mode);
}
