// RK3566 / RK3568

// clock & reset unit
pub const CRU_BASE: usize = 0xFDD2_0000;
pub const CRU_GLB_SRST_FST: usize = 0xD4;

// PMU general register file, OS_REG0 survives a global soft reset
pub const PMU_GRF_BASE: usize = 0xFDC2_0000;
pub const PMU_GRF_OS_REG0: usize = 0x200;

// debug console
pub const UART2_BASE: usize = 0xFE66_0000;
