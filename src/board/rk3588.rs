// RK3588 / RK3588S

// clock & reset unit
pub const CRU_BASE: usize = 0xFD7C_0000;
pub const CRU_GLB_SRST_FST: usize = 0xC08;

// PMU0 general register file, OS_REG0 survives a global soft reset
pub const PMU_GRF_BASE: usize = 0xFD58_8000;
pub const PMU_GRF_OS_REG0: usize = 0x80;

// debug console
pub const UART2_BASE: usize = 0xFEB5_0000;
