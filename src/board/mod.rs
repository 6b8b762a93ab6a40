//! Board selection.
//!
//! The two supported SoC families keep their reset controls at different
//! physical addresses. The Cargo feature picks the board at build time,
//! [`Board::current`] resolves it once, and the resulting [`ResetLayout`]
//! is handed to whoever needs the addresses.

pub mod rk356x;
pub mod rk3588;

use derive_more::Display;

/// Supported SoC families.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Board {
    #[display(fmt = "RK356x")]
    Rk356x,
    #[display(fmt = "RK3588")]
    Rk3588,
}

/// Physical addresses of the registers the reset paths touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetLayout {
    /// CRU_GLB_SRST_FST, first global soft reset.
    pub warm_reset: usize,
    /// PMU GRF OS_REG0, read back by the boot ROM to pick a boot mode.
    pub boot_mode: usize,
    /// Debug UART used by the console logger.
    pub debug_uart: usize,
}

const RK356X_LAYOUT: ResetLayout = ResetLayout {
    warm_reset: rk356x::CRU_BASE + rk356x::CRU_GLB_SRST_FST,
    boot_mode: rk356x::PMU_GRF_BASE + rk356x::PMU_GRF_OS_REG0,
    debug_uart: rk356x::UART2_BASE,
};

const RK3588_LAYOUT: ResetLayout = ResetLayout {
    warm_reset: rk3588::CRU_BASE + rk3588::CRU_GLB_SRST_FST,
    boot_mode: rk3588::PMU_GRF_BASE + rk3588::PMU_GRF_OS_REG0,
    debug_uart: rk3588::UART2_BASE,
};

impl Board {
    /// The board this crate was built for.
    ///
    /// `rk356x` takes precedence when both board features are enabled;
    /// without it the build targets RK3588.
    pub const fn current() -> Self {
        if cfg!(feature = "rk356x") {
            Board::Rk356x
        } else {
            Board::Rk3588
        }
    }

    pub const fn layout(self) -> &'static ResetLayout {
        match self {
            Board::Rk356x => &RK356X_LAYOUT,
            Board::Rk3588 => &RK3588_LAYOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rk356x_addresses() {
        let layout = Board::Rk356x.layout();
        assert_eq!(layout.warm_reset, 0xFDD2_00D4);
        assert_eq!(layout.boot_mode, 0xFDC2_0200);
    }

    #[test]
    fn rk3588_addresses() {
        let layout = Board::Rk3588.layout();
        assert_eq!(layout.warm_reset, 0xFD7C_0C08);
        assert_eq!(layout.boot_mode, 0xFD58_8080);
    }

    #[test]
    fn current_follows_features() {
        let expected = if cfg!(feature = "rk356x") {
            Board::Rk356x
        } else {
            Board::Rk3588
        };
        assert_eq!(Board::current(), expected);
    }
}
