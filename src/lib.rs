//! Platform reset for Rockchip RK35xx firmware.
//!
//! Warm and cold resets go through the CRU global soft reset, shutdown
//! goes to the secure monitor with PSCI `SYSTEM_OFF`, and the
//! platform-specific reset leaves a boot ROM download request before
//! resetting. See [`reset::ResetSystem`].

#![cfg_attr(not(test), no_std)]

pub mod utils;

pub mod arch;
pub mod board;
pub mod driver;
pub mod reset;

#[cfg(feature = "efi-abi")]
pub mod ffi;

pub use arch::{Hardware, Machine};
pub use board::{Board, ResetLayout};
pub use reset::{ResetError, ResetKind, ResetStatus, ResetSystem};
