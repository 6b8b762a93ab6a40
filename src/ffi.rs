//! `ResetSystemLib` entry points for a UEFI firmware host.
//!
//! Each call builds a fresh [`reset::ResetSystem`] over the real hardware for the
//! board this crate was built for. Returning from any of them means the
//! reset did not happen.
//!
//! The crate builds as an rlib, so the symbols land in the Rust firmware
//! binary that links it, which also owns the panic handler. A C firmware
//! build picks them up from that binary, not from this crate on its own.

#![allow(non_snake_case)]

use core::ffi::c_void;

use crate::arch::Hardware;
use crate::board::Board;
use crate::reset::{self, ResetKind, ResetStatus};

fn system() -> reset::ResetSystem<Hardware> {
    reset::ResetSystem::new(Hardware::new(), Board::current().layout())
}

/// # Safety
///
/// `data` must be null or point to `size` readable bytes.
unsafe fn reset_data<'a>(size: usize, data: *const c_void) -> &'a [u8] {
    if data.is_null() || size == 0 {
        &[]
    } else {
        core::slice::from_raw_parts(data.cast::<u8>(), size)
    }
}

#[no_mangle]
pub extern "efiapi" fn ResetWarm() {
    let _ = system().reset_warm();
}

#[no_mangle]
pub extern "efiapi" fn ResetCold() {
    let _ = system().reset_cold();
}

#[no_mangle]
pub extern "efiapi" fn ResetShutdown() {
    let _ = system().reset_shutdown();
}

/// # Safety
///
/// `reset_data` must be null or point to `data_size` readable bytes.
#[no_mangle]
pub unsafe extern "efiapi" fn ResetPlatformSpecific(data_size: usize, reset_data: *const c_void) {
    let data = self::reset_data(data_size, reset_data);
    let _ = system().reset_platform_specific(data);
}

/// # Safety
///
/// `reset_data` must be null or point to `data_size` readable bytes.
#[no_mangle]
pub unsafe extern "efiapi" fn ResetSystem(
    reset_type: u32,
    reset_status: usize,
    data_size: usize,
    reset_data: *const c_void,
) {
    let data = self::reset_data(data_size, reset_data);
    let _ = system().reset_system(ResetKind::from(reset_type), ResetStatus(reset_status), data);
}
