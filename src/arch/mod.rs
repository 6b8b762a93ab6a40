#[cfg(all(feature = "aarch64", target_arch = "aarch64"))]
#[path = "aarch64/mod.rs"]
mod inner;

#[cfg(not(all(feature = "aarch64", target_arch = "aarch64")))]
#[path = "host/mod.rs"]
mod inner;

#[cfg(test)]
pub mod mock;

pub use inner::Hardware;

/// The two things a reset path can do to the machine.
///
/// Reset actions never return on success, so implementations must not
/// assume a call comes back. Tests substitute a recorder.
pub trait Machine {
    /// 32-bit store to a physical address.
    ///
    /// # Safety
    ///
    /// `addr` must be a 4-byte aligned device register that accepts the
    /// write; the write may take the whole system down.
    unsafe fn mmio_write32(&mut self, addr: usize, value: u32);

    /// Secure monitor call with `function` in x0, returning x0 if the
    /// monitor hands control back.
    ///
    /// # Safety
    ///
    /// `function` must be an SMC function id the secure monitor accepts.
    unsafe fn smc(&mut self, function: u32) -> usize;
}
