pub mod cru;
pub mod grf;
pub mod psci;
#[cfg(all(feature = "aarch64", target_arch = "aarch64"))]
pub mod uart;
