//! Reset dispatch.
//!
//! Every action here either takes the machine down or returns, and
//! returning is the only way a reset can fail: the hardware gives no other
//! signal. Success is therefore typed as [`Infallible`].

mod kind;
pub mod payload;

pub use kind::ResetKind;

use core::convert::Infallible;
use derive_more::Display;
use log::{debug, info, warn};

use crate::arch::Machine;
use crate::board::ResetLayout;
use crate::driver::{cru, grf, psci};
use payload::ResetData;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ResetError {
    /// The action was carried out and the machine kept running.
    #[display(fmt = "{} reset is not supported", _0)]
    Unsupported(ResetKind),
    /// Nothing was attempted.
    #[display(fmt = "unknown reset type {}", _0)]
    UnknownKind(u32),
}

/// UEFI status code that came with a reset request.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "{:#x}", _0)]
pub struct ResetStatus(pub usize);

impl ResetStatus {
    pub const SUCCESS: ResetStatus = ResetStatus(0);

    /// Error codes carry the top bit.
    pub fn is_error(self) -> bool {
        self.0 & (1 << (usize::BITS - 1)) != 0
    }
}

pub struct ResetSystem<M> {
    machine: M,
    layout: &'static ResetLayout,
}

impl<M: Machine> ResetSystem<M> {
    pub fn new(machine: M, layout: &'static ResetLayout) -> Self {
        Self { machine, layout }
    }

    pub fn layout(&self) -> &'static ResetLayout {
        self.layout
    }

    /// Resets every core to its initial state through the CRU global soft
    /// reset. The fallback of every other reset path.
    pub fn reset_warm(&mut self) -> Result<Infallible, ResetError> {
        unsafe { cru::global_soft_reset(&mut self.machine, self.layout.warm_reset) };
        Err(ResetError::Unsupported(ResetKind::Warm))
    }

    /// Same as [`reset_warm`](Self::reset_warm).
    ///
    /// PSCI `SYSTEM_RESET` would be the proper cold reset, but the call
    /// comes back on these SoCs without resetting, so it is not issued.
    pub fn reset_cold(&mut self) -> Result<Infallible, ResetError> {
        self.reset_warm()
            .map_err(|_| ResetError::Unsupported(ResetKind::Cold))
    }

    /// Powers the system off with PSCI `SYSTEM_OFF`.
    pub fn reset_shutdown(&mut self) -> Result<Infallible, ResetError> {
        let _ = self.system_off();
        Err(ResetError::Unsupported(ResetKind::Shutdown))
    }

    /// Issues `SYSTEM_OFF` and decodes x0 if the monitor hands control back.
    fn system_off(&mut self) -> Option<psci::PsciError> {
        let ret = unsafe { self.machine.smc(psci::SYSTEM_OFF) };
        psci::PsciError::from_ret(ret)
    }

    /// Asks the boot ROM for download mode on the next boot, then warm
    /// resets. `data` is not consulted.
    pub fn reset_platform_specific(&mut self, _data: &[u8]) -> Result<Infallible, ResetError> {
        unsafe {
            grf::set_boot_mode(
                &mut self.machine,
                self.layout.boot_mode,
                grf::BOOT_BROM_DOWNLOAD,
            )
        };
        self.reset_warm()
            .map_err(|_| ResetError::Unsupported(ResetKind::PlatformSpecific))
    }

    /// Dispatches a reset request. Unknown kinds touch nothing.
    pub fn reset_system(
        &mut self,
        kind: ResetKind,
        status: ResetStatus,
        data: &[u8],
    ) -> Result<Infallible, ResetError> {
        if let ResetKind::Other(raw) = kind {
            debug!("ignoring reset request of unknown type {}", raw);
            return Err(ResetError::UnknownKind(raw));
        }

        report(kind, status, data);

        let result = match kind {
            ResetKind::Warm => self.reset_warm(),
            ResetKind::Cold => self.reset_cold(),
            ResetKind::Shutdown => {
                if let Some(err) = self.system_off() {
                    debug!("SYSTEM_OFF returned {}", err);
                }
                Err(ResetError::Unsupported(ResetKind::Shutdown))
            }
            ResetKind::PlatformSpecific => self.reset_platform_specific(data),
            ResetKind::Other(raw) => Err(ResetError::UnknownKind(raw)),
        };

        if let Err(err) = &result {
            warn!("{}", err);
        }
        result
    }
}

fn report(kind: ResetKind, status: ResetStatus, data: &[u8]) {
    if status.is_error() {
        warn!("{} reset with error status {}", kind, status);
    }

    let data = ResetData::parse(data);
    match (data.description.is_empty(), data.guid) {
        (true, None) => info!("{} reset", kind),
        (false, None) => info!("{} reset: {}", kind, data.description),
        (true, Some(guid)) => info!("{} reset ({})", kind, guid),
        (false, Some(guid)) => info!("{} reset: {} ({})", kind, data.description, guid),
    }
}
