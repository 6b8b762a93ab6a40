use derive_more::Display;

/// Requested reset, numbered like `EFI_RESET_TYPE`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ResetKind {
    #[display(fmt = "cold")]
    Cold,
    #[display(fmt = "warm")]
    Warm,
    #[display(fmt = "shutdown")]
    Shutdown,
    #[display(fmt = "platform specific")]
    PlatformSpecific,
    /// Anything this platform does not know about.
    #[display(fmt = "type {}", _0)]
    Other(u32),
}

impl From<u32> for ResetKind {
    fn from(raw: u32) -> Self {
        match raw {
            0 => ResetKind::Cold,
            1 => ResetKind::Warm,
            2 => ResetKind::Shutdown,
            3 => ResetKind::PlatformSpecific,
            other => ResetKind::Other(other),
        }
    }
}

impl From<ResetKind> for u32 {
    fn from(kind: ResetKind) -> Self {
        match kind {
            ResetKind::Cold => 0,
            ResetKind::Warm => 1,
            ResetKind::Shutdown => 2,
            ResetKind::PlatformSpecific => 3,
            ResetKind::Other(raw) => raw,
        }
    }
}
