//! PSCI 0.2 function ids and return codes, SMC calling convention.

use derive_more::Display;

pub const SYSTEM_OFF: u32 = 0x8400_0008;
/// Not issued on RK35xx: the call comes back without resetting.
pub const SYSTEM_RESET: u32 = 0x8400_0009;

pub const SUCCESS: i32 = 0;
pub const NOT_SUPPORTED: i32 = -1;
pub const INVALID_PARAMETERS: i32 = -2;
pub const DENIED: i32 = -3;
pub const ALREADY_ON: i32 = -4;
pub const ON_PENDING: i32 = -5;
pub const INTERNAL_FAILURE: i32 = -6;
pub const NOT_PRESENT: i32 = -7;
pub const DISABLED: i32 = -8;
pub const INVALID_ADDRESS: i32 = -9;

/// Why a PSCI call came back.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum PsciError {
    #[display(fmt = "NOT_SUPPORTED")]
    NotSupported,
    #[display(fmt = "INVALID_PARAMETERS")]
    InvalidParameters,
    #[display(fmt = "DENIED")]
    Denied,
    #[display(fmt = "ALREADY_ON")]
    AlreadyOn,
    #[display(fmt = "ON_PENDING")]
    OnPending,
    #[display(fmt = "INTERNAL_FAILURE")]
    InternalFailure,
    #[display(fmt = "NOT_PRESENT")]
    NotPresent,
    #[display(fmt = "DISABLED")]
    Disabled,
    #[display(fmt = "INVALID_ADDRESS")]
    InvalidAddress,
    #[display(fmt = "unknown return code {}", _0)]
    Unknown(i32),
}

impl PsciError {
    /// Decodes x0 after a call. `None` means the call reported success.
    pub fn from_ret(ret: usize) -> Option<Self> {
        // return codes are signed 32-bit values in w0
        let code = ret as u32 as i32;
        let err = match code {
            SUCCESS => return None,
            NOT_SUPPORTED => PsciError::NotSupported,
            INVALID_PARAMETERS => PsciError::InvalidParameters,
            DENIED => PsciError::Denied,
            ALREADY_ON => PsciError::AlreadyOn,
            ON_PENDING => PsciError::OnPending,
            INTERNAL_FAILURE => PsciError::InternalFailure,
            NOT_PRESENT => PsciError::NotPresent,
            DISABLED => PsciError::Disabled,
            INVALID_ADDRESS => PsciError::InvalidAddress,
            other => PsciError::Unknown(other),
        };
        Some(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_sign_extended_and_narrow_codes() {
        assert_eq!(PsciError::from_ret(-1isize as usize), Some(PsciError::NotSupported));
        assert_eq!(PsciError::from_ret(0xFFFF_FFFD), Some(PsciError::Denied));
        assert_eq!(PsciError::from_ret(0), None);
        assert_eq!(PsciError::from_ret(42), Some(PsciError::Unknown(42)));
    }

    #[test]
    fn display_uses_psci_names() {
        assert_eq!(std::format!("{}", PsciError::NotSupported), "NOT_SUPPORTED");
        assert_eq!(std::format!("{}", PsciError::Unknown(-20)), "unknown return code -20");
    }
}
