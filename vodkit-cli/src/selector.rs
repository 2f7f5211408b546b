//! Client selection
//!
//! Maps the caller-supplied mode string onto exactly one account binding.
//! Everything here is validated before any network call is attempted.

use anyhow::{Result, bail};
use vodkit_client::{AadOptions, AccountBinding, RmsOptions};

/// Which media service flavor a run targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceMode {
    /// Directory-authenticated service; manages its own transform
    Ams,
    /// API-key service; transform writes are not supported there
    Rms,
}

impl ServiceMode {
    /// Parse the mode discriminator; anything but "ams" or "rms" is rejected
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "ams" => Ok(ServiceMode::Ams),
            "rms" => Ok(ServiceMode::Rms),
            other => bail!("Invalid media service type: {other} (expected \"ams\" or \"rms\")"),
        }
    }
}

/// Pick the account binding matching the mode
///
/// Pure selection: no client is constructed and no network call is made.
/// Fails when the selected mode's options were not configured.
pub fn resolve_binding(
    mode: ServiceMode,
    ams: Option<AadOptions>,
    rms: Option<RmsOptions>,
) -> Result<AccountBinding> {
    match mode {
        ServiceMode::Ams => match ams {
            Some(options) => Ok(AccountBinding::Aad(options)),
            None => bail!("mode \"ams\" selected but no AMS configuration found (set VODKIT_AMS_*)"),
        },
        ServiceMode::Rms => match rms {
            Some(options) => Ok(AccountBinding::ApiKey(options)),
            None => bail!("mode \"rms\" selected but no RMS configuration found (set VODKIT_RMS_*)"),
        },
    }
}
