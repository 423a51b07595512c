//! Configuration validation.

use anyhow::Result;

use super::Config;
use crate::sun::theatre::{DEFAULT_LATITUDE, is_known_theatre};

/// Reject configurations that cannot be used.
///
/// An unknown `default_theatre` is not an error; see [`config_warnings`].
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(theatre) = config.default_theatre.as_deref()
        && theatre.trim().is_empty()
    {
        anyhow::bail!("default_theatre must not be empty (remove the line to unset it)");
    }

    Ok(())
}

/// Problems worth reporting that do not stop the configuration from loading.
///
/// Returned rather than logged: the output mode is only known once the
/// configuration is loaded, and JSON output must keep stdout clean.
pub fn config_warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();

    if let Some(theatre) = config.default_theatre.as_deref()
        && !is_known_theatre(theatre)
    {
        warnings.push(format!(
            "default_theatre '{theatre}' is not a known theatre, using latitude {DEFAULT_LATITUDE:.1}"
        ));
    }

    warnings
}

/// Print configuration warnings, on stderr when decorative logging is off.
pub fn report_warnings(config: &Config) {
    for warning in config_warnings(config) {
        if crate::logger::Log::is_enabled() {
            log_warning!("{}", warning);
        } else {
            log_warning_standalone!("{}", warning);
        }
    }
}
