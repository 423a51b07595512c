//! Command handlers for the `sunstate` binary.
//!
//! Each command lives in its own submodule. Handlers receive the loaded
//! [`Config`](crate::config::Config) and already-parsed arguments, and
//! return `anyhow::Result` so `main` can report failures uniformly.

pub mod elevation;
pub mod enrich;
pub mod help;
pub mod state;
pub mod theatres;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::{self, Config};
use crate::logger::Log;

/// Settle the output mode for a command after the configuration is loaded.
///
/// JSON output turns decorative logging off before anything is reported, so
/// configuration warnings end up on stderr and stdout carries only the
/// document. Returns whether output is JSON.
pub fn prepare_output(config: &Config, json_flag: bool) -> bool {
    let json = config.wants_json(json_flag);
    if json {
        Log::set_enabled(false);
    }
    config::report_warnings(config);
    json
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    crate::logger::write_output(&format!("{text}\n"));
    Ok(())
}

/// Label for a theatre in human output, noting when the fallback latitude applies.
pub(crate) fn theatre_label(theatre: &str, fallback: bool) -> String {
    match (theatre.is_empty(), fallback) {
        (true, _) => "(no theatre)".to_string(),
        (false, true) => format!("{theatre} (unknown theatre)"),
        (false, false) => theatre.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::logger::capture_output;
    use serial_test::serial;

    fn config_with(theatre: &str, output: OutputFormat) -> Config {
        Config {
            default_theatre: Some(theatre.to_string()),
            output,
        }
    }

    #[test]
    #[serial]
    fn test_json_output_stays_clean_with_config_warning() {
        Log::set_enabled(true);
        let config = config_with("Atlantis", OutputFormat::Text);

        let (result, out) = capture_output(|| {
            let json = prepare_output(&config, true);
            state::handle_state_command(&config, "2025-06-21 12:00", None, json, false)
        });
        Log::set_enabled(true);

        result.unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["state"], "day");
    }

    #[test]
    #[serial]
    fn test_json_output_from_config_file_setting() {
        Log::set_enabled(true);
        let config = config_with("Atlantis", OutputFormat::Json);

        let (json, out) = capture_output(|| prepare_output(&config, false));
        let enabled = Log::is_enabled();
        Log::set_enabled(true);

        assert!(json);
        assert!(!enabled);
        assert!(out.is_empty());
    }

    #[test]
    #[serial]
    fn test_text_output_shows_config_warning() {
        Log::set_enabled(true);
        let config = config_with("Atlantis", OutputFormat::Text);

        let (json, out) = capture_output(|| prepare_output(&config, false));

        assert!(!json);
        assert!(Log::is_enabled());
        assert!(out.contains("default_theatre 'Atlantis' is not a known theatre"));
    }

    #[test]
    fn test_theatre_label() {
        assert_eq!(theatre_label("", true), "(no theatre)");
        assert_eq!(theatre_label("Atlantis", true), "Atlantis (unknown theatre)");
        assert_eq!(theatre_label("Caucasus", false), "Caucasus");
    }
}
