//! State command: print the sun state badge for a mission clock.
//!
//! Mirrors what the status page shows, including the fail-open behavior: an
//! unreadable timestamp prints the day badge rather than an error.

use anyhow::Result;

use crate::config::Config;
use crate::sun::{self, SunStateResult};

/// Handle `sunstate state <timestamp> [theatre]`.
pub fn handle_state_command(
    config: &Config,
    timestamp: &str,
    theatre: Option<&str>,
    json: bool,
    debug_enabled: bool,
) -> Result<()> {
    let theatre = config.resolve_theatre(theatre);
    let result = sun::get_sun_state(Some(timestamp), &theatre);

    if json {
        return super::print_json(&result);
    }

    let label = super::theatre_label(&theatre, !sun::theatre::is_known_theatre(&theatre));

    log_version!();
    log_block_start!("Sun state for '{}' on {}", timestamp.trim(), label);
    display_result(&result);

    if debug_enabled {
        log_pipe!();
        match sun::evaluate(Some(timestamp), &theatre) {
            Some(report) => {
                log_debug!("Parsed clock: {}", report.timestamp);
                log_indented!("latitude:    {:.1}", report.latitude);
                log_indented!("elevation:   {:.2}°", report.elevation);
            }
            None => {
                log_debug!("Timestamp not readable, showing the default badge");
            }
        }
    }

    log_end!();
    Ok(())
}

fn display_result(result: &SunStateResult) {
    log_indented!("state:   {}", result.state);
    log_indented!("tooltip: {}", result.tooltip);
    log_indented!("icon:    {}", result.icon);
    log_indented!("color:   {}", result.color);
}

/// Display detailed help for the state command.
pub fn display_help() {
    log_version!();
    log_block_start!("state - Sun state badge for a mission clock");
    log_block_start!("Usage: sunstate state \"YYYY-MM-DD HH:MM[:SS]\" [theatre]");
    log_block_start!("Description:");
    log_indented!("Classifies the mission time of day as day, night, dawn or dusk");
    log_indented!("from the sun elevation at the theatre's reference latitude.");
    log_indented!("Unreadable timestamps show the day badge, like the status page.");
    log_indented!("Without a theatre, default_theatre from sunstate.toml is used.");
    log_block_start!("Examples:");
    log_indented!("sunstate state \"2025-06-21 04:30\" Caucasus");
    log_indented!("sunstate --json state \"2025-12-21 18:00\" \"Persian Gulf\"");
    log_end!();
}
