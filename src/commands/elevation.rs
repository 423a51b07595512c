//! Elevation command: show every intermediate value behind a sun state.
//!
//! Unlike `state`, a bad timestamp is reported as an error here, since the
//! point of the command is to find out why a badge looks wrong.

use anyhow::{Result, bail};

use crate::config::Config;
use crate::sun::{self, ELEVATION_DAY, ELEVATION_TWILIGHT};

/// Handle `sunstate elevation <timestamp> [theatre]`.
pub fn handle_elevation_command(
    config: &Config,
    timestamp: &str,
    theatre: Option<&str>,
    json: bool,
) -> Result<()> {
    let theatre = config.resolve_theatre(theatre);

    let Some(report) = sun::evaluate(Some(timestamp), &theatre) else {
        bail!(
            "Invalid mission timestamp '{}' (expected YYYY-MM-DD HH:MM or YYYY-MM-DD HH:MM:SS)",
            timestamp.trim()
        );
    };

    if json {
        return super::print_json(&report);
    }

    log_version!();
    log_block_start!(
        "Solar elevation for {} on {}",
        report.timestamp,
        super::theatre_label(&theatre, report.latitude_fallback)
    );
    log_indented!("latitude:     {:.1}°", report.latitude);
    log_indented!("day of year:  {}", report.day_of_year);
    log_indented!("declination:  {:.2}°", report.declination);
    log_indented!("hour angle:   {:.2}°", report.hour_angle);
    log_indented!("elevation:    {:.2}°", report.elevation);

    log_block_start!("Classified as {}", report.result.state);
    log_indented!(
        "day above {:.0}°, twilight above {:.0}°, night below",
        ELEVATION_DAY,
        ELEVATION_TWILIGHT
    );

    if report.latitude_fallback {
        log_pipe!();
        log_warning!(
            "Theatre '{}' is not in the table, using latitude {:.1}",
            theatre,
            sun::DEFAULT_LATITUDE
        );
    }

    log_end!();
    Ok(())
}

/// Display detailed help for the elevation command.
pub fn display_help() {
    log_version!();
    log_block_start!("elevation - Solar elevation breakdown");
    log_block_start!("Usage: sunstate elevation \"YYYY-MM-DD HH:MM[:SS]\" [theatre]");
    log_block_start!("Description:");
    log_indented!("Prints the latitude, day of year, declination, hour angle and");
    log_indented!("elevation used to pick the sun state. Fails on unreadable");
    log_indented!("timestamps instead of falling back to the day badge.");
    log_block_start!("Examples:");
    log_indented!("sunstate elevation \"2025-06-21 00:00\" Kola");
    log_indented!("sunstate -j elevation 2025-12-21 12:00 SouthAtlantic");
    log_end!();
}
