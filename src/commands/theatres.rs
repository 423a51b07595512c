//! Theatres command: list the reference latitude table.

use anyhow::Result;
use serde::Serialize;

use crate::config::Config;
use crate::sun::{DEFAULT_LATITUDE, known_theatres};

#[derive(Debug, Serialize)]
struct TheatreEntry {
    key: &'static str,
    latitude: f64,
}

#[derive(Debug, Serialize)]
struct TheatreListing {
    theatres: Vec<TheatreEntry>,
    default_latitude: f64,
    default_theatre: Option<String>,
}

/// Handle `sunstate theatres`.
pub fn handle_theatres_command(config: &Config, json: bool) -> Result<()> {
    if json {
        let listing = TheatreListing {
            theatres: known_theatres()
                .iter()
                .map(|&(key, latitude)| TheatreEntry { key, latitude })
                .collect(),
            default_latitude: DEFAULT_LATITUDE,
            default_theatre: config.default_theatre.clone(),
        };
        return super::print_json(&listing);
    }

    log_version!();
    log_block_start!("Known theatres:");
    for (key, latitude) in known_theatres() {
        log_indented!("{:<16} {:>6.1}°", key, latitude);
    }
    log_block_start!("Other theatres use latitude {:.1}°", DEFAULT_LATITUDE);
    log_indented!("Names are matched ignoring case, spaces, '_' and '-'");
    if let Some(theatre) = &config.default_theatre {
        log_block_start!("Configured default theatre: {}", theatre);
    }
    log_end!();
    Ok(())
}

/// Display detailed help for the theatres command.
pub fn display_help() {
    log_version!();
    log_block_start!("theatres - List known theatres");
    log_block_start!("Usage: sunstate theatres");
    log_block_start!("Description:");
    log_indented!("Shows each DCS theatre with the reference latitude used for");
    log_indented!("the sun calculation, and the fallback for unlisted maps.");
    log_end!();
}
