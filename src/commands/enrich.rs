//! Enrich command: attach sun states to DCSServerBot payloads.
//!
//! Reads a `/serverapi/servers` body (file or stdin) and an optional
//! `/serverapi/serverstats` body, and prints the status page document the
//! website serves. Output is always JSON.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;

use crate::mission::{enrich_servers, load_servers_json, load_stats_json};

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read servers payload from stdin")?;
            Ok(content)
        }
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read servers payload from {path}")),
    }
}

/// Handle `sunstate enrich [servers.json|-] [--stats stats.json]`.
pub fn handle_enrich_command(servers_path: Option<&str>, stats_path: Option<&str>) -> Result<()> {
    let servers = load_servers_json(&read_input(servers_path)?)?;

    let stats = match stats_path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read stats payload from {path}"))?;
            load_stats_json(&content)?
        }
        None => None,
    };

    super::print_json(&enrich_servers(servers, stats))
}

/// Display detailed help for the enrich command.
pub fn display_help() {
    log_version!();
    log_block_start!("enrich - Add sun states to DCSServerBot payloads");
    log_block_start!("Usage: sunstate enrich [servers.json|-] [--stats stats.json]");
    log_block_start!("Description:");
    log_indented!("Reads the servers list returned by DCSServerBot's /serverapi/servers");
    log_indented!("(from a file, or stdin when omitted or '-') and prints the status");
    log_indented!("page JSON with a sun_state on every running mission.");
    log_indented!("A 'null' servers body yields an empty page.");
    log_block_start!("Examples:");
    log_indented!("curl -s http://dcs:9876/serverapi/servers | sunstate enrich");
    log_indented!("sunstate enrich servers.json --stats serverstats.json");
    log_end!();
}
