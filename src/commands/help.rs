//! Help command: general or per-command help.

use anyhow::Result;

/// Run the help command.
///
/// # Arguments
/// * `command` - Command to describe (None = general help)
pub fn run_help_command(command: Option<&str>) -> Result<()> {
    match command {
        None => crate::args::display_help(),
        Some("state") | Some("s") => super::state::display_help(),
        Some("elevation") | Some("e") => super::elevation::display_help(),
        Some("theatres") | Some("t") => super::theatres::display_help(),
        Some("enrich") => super::enrich::display_help(),
        Some("help") => display_help_help(),
        Some(unknown) => {
            log_warning!("Unknown command: {}", unknown);
            crate::args::display_help();
        }
    }
    Ok(())
}

fn display_help_help() {
    log_version!();
    log_block_start!("help - Display help information");
    log_block_start!("Usage: sunstate help [COMMAND]");
    log_block_start!("Examples:");
    log_indented!("sunstate help");
    log_indented!("sunstate help elevation");
    log_end!();
}
