//! `sunstate` entry point.
//!
//! Parses arguments, loads the configuration and dispatches to a command
//! handler from the library. Any error is reported once here and turns into
//! exit code 1.

use anyhow::Result;

use mission_sunstate::args::{self, CliAction, GlobalFlags, ParsedArgs};
use mission_sunstate::commands;
use mission_sunstate::config::{self, Config};
use mission_sunstate::logger::Log;
use mission_sunstate::{log_error_exit, log_error_standalone, log_pipe, log_warning};

const EXIT_FAILURE: i32 = 1;

/// Apply global flags and load the configuration.
///
/// Returns the config and whether output is JSON. `--json` silences the
/// decorative logger before loading; an `output = "json"` setting does so
/// right after, before any configuration warning is reported.
fn prepare(flags: &GlobalFlags) -> Result<(Config, bool)> {
    if flags.json {
        Log::set_enabled(false);
    }
    config::set_config_dir(flags.config_dir.clone())?;
    let config = config::load()?;
    let json = commands::prepare_output(&config, flags.json);
    Ok((config, json))
}

fn run(action: CliAction) -> Result<()> {
    match action {
        CliAction::State {
            flags,
            timestamp,
            theatre,
        } => {
            let (config, json) = prepare(&flags)?;
            commands::state::handle_state_command(
                &config,
                &timestamp,
                theatre.as_deref(),
                json,
                flags.debug_enabled,
            )
        }
        CliAction::Elevation {
            flags,
            timestamp,
            theatre,
        } => {
            let (config, json) = prepare(&flags)?;
            commands::elevation::handle_elevation_command(
                &config,
                &timestamp,
                theatre.as_deref(),
                json,
            )
        }
        CliAction::Theatres { flags } => {
            let (config, json) = prepare(&flags)?;
            commands::theatres::handle_theatres_command(&config, json)
        }
        CliAction::Enrich {
            flags,
            servers_path,
            stats_path,
        } => {
            // Always JSON; config is still loaded so a broken file is reported
            Log::set_enabled(false);
            prepare(&flags)?;
            commands::enrich::handle_enrich_command(
                servers_path.as_deref(),
                stats_path.as_deref(),
            )
        }
        CliAction::HelpCommand { command } => commands::help::run_help_command(Some(&command)),
        CliAction::ShowHelp => commands::help::run_help_command(None),
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            log_pipe!();
            log_warning!("Invalid arguments, see usage below");
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn main() {
    let parsed = ParsedArgs::from_env();

    if let Err(e) = run(parsed.action) {
        if Log::is_enabled() {
            log_error_exit!("{:#}", e);
        } else {
            log_error_standalone!("{:#}", e);
        }
        std::process::exit(EXIT_FAILURE);
    }
}
