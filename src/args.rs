//! Command-line argument parsing.
//!
//! Arguments are parsed by hand into a [`CliAction`]. Global options may
//! appear anywhere on the line; the first positional argument is the command.
//!
//! Mission timestamps contain a space, so they are normally quoted. An
//! unquoted `YYYY-MM-DD HH:MM` split across two arguments is joined back.

/// Options accepted by every command.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GlobalFlags {
    pub debug_enabled: bool,
    pub json: bool,
    pub config_dir: Option<String>,
}

/// What the binary should do.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Print the sun state badge for a mission clock
    State {
        flags: GlobalFlags,
        timestamp: String,
        theatre: Option<String>,
    },
    /// Print the elevation breakdown for a mission clock
    Elevation {
        flags: GlobalFlags,
        timestamp: String,
        theatre: Option<String>,
    },
    /// List the known theatres
    Theatres { flags: GlobalFlags },
    /// Attach sun states to DCSServerBot payloads
    Enrich {
        flags: GlobalFlags,
        /// Servers payload file; `None` or `-` reads stdin
        servers_path: Option<String>,
        stats_path: Option<String>,
    },
    /// Detailed help for one command
    HelpCommand { command: String },

    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to invalid arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

fn looks_like_date(arg: &str) -> bool {
    arg.len() == 10 && arg.as_bytes().get(4) == Some(&b'-') && arg.as_bytes().get(7) == Some(&b'-')
}

/// Pull a mission timestamp off the front of the positional arguments.
fn take_timestamp(positionals: &[String]) -> Option<(String, &[String])> {
    let first = positionals.first()?;
    match positionals.get(1) {
        Some(second) if looks_like_date(first) && second.contains(':') => {
            Some((format!("{first} {second}"), &positionals[2..]))
        }
        _ => Some((first.clone(), &positionals[1..])),
    }
}

impl ParsedArgs {
    /// Parse arguments, the first of which is the program name.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut flags = GlobalFlags::default();
        let mut display_help = false;
        let mut display_version = false;
        let mut unknown_arg_found = false;
        let mut stats_path: Option<String> = None;
        let mut positionals: Vec<String> = Vec::new();

        let mut i = 0;
        while i < args_vec.len() {
            let arg = &args_vec[i];
            match arg.as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => flags.debug_enabled = true,
                "--json" | "-j" => flags.json = true,
                "--config" | "-c" => {
                    if i + 1 < args_vec.len() && !args_vec[i + 1].starts_with('-') {
                        flags.config_dir = Some(args_vec[i + 1].clone());
                        i += 1;
                    } else {
                        log_warning!("Missing directory for --config. Usage: --config <directory>");
                        unknown_arg_found = true;
                    }
                }
                "--stats" => {
                    if i + 1 < args_vec.len() && !args_vec[i + 1].starts_with('-') {
                        stats_path = Some(args_vec[i + 1].clone());
                        i += 1;
                    } else {
                        log_warning!("Missing file for --stats. Usage: --stats <file>");
                        unknown_arg_found = true;
                    }
                }
                "-" => positionals.push(arg.clone()),
                _ if arg.starts_with('-') => {
                    log_warning!("Unknown option: {arg}");
                    unknown_arg_found = true;
                }
                _ => positionals.push(arg.clone()),
            }
            i += 1;
        }

        // Version wins over everything, then help, then argument errors
        if display_version {
            return ParsedArgs {
                action: CliAction::ShowVersion,
            };
        }
        if display_help {
            return ParsedArgs {
                action: CliAction::ShowHelp,
            };
        }
        if unknown_arg_found {
            return ParsedArgs {
                action: CliAction::ShowHelpDueToError,
            };
        }

        let Some((command, rest)) = positionals.split_first() else {
            return ParsedArgs {
                action: CliAction::ShowHelp,
            };
        };

        if stats_path.is_some() && !matches!(command.as_str(), "enrich") {
            log_warning!("--stats only applies to the enrich command");
            return ParsedArgs {
                action: CliAction::ShowHelpDueToError,
            };
        }

        let action = match command.as_str() {
            "state" | "s" | "elevation" | "e" => match take_timestamp(rest) {
                Some((timestamp, tail)) if tail.len() <= 1 => {
                    let theatre = tail.first().cloned();
                    if matches!(command.as_str(), "state" | "s") {
                        CliAction::State {
                            flags,
                            timestamp,
                            theatre,
                        }
                    } else {
                        CliAction::Elevation {
                            flags,
                            timestamp,
                            theatre,
                        }
                    }
                }
                Some(_) => {
                    log_warning!(
                        "Too many arguments. Quote the timestamp: sunstate {} \"YYYY-MM-DD HH:MM\" [theatre]",
                        command
                    );
                    CliAction::ShowHelpDueToError
                }
                None => {
                    log_warning!(
                        "Missing timestamp. Usage: sunstate {} \"YYYY-MM-DD HH:MM\" [theatre]",
                        command
                    );
                    CliAction::ShowHelpDueToError
                }
            },
            "theatres" | "t" => {
                if rest.is_empty() {
                    CliAction::Theatres { flags }
                } else {
                    log_warning!("The theatres command takes no arguments");
                    CliAction::ShowHelpDueToError
                }
            }
            "enrich" => match rest {
                [] => CliAction::Enrich {
                    flags,
                    servers_path: None,
                    stats_path,
                },
                [path] => CliAction::Enrich {
                    flags,
                    servers_path: Some(path.clone()),
                    stats_path,
                },
                _ => {
                    log_warning!("Usage: sunstate enrich [servers.json|-] [--stats stats.json]");
                    CliAction::ShowHelpDueToError
                }
            },
            "help" => match rest {
                [] => CliAction::ShowHelp,
                [topic] => CliAction::HelpCommand {
                    command: topic.clone(),
                },
                _ => CliAction::ShowHelpDueToError,
            },
            _ => {
                log_warning!("Unknown command: {}", command);
                CliAction::ShowHelpDueToError
            }
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Displays version information using the logger style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Displays the general help message.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("sunstate [OPTIONS] <COMMAND>");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Show intermediate values");
    log_indented!("-j, --json             Print results as JSON");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, -v, --version      Print version information");
    log_block_start!("Commands:");
    log_indented!("state, s <time> [theatre]      Sun state badge for a mission clock");
    log_indented!("elevation, e <time> [theatre]  Solar elevation breakdown");
    log_indented!("theatres, t                    List known theatres and latitudes");
    log_indented!("enrich [file|-] [--stats file] Add sun states to DCSServerBot payloads");
    log_indented!("help [command]                 Detailed help for a command");
    log_end!();
}
