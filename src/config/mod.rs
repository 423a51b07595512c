//! Configuration for the `sunstate` command-line tool.
//!
//! The calculator itself takes no configuration; this only covers CLI
//! conveniences. Settings live in `sunstate.toml`:
//!
//! ```toml
//! default_theatre = "Caucasus"   # theatre used when a command omits it
//! output = "text"                # "text" or "json"
//! ```
//!
//! ## Location
//!
//! 1. The directory given with `--config <dir>`
//! 2. `$XDG_CONFIG_HOME/sunstate/` (platform config dir elsewhere)
//!
//! A missing file is not an error: every field has a default and nothing is
//! written to disk.

pub mod loading;
pub mod validation;


use serde::Deserialize;

pub use loading::{
    CONFIG_FILE_NAME, get_config_path, get_custom_config_dir, load, load_from_path,
    set_config_dir,
};
pub use validation::{config_warnings, report_warnings, validate_config};

/// Output style for command results.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawing text for terminals.
    #[default]
    Text,
    /// A single JSON document on stdout.
    Json,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Theatre used by `state` and `elevation` when none is given.
    pub default_theatre: Option<String>,

    /// Output style when `--json` is not passed.
    #[serde(default)]
    pub output: OutputFormat,
}

impl Config {
    /// Theatre to use for a command: the explicit one, else the configured
    /// default, else an empty name (which resolves to the fallback latitude).
    pub fn resolve_theatre(&self, explicit: Option<&str>) -> String {
        explicit
            .map(str::to_string)
            .or_else(|| self.default_theatre.clone())
            .unwrap_or_default()
    }

    /// Whether output should be JSON, given the `--json` flag.
    pub fn wants_json(&self, json_flag: bool) -> bool {
        json_flag || self.output == OutputFormat::Json
    }
}
