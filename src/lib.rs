//! # Mission Sunstate Library
//!
//! Day/night badge calculation for DCS mission status pages.
//!
//! The website shows a small sun/moon icon next to every running mission. This
//! crate computes it from the mission's in-game clock and theatre, and backs the
//! `sunstate` binary used to inspect and batch-process DCSServerBot payloads.
//!
//! ## Architecture
//!
//! - **Core**: `sun` module, a pure calculation pipeline
//!   (parse clock → theatre latitude → solar elevation → day/night/dawn/dusk)
//! - **Enrichment**: `mission` module with DCSServerBot payload models and the
//!   step that attaches a sun state to every mission
//! - **CLI**: `args` parsing, `commands` handlers and `config` for the binary
//! - **Infrastructure**: `logger` with the box-drawing output macros

// Macros must be defined before the modules that use them
#[macro_use]
pub mod logger;

pub mod args;
pub mod commands;
pub mod config;
pub mod mission;
pub mod sun;

pub use mission::{DcsBotPage, enrich_servers};
pub use sun::{SunState, SunStateResult, get_sun_state, parse_mission_datetime};
