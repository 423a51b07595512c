//! Mission time-of-day calculation.
//!
//! Maps a mission's in-game clock and theatre to a day/night/dawn/dusk badge
//! for the live server status page.
//!
//! ## Module Structure
//!
//! - [`timestamp`]: Parsing of the `YYYY-MM-DD HH:MM[:SS]` mission clock
//! - [`theatre`]: Theatre name normalization and reference latitudes
//! - [`elevation`]: Simplified solar elevation (declination + hour angle)
//! - [`state`]: Elevation thresholds, the state enum and its display bundle
//!
//! ## Behavior
//!
//! [`get_sun_state`] is total: a missing or malformed clock yields the day
//! badge, and an unknown theatre uses [`theatre::DEFAULT_LATITUDE`]. The
//! lower-level [`parse_mission_datetime`] keeps its own `Option` contract so
//! callers that need to know about bad input (the `elevation` command) can.
//!
//! Everything here is pure and synchronous; it is safe to call inline from
//! async handlers or from several threads at once.

pub mod elevation;
pub mod state;
pub mod theatre;
pub mod timestamp;

pub use elevation::calculate_sun_elevation;
pub use state::{
    DEFAULT_SUN_STATE, ELEVATION_DAY, ELEVATION_TWILIGHT, SunState, SunStateResult, classify,
};
pub use theatre::{DEFAULT_LATITUDE, known_theatres, normalize_theatre, theatre_latitude};
pub use timestamp::{MissionTimestamp, parse_mission_datetime};

use serde::Serialize;


/// Intermediate values behind a sun state, for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunReport {
    pub timestamp: MissionTimestamp,
    /// Theatre key after normalization.
    pub theatre_key: String,
    pub latitude: f64,
    /// True when the theatre was not in the table and the default latitude applied.
    pub latitude_fallback: bool,
    pub day_of_year: u32,
    pub declination: f64,
    pub hour_angle: f64,
    pub elevation: f64,
    pub result: SunStateResult,
}

/// Run the full pipeline and keep every intermediate value.
///
/// Returns `None` exactly when [`get_sun_state`] would fall back to the
/// default badge.
pub fn evaluate(date_time: Option<&str>, theatre: &str) -> Option<SunReport> {
    let timestamp = parse_mission_datetime(date_time.filter(|s| !s.is_empty())?)?;

    let theatre_key = normalize_theatre(theatre);
    let (latitude, latitude_fallback) = match theatre::lookup_latitude(&theatre_key) {
        Some(lat) => (lat, false),
        None => (DEFAULT_LATITUDE, true),
    };

    let day_of_year = timestamp.day_of_year();
    let declination = elevation::solar_declination(day_of_year);
    let hour_angle = elevation::hour_angle(timestamp.decimal_hour());
    let elevation = elevation::elevation_from_angles(latitude, declination, hour_angle);

    Some(SunReport {
        timestamp,
        theatre_key,
        latitude,
        latitude_fallback,
        day_of_year,
        declination,
        hour_angle,
        elevation,
        result: classify(elevation, timestamp.hour()),
    })
}

/// Sun state badge for a mission clock on a theatre.
///
/// Never fails: `None`, empty or unparsable clocks give [`DEFAULT_SUN_STATE`].
pub fn get_sun_state(date_time: Option<&str>, theatre: &str) -> SunStateResult {
    evaluate(date_time, theatre)
        .map(|report| report.result)
        .unwrap_or(DEFAULT_SUN_STATE)
}
