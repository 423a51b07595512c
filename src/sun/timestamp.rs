//! Mission clock parsing.
//!
//! DCSServerBot reports the in-game clock as a bare wall-clock string
//! (`YYYY-MM-DD HH:MM` or `YYYY-MM-DD HH:MM:SS`). Mission clocks have no
//! timezone, so the parsed value is kept naive.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

static MISSION_DATETIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2}) ([0-9]{2}):([0-9]{2})(?::([0-9]{2}))?$")
        .expect("mission datetime pattern is valid")
});

/// A validated mission wall-clock moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MissionTimestamp(NaiveDateTime);

impl MissionTimestamp {
    /// Build a timestamp from calendar fields, rejecting impossible values.
    ///
    /// Year 0 is refused along with anything chrono itself refuses
    /// (month 13, February 30th, hour 24, second 60...).
    pub fn from_fields(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        if year < 1 {
            return None;
        }
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let time = NaiveTime::from_hms_opt(hour, minute, second)?;
        Some(Self(date.and_time(time)))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Ordinal day in the year, 1-based (1..=366).
    pub fn day_of_year(&self) -> u32 {
        self.0.ordinal()
    }

    /// Hour plus minutes as a fraction. Seconds are deliberately dropped.
    pub fn decimal_hour(&self) -> f64 {
        f64::from(self.hour()) + f64::from(self.minute()) / 60.0
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for MissionTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

// Serialized in the same layout it is parsed from
impl Serialize for MissionTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a mission datetime string.
///
/// Leading and trailing whitespace is ignored. Returns `None` when the
/// string does not follow the expected layout or names a date that does
/// not exist; it never panics on arbitrary input.
pub fn parse_mission_datetime(raw: &str) -> Option<MissionTimestamp> {
    let caps = MISSION_DATETIME_RE.captures(raw.trim())?;

    let field = |idx: usize| -> Option<u32> { caps.get(idx)?.as_str().parse().ok() };

    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let second = match caps.get(6) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    MissionTimestamp::from_fields(year, field(2)?, field(3)?, field(4)?, field(5)?, second)
}
