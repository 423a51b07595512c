//! Day/night/dawn/dusk classification and its display bundle.

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Above this elevation (degrees) it is day. Matches the civil twilight limit.
pub const ELEVATION_DAY: f64 = -6.0;

/// Above this elevation (degrees) and up to [`ELEVATION_DAY`] it is dawn or dusk.
pub const ELEVATION_TWILIGHT: f64 = -18.0;

/// Lighting condition shown next to a running mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SunState {
    Day,
    Night,
    Dawn,
    Dusk,
}

impl SunState {
    pub const ALL: [SunState; 4] = [Self::Day, Self::Night, Self::Dawn, Self::Dusk];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
            Self::Dawn => "dawn",
            Self::Dusk => "dusk",
        }
    }

    /// Font Awesome class for the badge.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Day => "fa-solid fa-sun",
            Self::Night => "fa-solid fa-moon",
            Self::Dawn | Self::Dusk => "fa-solid fa-cloud-sun",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Day => "#ffc107",
            Self::Night => "#6c757d",
            Self::Dawn | Self::Dusk => "#fd7e14",
        }
    }

    /// Tooltip text, in French like the rest of the site.
    pub fn tooltip(&self) -> &'static str {
        match self {
            Self::Day => "Jour",
            Self::Night => "Nuit",
            Self::Dawn => "Aube",
            Self::Dusk => "Crépuscule",
        }
    }

    /// Full display bundle for this state.
    pub const fn result(self) -> SunStateResult {
        match self {
            Self::Day => DAY,
            Self::Night => NIGHT,
            Self::Dawn => DAWN,
            Self::Dusk => DUSK,
        }
    }
}

impl fmt::Display for SunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SunState {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "night" => Ok(Self::Night),
            "dawn" => Ok(Self::Dawn),
            "dusk" => Ok(Self::Dusk),
            other => bail!("unknown sun state '{other}' (expected day, night, dawn or dusk)"),
        }
    }
}

/// Sun state plus the badge fields the frontend renders.
///
/// Serializes flat as `{"state", "icon", "color", "tooltip"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SunStateResult {
    pub state: SunState,
    pub icon: &'static str,
    pub color: &'static str,
    pub tooltip: &'static str,
}

const DAY: SunStateResult = SunStateResult {
    state: SunState::Day,
    icon: "fa-solid fa-sun",
    color: "#ffc107",
    tooltip: "Jour",
};

const NIGHT: SunStateResult = SunStateResult {
    state: SunState::Night,
    icon: "fa-solid fa-moon",
    color: "#6c757d",
    tooltip: "Nuit",
};

const DAWN: SunStateResult = SunStateResult {
    state: SunState::Dawn,
    icon: "fa-solid fa-cloud-sun",
    color: "#fd7e14",
    tooltip: "Aube",
};

const DUSK: SunStateResult = SunStateResult {
    state: SunState::Dusk,
    icon: "fa-solid fa-cloud-sun",
    color: "#fd7e14",
    tooltip: "Crépuscule",
};

/// Badge used whenever the mission clock is missing or unreadable.
pub const DEFAULT_SUN_STATE: SunStateResult = DAY;

/// Classify a solar elevation into a display state.
///
/// Twilight is split into dawn and dusk on the clock hour alone: before
/// 12:00 is dawn, 12:00 and later is dusk. This does not look at which
/// way the sun is moving.
pub fn classify(elevation: f64, hour: u32) -> SunStateResult {
    let state = if elevation > ELEVATION_DAY {
        SunState::Day
    } else if elevation > ELEVATION_TWILIGHT {
        if hour < 12 {
            SunState::Dawn
        } else {
            SunState::Dusk
        }
    } else {
        SunState::Night
    };

    state.result()
}
