//! Reference latitudes for DCS theatres.
//!
//! Each map gets one fixed latitude, which is plenty for a day/night badge.
//! Names coming from DCSServerBot are free text, so lookups go through
//! [`normalize_theatre`] first.

/// Latitude used for any theatre missing from the table.
pub const DEFAULT_LATITUDE: f64 = 45.0;

/// Normalized theatre key and its reference latitude (southern hemisphere negative).
const THEATRE_LATITUDES: [(&str, f64); 10] = [
    ("caucasus", 43.6),       // Sochi region
    ("persiangulf", 25.0),    // Dubai
    ("syria", 35.0),          // Eastern Mediterranean
    ("nevada", 36.0),         // NTTR
    ("normandy", 49.0),       // Northern France
    ("sinai", 30.0),          // Israel/Sinai
    ("marianaislands", 15.0), // Saipan
    ("southatlantic", -52.0), // Falklands
    ("kola", 69.0),           // Northern Russia
    ("afghanistan", 34.0),    // Central Afghanistan
];

/// Lower-case a theatre name and drop whitespace, underscores and hyphens.
///
/// `"Persian Gulf"`, `"persian_gulf"` and `"PERSIAN-GULF"` all become
/// `"persiangulf"`.
pub fn normalize_theatre(theatre: &str) -> String {
    theatre
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .collect()
}

/// Table latitude for an already-normalized key, if the theatre is known.
pub fn lookup_latitude(normalized: &str) -> Option<f64> {
    THEATRE_LATITUDES
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, lat)| *lat)
}

/// Reference latitude for a theatre, falling back to [`DEFAULT_LATITUDE`].
pub fn theatre_latitude(theatre: &str) -> f64 {
    lookup_latitude(&normalize_theatre(theatre)).unwrap_or(DEFAULT_LATITUDE)
}

/// Whether the theatre resolves to a table entry rather than the fallback.
pub fn is_known_theatre(theatre: &str) -> bool {
    lookup_latitude(&normalize_theatre(theatre)).is_some()
}

/// All known theatre keys with their latitudes, in table order.
pub fn known_theatres() -> &'static [(&'static str, f64)] {
    &THEATRE_LATITUDES
}
