//! Simplified solar elevation.
//!
//! No refraction and no equation-of-time correction: clock noon is solar
//! noon. The formula is fixed so that the badge stays stable across
//! releases; do not swap in a more precise ephemeris here.

use super::timestamp::MissionTimestamp;

/// Solar declination in degrees for a 1-based day of the year.
pub fn solar_declination(day_of_year: u32) -> f64 {
    -23.45 * (360.0_f64 / 365.0 * (f64::from(day_of_year) + 10.0)).to_radians().cos()
}

/// Hour angle in degrees, 0 at clock noon and 15 degrees per hour.
pub fn hour_angle(decimal_hour: f64) -> f64 {
    (decimal_hour - 12.0) * 15.0
}

/// Elevation in degrees from latitude, declination and hour angle (all degrees).
pub fn elevation_from_angles(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat = latitude.to_radians();
    let decl = declination.to_radians();
    let ha = hour_angle.to_radians();

    let sin_elevation = lat.sin() * decl.sin() + lat.cos() * decl.cos() * ha.cos();

    // Rounding can push the sum just past +/-1 near the poles
    sin_elevation.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Sun elevation in degrees (-90..=90) for a mission timestamp at a latitude.
pub fn calculate_sun_elevation(ts: &MissionTimestamp, latitude: f64) -> f64 {
    elevation_from_angles(
        latitude,
        solar_declination(ts.day_of_year()),
        hour_angle(ts.decimal_hour()),
    )
}
