//! Greenwich Mean Sidereal Time.
//!
//! The rotational angle of Earth at a given timestamp, needed to turn
//! inertial propagation output into Earth-fixed longitudes.

use chrono::{DateTime, Utc};

pub const SECONDS_PER_DAY: f64 = 86400.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;
const GMST_BASE_DEG: f64 = 280.46061837;
const GMST_ROTATION_PER_DAY: f64 = 360.98564736629;
const GMST_CORRECTION: f64 = 0.000387933;

/// GMST in radians, normalized to `[0, 2*pi)`.
pub fn greenwich_mean_sidereal_time(at: DateTime<Utc>) -> f64 {
    let j2000 = DateTime::parse_from_rfc3339("2000-01-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc);
    let days_since_j2000 = (at - j2000).num_milliseconds() as f64 / (1000.0 * SECONDS_PER_DAY);
    let centuries = days_since_j2000 / DAYS_PER_JULIAN_CENTURY;
    let gmst_degrees = GMST_BASE_DEG
        + GMST_ROTATION_PER_DAY * days_since_j2000
        + GMST_CORRECTION * centuries * centuries
        - centuries * centuries * centuries / 38710000.0;
    gmst_degrees.rem_euclid(360.0).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::f64::consts::PI;

    #[test]
    fn gmst_at_j2000_matches_base_term() {
        let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let gmst = greenwich_mean_sidereal_time(j2000);
        assert!((gmst - GMST_BASE_DEG.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn gmst_stays_in_range() {
        let start = Utc.with_ymd_and_hms(2021, 12, 7, 0, 0, 0).unwrap();
        for hours in 0..48 {
            let gmst = greenwich_mean_sidereal_time(start + chrono::Duration::hours(hours));
            assert!((0.0..2.0 * PI).contains(&gmst), "gmst {} out of range", gmst);
        }
    }

    #[test]
    fn gmst_advances_slightly_faster_than_solar_day() {
        let start = Utc.with_ymd_and_hms(2021, 12, 7, 0, 0, 0).unwrap();
        let a = greenwich_mean_sidereal_time(start);
        let b = greenwich_mean_sidereal_time(start + chrono::Duration::days(1));
        // ~0.9856 deg of extra rotation per solar day
        let delta = (b - a).rem_euclid(2.0 * PI);
        assert!((delta.to_degrees() - 0.9856).abs() < 0.01);
    }
}
