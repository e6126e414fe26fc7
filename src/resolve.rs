//! Position resolution: element record plus timestamp into geodetic and
//! render-space coordinates.
//!
//! Two deliberately separate code paths. The geodetic path rotates the
//! inertial position by sidereal time and feeds the coverage query; the
//! Cartesian path scales raw inertial angles straight into render units.
//! They agree on latitude and radial magnitude but not longitude, and
//! carry independently acceptable approximations. Do not unify them.

use std::f64::consts::PI;

use chrono::{DateTime, Utc};
use nalgebra::Vector3;

use crate::error::EngineError;
use crate::time::greenwich_mean_sidereal_time;
use crate::tle::SatRecord;

/// Spherical Earth approximation, mean radius. The oblate figure is an
/// intentional non-feature here.
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

/// Radius of the rendered planet sphere, in scene units.
pub const DEFAULT_RENDER_RADIUS: f64 = 228.0;

/// Longitude and latitude in radians, height in km above a spherical Earth.
/// Recomputed per query, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticPosition {
    pub longitude: f64,
    pub latitude: f64,
    pub height_km: f64,
}

fn propagate(record: &SatRecord, at: DateTime<Utc>) -> Result<[f64; 3], EngineError> {
    let prediction = record
        .constants()
        .propagate(record.minutes_since_epoch(at))
        .map_err(|e| EngineError::PropagationFailure {
            id: record.id.clone(),
            at,
            reason: e.to_string(),
        })?;
    if prediction.position.iter().any(|c| !c.is_finite()) {
        return Err(EngineError::PropagationFailure {
            id: record.id.clone(),
            at,
            reason: "non-finite position".to_string(),
        });
    }
    Ok(prediction.position)
}

/// Earth-fixed longitude, spherical latitude and height for `at`.
///
/// Longitude comes out in `(-pi, pi]`, latitude in `[-pi/2, pi/2]`.
pub fn resolve_geodetic(
    record: &SatRecord,
    at: DateTime<Utc>,
) -> Result<GeodeticPosition, EngineError> {
    let [x, y, z] = propagate(record, at)?;
    let gmst = greenwich_mean_sidereal_time(at);
    let r = (x * x + y * y + z * z).sqrt();
    Ok(GeodeticPosition {
        longitude: normalize_longitude(y.atan2(x) - gmst),
        latitude: (z / r).clamp(-1.0, 1.0).asin(),
        height_km: r - EARTH_MEAN_RADIUS_KM,
    })
}

/// Render-space vector for `at`: raw inertial longitude (no sidereal
/// rotation), spherical latitude, radius scaled by
/// `(height + 6371) / 6371 * render_radius`.
pub fn resolve_cartesian(
    record: &SatRecord,
    at: DateTime<Utc>,
    render_radius: f64,
) -> Result<Vector3<f64>, EngineError> {
    let [x, y, z] = propagate(record, at)?;
    let inertial_r = (x * x + y * y + z * z).sqrt();
    let lambda = y.atan2(x);
    let phi = (z / inertial_r).clamp(-1.0, 1.0).asin();
    let height_km = inertial_r - EARTH_MEAN_RADIUS_KM;
    let r = (height_km + EARTH_MEAN_RADIUS_KM) / EARTH_MEAN_RADIUS_KM * render_radius;
    Ok(Vector3::new(
        r * phi.cos() * lambda.cos(),
        r * phi.cos() * lambda.sin(),
        r * phi.sin(),
    ))
}

/// Wraps an angle into `(-pi, pi]`.
pub fn normalize_longitude(lon: f64) -> f64 {
    let wrapped = lon.rem_euclid(2.0 * PI);
    if wrapped > PI {
        wrapped - 2.0 * PI
    } else {
        wrapped
    }
}
