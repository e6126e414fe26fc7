//! Nearest-satellite coverage query.
//!
//! Flat equirectangular projection: a degree of latitude is 111 km and a
//! degree of longitude shrinks with cos(lat). Valid only for modest
//! angular separations; curvature and date-line wraparound are ignored,
//! so a satellite at longitude 179 deg stays far from an observer at
//! -179 deg. Known limitation, kept as-is.

use crate::error::EngineError;
use crate::resolve::GeodeticPosition;

/// Kilometers per degree of latitude in the flat projection.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Default maximum reachable distance in km. A configured threshold, not
/// link-budget physics.
pub const MAX_REACHABLE_DIST_KM: f64 = 750.0;

/// Ground point in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundPoint {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl From<GeodeticPosition> for GroundPoint {
    fn from(p: GeodeticPosition) -> Self {
        Self {
            lon_deg: p.longitude.to_degrees(),
            lat_deg: p.latitude.to_degrees(),
        }
    }
}

/// Point projected onto the local planar approximation, in km.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub east_km: f64,
    pub north_km: f64,
}

pub fn project_flat(p: GroundPoint) -> ProjectedPoint {
    ProjectedPoint {
        north_km: p.lat_deg * KM_PER_DEGREE,
        east_km: p.lon_deg * (p.lat_deg.to_radians().cos() * KM_PER_DEGREE),
    }
}

/// Euclidean distance between two points on the projected plane.
pub fn planar_distance_km(a: GroundPoint, b: GroundPoint) -> f64 {
    let (pa, pb) = (project_flat(a), project_flat(b));
    let de = pa.east_km - pb.east_km;
    let dn = pa.north_km - pb.north_km;
    (de * de + dn * dn).sqrt()
}

#[derive(Clone, Copy, Debug)]
pub struct NearestSatellite {
    pub index: usize,
    pub distance_km: f64,
    pub observer_projected: ProjectedPoint,
    pub satellite_projected: ProjectedPoint,
}

/// Scans for the satellite at minimum planar distance from the observer.
/// The first satellite achieving the minimum wins, so results are stable
/// with respect to catalog order. An empty set is an error, never a
/// sentinel distance.
pub fn nearest_satellite(
    observer: GroundPoint,
    satellites: &[GroundPoint],
) -> Result<NearestSatellite, EngineError> {
    if satellites.is_empty() {
        return Err(EngineError::NoSatellitesAvailable);
    }
    let mut best = 0usize;
    let mut best_dist = f64::INFINITY;
    for (i, sat) in satellites.iter().enumerate() {
        let d = planar_distance_km(observer, *sat);
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    Ok(NearestSatellite {
        index: best,
        distance_km: best_dist,
        observer_projected: project_flat(observer),
        satellite_projected: project_flat(satellites[best]),
    })
}

pub fn has_coverage(distance_km: f64, max_reachable_km: f64) -> bool {
    distance_km <= max_reachable_km
}

/// Output surface handed to the presentation layer.
#[derive(Clone, Copy, Debug)]
pub struct CoverageReport {
    pub has_coverage: bool,
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub distance_km: f64,
}

/// Runs the nearest-satellite query over geodetic positions (all taken at
/// the same timestamp) and applies the reachability threshold.
pub fn coverage_report(
    observer: GroundPoint,
    satellites: &[GeodeticPosition],
    max_reachable_km: f64,
) -> Result<CoverageReport, EngineError> {
    let points: Vec<GroundPoint> = satellites.iter().copied().map(GroundPoint::from).collect();
    let nearest = nearest_satellite(observer, &points)?;
    let at = points[nearest.index];
    Ok(CoverageReport {
        has_coverage: has_coverage(nearest.distance_km, max_reachable_km),
        longitude_deg: at.lon_deg,
        latitude_deg: at.lat_deg,
        distance_km: nearest.distance_km,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lon_deg: f64, lat_deg: f64) -> GroundPoint {
        GroundPoint { lon_deg, lat_deg }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = point(-79.78, 36.04);
        let b = point(12.5, -43.2);
        assert_eq!(planar_distance_km(a, b), planar_distance_km(b, a));
    }

    #[test]
    fn colocated_satellite_has_zero_distance() {
        let observer = point(-79.78, 36.04);
        let nearest = nearest_satellite(observer, &[observer]).unwrap();
        assert_eq!(nearest.index, 0);
        assert!(nearest.distance_km.abs() < 1e-9);
        assert!(has_coverage(nearest.distance_km, 0.0));
        assert!(has_coverage(nearest.distance_km, MAX_REACHABLE_DIST_KM));
    }

    #[test]
    fn picks_minimum_planar_distance() {
        // the original script's satellite rows, (lat, lon) ordering
        let observer = point(0.0, 0.0);
        let sats = [point(-79.78, 36.04), point(-43.74, 92.57)];
        let nearest = nearest_satellite(observer, &sats).unwrap();

        let expected: Vec<f64> = sats
            .iter()
            .map(|s| {
                let n = s.lat_deg * 111.0;
                let e = s.lon_deg * ((s.lat_deg * std::f64::consts::PI / 180.0).cos() * 111.0);
                (n * n + e * e).sqrt()
            })
            .collect();
        assert!(expected[0] < expected[1]);
        assert_eq!(nearest.index, 0);
        assert!((nearest.distance_km - expected[0]).abs() < 1e-9);
        assert!(has_coverage(nearest.distance_km, f64::MAX));
    }

    #[test]
    fn empty_satellite_set_is_an_error() {
        let err = nearest_satellite(point(0.0, 0.0), &[]).unwrap_err();
        assert!(matches!(err, EngineError::NoSatellitesAvailable));
    }

    #[test]
    fn first_satellite_wins_ties() {
        let observer = point(10.0, 10.0);
        let sat = point(11.0, 11.0);
        let nearest = nearest_satellite(observer, &[sat, sat, sat]).unwrap();
        assert_eq!(nearest.index, 0);
    }

    #[test]
    fn date_line_is_not_special_cased() {
        let observer = point(180.0, 0.0);
        let sats = [point(179.0, 0.0), point(-179.0, 0.0)];
        let nearest = nearest_satellite(observer, &sats).unwrap();
        // planar metric: 1 deg -> 111 km, 359 deg -> 39849 km, no wraparound
        assert_eq!(nearest.index, 0);
        assert!((planar_distance_km(observer, sats[0]) - 111.0).abs() < 1e-9);
        assert!((planar_distance_km(observer, sats[1]) - 359.0 * 111.0).abs() < 1e-9);
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(has_coverage(750.0, MAX_REACHABLE_DIST_KM));
        assert!(!has_coverage(750.1, MAX_REACHABLE_DIST_KM));
    }

    #[test]
    fn report_carries_nearest_coordinates_in_degrees() {
        let satellites = [GeodeticPosition {
            longitude: (-79.78_f64).to_radians(),
            latitude: 36.04_f64.to_radians(),
            height_km: 550.0,
        }];
        let report =
            coverage_report(point(-79.78, 36.04), &satellites, MAX_REACHABLE_DIST_KM).unwrap();
        assert!(report.has_coverage);
        assert!((report.longitude_deg + 79.78).abs() < 1e-9);
        assert!((report.latitude_deg - 36.04).abs() < 1e-9);
        assert!(report.distance_km.abs() < 1e-9);
    }
}
