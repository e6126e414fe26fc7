//! Orbital propagation and ground-coverage engine for a satellite
//! constellation viewer.
//!
//! Drives a fixed two-line element snapshot through simulated time,
//! resolves per-satellite geodetic and render-space positions, and
//! answers the point query "is any satellite currently close enough to
//! provide coverage?". Scene construction, rendering, and input wiring
//! live outside this crate; SGP4 physics is delegated to the `sgp4`
//! crate.

pub mod clock;
pub mod coverage;
pub mod error;
pub mod resolve;
pub mod state;
pub mod time;
pub mod tle;

pub use clock::SimulatedClock;
pub use coverage::{
    coverage_report, has_coverage, nearest_satellite, CoverageReport, GroundPoint,
    NearestSatellite, ProjectedPoint, MAX_REACHABLE_DIST_KM,
};
pub use error::EngineError;
pub use resolve::{
    resolve_cartesian, resolve_geodetic, GeodeticPosition, DEFAULT_RENDER_RADIUS,
    EARTH_MEAN_RADIUS_KM,
};
pub use state::SimulationState;
pub use tle::{split_tle_pairs, ElementCatalog, RawElementSet, SatRecord};
