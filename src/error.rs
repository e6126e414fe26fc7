//! Error types for the propagation and coverage engine.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// Propagation produced no usable position for one record at one
    /// timestamp. Scoped to that single call; never fatal to a batch.
    #[error("propagation failed for {id} at {at}: {reason}")]
    PropagationFailure {
        id: String,
        at: DateTime<Utc>,
        reason: String,
    },

    /// The coverage query was handed an empty satellite set. Reported
    /// explicitly so an empty catalog can never read as "covered".
    #[error("no satellites available for coverage query")]
    NoSatellitesAvailable,
}
