//! Simulated clock mapping elapsed real time to a simulated timestamp.
//!
//! Decouples wall-clock animation ticks from the historical validity
//! window of a fixed element set, so a snapshot of orbital data can be
//! played back at accelerated rates.

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Simulated milliseconds advanced per elapsed real millisecond.
pub const DEFAULT_RATE: f64 = 1000.0;

/// Validity date of the bundled element snapshot.
pub fn default_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 12, 7, 0, 0, 0).unwrap()
}

/// Immutable clock configuration. Reconfiguration is replacement: the
/// `with_*` methods return a new value, there is no hidden shared state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulatedClock {
    pub epoch: DateTime<Utc>,
    pub rate: f64,
}

impl SimulatedClock {
    pub fn new(epoch: DateTime<Utc>, rate: f64) -> Self {
        Self { epoch, rate }
    }

    pub fn with_epoch(self, epoch: DateTime<Utc>) -> Self {
        Self { epoch, ..self }
    }

    pub fn with_rate(self, rate: f64) -> Self {
        Self { rate, ..self }
    }

    /// Simulated timestamp after `elapsed_real_ms` of wall time:
    /// `epoch + elapsed_real_ms * rate`, truncated to whole milliseconds.
    ///
    /// Pure in its inputs. A zero rate freezes the clock and a negative
    /// rate runs it backwards; callers guard if that is unintended.
    pub fn now(&self, elapsed_real_ms: f64) -> DateTime<Utc> {
        self.epoch + Duration::milliseconds((elapsed_real_ms * self.rate) as i64)
    }
}

impl Default for SimulatedClock {
    fn default() -> Self {
        Self {
            epoch: default_epoch(),
            rate: DEFAULT_RATE,
        }
    }
}
