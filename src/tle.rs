//! Two-line element (TLE) catalog.
//!
//! Builds propagatable satellite records from raw element pairs and
//! filters out everything the propagator cannot use. Malformed lines,
//! bad checksums and decayed elements are all dropped the same way:
//! silently at load time, so a load never fails, it only shrinks.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Deserialize;
use sgp4::{Constants, Elements, MinutesSinceEpoch};

/// One satellite's raw input: two 69-column element lines plus the
/// identity carried alongside (never used in propagation).
///
/// Deserializes from named fields or from the upstream API's
/// `[line1, line2, id, name]` rows.
#[derive(Clone, Debug, Deserialize)]
pub struct RawElementSet {
    pub line1: String,
    pub line2: String,
    pub id: String,
    pub name: String,
}

/// Splits a newline-delimited element blob into consecutive line pairs.
///
/// A single trailing newline is trimmed first; a dangling unpaired final
/// line is dropped. No format validation happens here, that is the
/// propagator's parser's job.
pub fn split_tle_pairs(blob: &str) -> Vec<(String, String)> {
    let trimmed = blob
        .strip_suffix("\r\n")
        .or_else(|| blob.strip_suffix('\n'))
        .unwrap_or(blob);
    let lines: Vec<&str> = trimmed
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();

    let mut pairs = Vec::with_capacity(lines.len() / 2);
    let mut chunks = lines.chunks_exact(2);
    for chunk in chunks.by_ref() {
        pairs.push((chunk[0].to_string(), chunk[1].to_string()));
    }
    if !chunks.remainder().is_empty() {
        warn!("dropping unpaired trailing element line");
    }
    pairs
}

pub fn datetime_to_minutes(at: DateTime<Utc>) -> f64 {
    at.timestamp() as f64 / 60.0
}

/// Propagatable record for one satellite. Immutable once constructed;
/// owned by the catalog.
#[derive(Clone)]
pub struct SatRecord {
    pub id: String,
    pub name: String,
    constants: Constants,
    epoch_minutes: f64,
}

impl SatRecord {
    fn from_raw(raw: &RawElementSet) -> Option<Self> {
        let elements = Elements::from_tle(
            Some(raw.name.clone()),
            raw.line1.as_bytes(),
            raw.line2.as_bytes(),
        )
        .ok()?;
        let constants = Constants::from_elements(&elements).ok()?;
        let epoch_minutes = datetime_to_minutes(elements.datetime.and_utc());
        Some(Self {
            id: raw.id.clone(),
            name: raw.name.clone(),
            constants,
            epoch_minutes,
        })
    }

    /// Minutes between the element-set epoch and `at`.
    pub fn minutes_since_epoch(&self, at: DateTime<Utc>) -> MinutesSinceEpoch {
        MinutesSinceEpoch(datetime_to_minutes(at) - self.epoch_minutes)
    }

    pub(crate) fn constants(&self) -> &Constants {
        &self.constants
    }
}

/// Ordered set of propagatable records, validated at a reference timestamp.
///
/// Output order preserves input order minus dropped entries, so index
/// correspondence with the input is not guaranteed; identity travels via
/// `id`/`name` on each record.
pub struct ElementCatalog {
    records: Vec<SatRecord>,
    reference: DateTime<Utc>,
}

impl ElementCatalog {
    /// Builds a catalog, dropping every entry whose lines fail to parse or
    /// whose propagation at `reference` yields no position. Loading is
    /// wholesale replacement: build a new catalog instead of merging.
    pub fn load(reference: DateTime<Utc>, raw_sets: &[RawElementSet]) -> Self {
        let mut records = Vec::with_capacity(raw_sets.len());
        for raw in raw_sets {
            let Some(record) = SatRecord::from_raw(raw) else {
                debug!("dropping element set {}: unparsable lines", raw.id);
                continue;
            };
            match record
                .constants
                .propagate(record.minutes_since_epoch(reference))
            {
                Ok(prediction) if prediction.position.iter().all(|c| c.is_finite()) => {
                    records.push(record);
                }
                _ => debug!(
                    "dropping element set {}: no position at reference timestamp",
                    raw.id
                ),
            }
        }
        info!(
            "element catalog: kept {} of {} sets",
            records.len(),
            raw_sets.len()
        );
        Self { records, reference }
    }

    pub fn records(&self) -> &[SatRecord] {
        &self.records
    }

    pub fn reference(&self) -> DateTime<Utc> {
        self.reference
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
