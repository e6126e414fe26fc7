//! Per-tick simulation state.
//!
//! Owned by the external render loop and passed into each tick. Replaces
//! shared module-level satellite arrays with one explicit object exposing
//! the current positions and a refresh for a new simulated timestamp.

use chrono::{DateTime, Utc};
use log::debug;
use nalgebra::Vector3;

use crate::resolve::{resolve_cartesian, resolve_geodetic, GeodeticPosition};
use crate::tle::ElementCatalog;

pub struct SimulationState {
    catalog: ElementCatalog,
    render_radius: f64,
    positions: Vec<Option<Vector3<f64>>>,
}

impl SimulationState {
    pub fn new(catalog: ElementCatalog, render_radius: f64) -> Self {
        let positions = vec![None; catalog.len()];
        Self {
            catalog,
            render_radius,
            positions,
        }
    }

    pub fn catalog(&self) -> &ElementCatalog {
        &self.catalog
    }

    /// Swaps in a freshly loaded catalog, clearing stale positions.
    pub fn replace_catalog(&mut self, catalog: ElementCatalog) {
        self.positions = vec![None; catalog.len()];
        self.catalog = catalog;
    }

    /// Recomputes every render vector for the simulated timestamp. A
    /// record failing propagation clears its slot for this frame; the
    /// rest proceed.
    pub fn refresh(&mut self, at: DateTime<Utc>) {
        for (record, slot) in self
            .catalog
            .records()
            .iter()
            .zip(self.positions.iter_mut())
        {
            *slot = match resolve_cartesian(record, at, self.render_radius) {
                Ok(v) => Some(v),
                Err(e) => {
                    debug!("skipping {} this frame: {}", record.id, e);
                    None
                }
            };
        }
    }

    /// Render vectors index-aligned with `catalog().records()`.
    pub fn positions(&self) -> &[Option<Vector3<f64>>] {
        &self.positions
    }

    /// Geodetic positions for a coverage query, all at the same timestamp.
    /// Records failing propagation are skipped.
    pub fn geodetic_snapshot(&self, at: DateTime<Utc>) -> Vec<GeodeticPosition> {
        self.catalog
            .records()
            .iter()
            .filter_map(|record| match resolve_geodetic(record, at) {
                Ok(p) => Some(p),
                Err(e) => {
                    debug!("excluding {} from coverage snapshot: {}", record.id, e);
                    None
                }
            })
            .collect()
    }
}
