//! Candidate lattice generation.
//!
//! # Spacing
//!
//! Rows are spaced by a fixed latitude step (`step_m / 111 320` degrees).
//! The longitude step depends on latitude, because a degree of longitude
//! shrinks by `cos(lat)` toward the poles, so it is recomputed for every
//! row:
//!
//! ```text
//! lon_step(row) = step_m / (111 320 · cos(row_lat))
//! ```
//!
//! A single longitude step for the whole grid would stretch or squeeze the
//! east–west spacing in proportion to how far a row is from the latitude the
//! step was taken at.
//!
//! # Determinism
//!
//! Every coordinate is computed from integer row/column counters rather than
//! by repeated addition, so there is no accumulated float drift and two
//! walks over the same generator produce identical sequences.

use std::iter::FusedIterator;

use gap_core::{Coordinate, GridPoint, Region, METERS_PER_DEG_LAT};

use crate::{SpatialError, SpatialResult};

/// Below this `cos(lat)` a row is treated as a single point (pole).
const MIN_COS_LAT: f64 = 1e-12;

// ── GridGenerator ─────────────────────────────────────────────────────────────

/// A restartable description of a lattice over a [`Region`].
#[derive(Clone, Debug)]
pub struct GridGenerator {
    region:       Region,
    step_m:       f64,
    lat_step_deg: f64,
}

impl GridGenerator {
    /// Validate `step_m` and construct a generator.
    pub fn new(region: Region, step_m: f64) -> SpatialResult<Self> {
        if !(step_m.is_finite() && step_m > 0.0) {
            return Err(SpatialError::InvalidStep(step_m));
        }
        Ok(Self {
            region,
            step_m,
            lat_step_deg: step_m / METERS_PER_DEG_LAT,
        })
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn step_m(&self) -> f64 {
        self.step_m
    }

    /// Longitude step in degrees for a row at `lat`.
    ///
    /// `None` at (or numerically at) a pole, where a row collapses to one
    /// point.
    pub fn lon_step_deg_at(&self, lat: f64) -> Option<f64> {
        let cos = lat.to_radians().cos();
        if cos < MIN_COS_LAT {
            return None;
        }
        let step = self.step_m / (METERS_PER_DEG_LAT * cos);
        step.is_finite().then_some(step)
    }

    /// Number of rows the iterator will yield.
    pub fn row_count(&self) -> usize {
        ((self.region.max_lat - self.region.min_lat) / self.lat_step_deg).floor() as usize + 1
    }

    /// Upper bound on the number of points, computed row by row.
    ///
    /// Use to pre-size buffers; the exact count may be lower by one per row
    /// where float rounding lands a column just past the edge.
    pub fn estimated_len(&self) -> usize {
        let lon_span = self.region.max_lon - self.region.min_lon;
        (0..self.row_count())
            .map(|row| {
                let lat = self.row_lat(row as u64);
                match self.lon_step_deg_at(lat) {
                    Some(step) => (lon_span / step).floor() as usize + 1,
                    None       => 1,
                }
            })
            .sum()
    }

    /// A fresh lazy walk over the lattice, row-major from the south-west
    /// corner.
    pub fn points(&self) -> GridPoints {
        let mut it = GridPoints {
            grid:     self.clone(),
            row:      0,
            col:      0,
            row_lat:  self.region.min_lat,
            lon_step: None,
            done:     false,
        };
        it.enter_row(0);
        it
    }

    #[inline]
    fn row_lat(&self, row: u64) -> f64 {
        self.region.min_lat + row as f64 * self.lat_step_deg
    }
}

// ── GridPoints ────────────────────────────────────────────────────────────────

/// Lazy iterator over the points of a [`GridGenerator`].
///
/// Finite: it ends after the first row whose latitude exceeds the region's
/// `max_lat`.  Every yielded point lies inside the region.
#[derive(Clone, Debug)]
pub struct GridPoints {
    grid:     GridGenerator,
    row:      u64,
    col:      u64,
    row_lat:  f64,
    lon_step: Option<f64>,
    done:     bool,
}

impl GridPoints {
    fn enter_row(&mut self, row: u64) {
        self.row = row;
        self.col = 0;
        self.row_lat = self.grid.row_lat(row);
        if self.row_lat > self.grid.region.max_lat {
            self.done = true;
            return;
        }
        self.lon_step = self.grid.lon_step_deg_at(self.row_lat);
    }
}

impl Iterator for GridPoints {
    type Item = GridPoint;

    fn next(&mut self) -> Option<GridPoint> {
        while !self.done {
            let lon = match (self.col, self.lon_step) {
                (0, _)        => Some(self.grid.region.min_lon),
                (_, None)     => None,
                (c, Some(st)) => Some(self.grid.region.min_lon + c as f64 * st),
            };
            match lon {
                Some(lon) if lon <= self.grid.region.max_lon => {
                    self.col += 1;
                    return Some(Coordinate::new(self.row_lat, lon));
                }
                _ => self.enter_row(self.row + 1),
            }
        }
        None
    }
}

impl FusedIterator for GridPoints {}
