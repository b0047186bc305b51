//! Geographic coordinate type and degree-length constants.
//!
//! `Coordinate` uses `f64` latitude/longitude.  Gap analysis compares
//! distances against thresholds of a few hundred metres and reduces
//! candidates by pairwise separation, so the ~1 m precision of `f32` at the
//! equator would be visible in reproducibility checks.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Fixed-degree-length approximation: metres per degree of latitude.
///
/// Also the metres per degree of longitude at the equator; multiply by
/// `cos(lat)` elsewhere.
pub const METERS_PER_DEG_LAT: f64 = 111_320.0;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// A procedurally generated lattice point.  Carries no identity beyond its
/// coordinates.
pub type GridPoint = Coordinate;

impl Coordinate {
    /// Construct without validation.  Use for literals and values derived
    /// from already-valid coordinates.
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct and check the WGS-84 range invariant.
    pub fn try_new(lat: f64, lon: f64) -> CoreResult<Self> {
        let c = Self { lat, lon };
        if c.is_valid() {
            Ok(c)
        } else {
            Err(CoreError::InvalidCoordinate { lat, lon })
        }
    }

    /// `true` if latitude ∈ [-90, 90] and longitude ∈ [-180, 180].
    ///
    /// NaN fails both range checks.
    #[inline]
    pub fn is_valid(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Metres per degree of longitude at this coordinate's latitude.
    #[inline]
    pub fn meters_per_deg_lon(self) -> f64 {
        METERS_PER_DEG_LAT * self.lat.to_radians().cos()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
