//! Axis-aligned analysis region.
//!
//! A `Region` only bounds grid generation.  Exact polygon clipping of a
//! district boundary is deliberately not modelled; points in the corners of
//! the box that fall outside the real district are analysed like any other.

use crate::{Coordinate, CoreError, CoreResult};

/// A latitude/longitude bounding box, inclusive on all four edges.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Region {
    /// Validate and construct a region.
    ///
    /// Both corners must be valid coordinates and `min ≤ max` on each axis.
    /// Regions crossing the antimeridian are rejected.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> CoreResult<Self> {
        Coordinate::try_new(min_lat, min_lon)?;
        Coordinate::try_new(max_lat, max_lon)?;
        if min_lat > max_lat {
            return Err(CoreError::InvalidRegion(format!(
                "min_lat {min_lat} is greater than max_lat {max_lat}"
            )));
        }
        if min_lon > max_lon {
            return Err(CoreError::InvalidRegion(format!(
                "min_lon {min_lon} is greater than max_lon {max_lon}"
            )));
        }
        Ok(Self { min_lat, max_lat, min_lon, max_lon })
    }

    #[inline]
    pub fn contains(&self, p: Coordinate) -> bool {
        p.lat >= self.min_lat
            && p.lat <= self.max_lat
            && p.lon >= self.min_lon
            && p.lon <= self.max_lon
    }

    /// Geometric centre of the box.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_lat + self.max_lat) * 0.5,
            (self.min_lon + self.max_lon) * 0.5,
        )
    }

}
