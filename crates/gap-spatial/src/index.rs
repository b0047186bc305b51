//! Nearest-facility spatial index.
//!
//! # Index space
//!
//! Facilities are stored in an R-tree (via `rstar`) as 3-D points on the
//! unit sphere (earth-centred, earth-fixed):
//!
//! ```text
//! x = cos(lat) · cos(lon)
//! y = cos(lat) · sin(lon)
//! z = sin(lat)
//! ```
//!
//! Euclidean chord length between two such points is a strictly increasing
//! function of their great-circle angle, so the R-tree's nearest-neighbour
//! order is exactly great-circle order on the sphere at any latitude and
//! across the antimeridian.  [`Nearest::index_distance_m`] converts the
//! chord back to a great-circle distance in metres on the mean-radius
//! sphere; see [`crate::distance::nearest_ground`] for how that bound is
//! used against other distance models.
//!
//! An index is built once per analysis run and never mutated, so it is
//! shared by reference across classification workers without locking.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use gap_core::{Coordinate, CoreError, FacilityId};

use crate::{Haversine, SpatialError, SpatialResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a unit-sphere `[x, y, z]` point with the
/// associated `FacilityId`.
struct FacilityEntry {
    point: [f64; 3],
    id:    FacilityId,
}

impl RTreeObject for FacilityEntry {
    type Envelope = AABB<[f64; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for FacilityEntry {
    /// Squared chord length on the unit sphere.
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

#[inline]
fn to_unit_vector(p: Coordinate) -> [f64; 3] {
    let (sin_lat, cos_lat) = p.lat.to_radians().sin_cos();
    let (sin_lon, cos_lon) = p.lon.to_radians().sin_cos();
    [cos_lat * cos_lon, cos_lat * sin_lon, sin_lat]
}

/// Great-circle metres on the mean-radius sphere for a unit-sphere chord.
#[inline]
fn chord_to_arc_m(chord: f64) -> f64 {
    2.0 * (chord * 0.5).min(1.0).asin() * Haversine::EARTH_RADIUS_M
}

// ── Nearest ───────────────────────────────────────────────────────────────────

/// A facility returned by an index query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Nearest {
    pub id:       FacilityId,
    pub position: Coordinate,
    /// Spherical great-circle distance.  Equal to [`Haversine`] up to
    /// rounding; other models may differ from it slightly.
    pub index_distance_m: f64,
}

// ── SpatialIndex ──────────────────────────────────────────────────────────────

/// Read-only nearest-neighbour index over a non-empty facility set.
pub struct SpatialIndex {
    positions: Vec<Coordinate>,
    tree:      RTree<FacilityEntry>,
}

impl SpatialIndex {
    /// Bulk-load an index over `facilities`.
    ///
    /// `FacilityId(i)` refers to `facilities[i]`.  Returns
    /// [`SpatialError::EmptyFacilitySet`] for an empty slice; callers decide
    /// what an empty region means before getting here.  A facility outside
    /// the WGS-84 range (including NaN) is rejected with
    /// [`CoreError::InvalidCoordinate`].
    ///
    /// Time complexity: O(N log N).
    pub fn build(facilities: &[Coordinate]) -> SpatialResult<Self> {
        if facilities.is_empty() {
            return Err(SpatialError::EmptyFacilitySet);
        }
        if let Some(bad) = facilities.iter().find(|p| !p.is_valid()) {
            return Err(CoreError::InvalidCoordinate { lat: bad.lat, lon: bad.lon }.into());
        }

        let entries: Vec<FacilityEntry> = facilities
            .iter()
            .enumerate()
            .map(|(i, &pos)| FacilityEntry {
                point: to_unit_vector(pos),
                id:    FacilityId(i as u32),
            })
            .collect();
        let tree = RTree::bulk_load(entries);

        log::debug!("built spatial index over {} facilities", facilities.len());

        Ok(Self { positions: facilities.to_vec(), tree })
    }

    /// Number of indexed facilities; at least one.
    pub fn facility_count(&self) -> usize {
        self.positions.len()
    }

    /// Position of the facility with the given id.
    #[inline]
    pub fn position(&self, id: FacilityId) -> Coordinate {
        self.positions[id.index()]
    }

    /// The facility closest to `point` on the sphere.
    ///
    /// `None` only for an empty tree, which [`build`](Self::build) never
    /// produces.
    pub fn query_nearest(&self, point: Coordinate) -> Option<Nearest> {
        let q = to_unit_vector(point);
        self.tree.nearest_neighbor(&q).map(|e| self.to_nearest(e, &q))
    }

    /// All facilities in ascending great-circle distance from `point`.
    ///
    /// Lazy: stop consuming as soon as the caller has what it needs.
    pub fn nearest_iter(&self, point: Coordinate) -> impl Iterator<Item = Nearest> + '_ {
        let q = to_unit_vector(point);
        self.tree
            .nearest_neighbor_iter(&q)
            .map(move |e| self.to_nearest(e, &q))
    }

    #[inline]
    fn to_nearest(&self, entry: &FacilityEntry, q: &[f64; 3]) -> Nearest {
        Nearest {
            id:               entry.id,
            position:         self.positions[entry.id.index()],
            index_distance_m: chord_to_arc_m(entry.distance_2(q).sqrt()),
        }
    }
}
