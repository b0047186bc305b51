//! Coverage reduction: collapse near-duplicate gap candidates into a small
//! set of representative gap zones.
//!
//! # Algorithm
//!
//! ```text
//! sort candidates by distance_m descending, then latitude, then longitude
//! worklist = sorted candidates
//! while worklist is not empty:
//!     head = worklist.pop_front()          // worst-served remaining point
//!     accept head as a GapZone
//!     drop every remaining c with ground_distance(head, c) ≤ min_separation
//! ```
//!
//! This is a greedy maximal-coverage reduction, not an optimal set cover.
//! It is deterministic (total order on candidates), O(n²) in the worst case,
//! and explainable: largest gap first, then clear everything it would
//! effectively cover.
//!
//! Two properties hold for the output:
//!
//! - every pair of zones is more than `min_separation_m` apart;
//! - every dropped candidate has an accepted zone within `min_separation_m`.
//!
//! # Policies
//!
//! [`ReductionPolicy::IterativeCovering`] is the worklist above.
//! [`ReductionPolicy::StaticFilter`] makes one pass over the sorted list and
//! keeps a candidate unless an accepted zone lies within the separation.  It
//! checks each candidate against accepted zones only, never rewriting the
//! list.  With the same total order and the same `≤` predicate it selects
//! the same zones; it is kept for callers that want the cheaper loop shape.
//!
//! Reduction is inherently sequential: each acceptance changes which
//! candidates remain.

use std::cmp::Ordering;
use std::collections::VecDeque;

use gap_core::{Coordinate, ReductionPolicy};
use gap_spatial::DistanceModel;

use crate::GapCandidate;

// ── GapZone ───────────────────────────────────────────────────────────────────

/// A recommended location for a new facility.
///
/// `distance_to_nearest_m` and `estimated_time_min` are `None` only for a
/// whole-region gap, where there is no facility to measure from.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GapZone {
    pub latitude:              f64,
    pub longitude:             f64,
    pub distance_to_nearest_m: Option<f64>,
    pub estimated_time_min:    Option<f64>,
}

impl GapZone {
    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// A zone covering a region with no facilities at all.
    pub fn unserved(position: Coordinate) -> Self {
        Self {
            latitude:              position.lat,
            longitude:             position.lon,
            distance_to_nearest_m: None,
            estimated_time_min:    None,
        }
    }
}

impl From<GapCandidate> for GapZone {
    fn from(c: GapCandidate) -> Self {
        Self {
            latitude:              c.position.lat,
            longitude:             c.position.lon,
            distance_to_nearest_m: Some(c.distance_m),
            estimated_time_min:    Some(c.travel_time_min),
        }
    }
}

// ── CoverageReducer ───────────────────────────────────────────────────────────

pub struct CoverageReducer<'a, M: DistanceModel + ?Sized> {
    model:            &'a M,
    min_separation_m: f64,
    policy:           ReductionPolicy,
}

impl<'a, M: DistanceModel + ?Sized> CoverageReducer<'a, M> {
    pub fn new(model: &'a M, min_separation_m: f64, policy: ReductionPolicy) -> Self {
        Self { model, min_separation_m, policy }
    }

    /// Reduce `candidates` to gap zones, worst-served first.
    pub fn reduce(&self, mut candidates: Vec<GapCandidate>) -> Vec<GapZone> {
        sort_worst_first(&mut candidates);
        let accepted = match self.policy {
            ReductionPolicy::IterativeCovering => self.iterative_covering(candidates),
            ReductionPolicy::StaticFilter      => self.static_filter(candidates),
        };
        accepted.into_iter().map(GapZone::from).collect()
    }

    fn covers(&self, zone: &GapCandidate, other: &GapCandidate) -> bool {
        self.model.ground_distance_m(zone.position, other.position) <= self.min_separation_m
    }

    fn iterative_covering(&self, sorted: Vec<GapCandidate>) -> Vec<GapCandidate> {
        let mut worklist: VecDeque<GapCandidate> = sorted.into();
        let mut accepted = Vec::new();
        while let Some(head) = worklist.pop_front() {
            // `retain` keeps relative order, so the next head is still the
            // worst-served survivor.
            worklist.retain(|c| !self.covers(&head, c));
            accepted.push(head);
        }
        accepted
    }

    fn static_filter(&self, sorted: Vec<GapCandidate>) -> Vec<GapCandidate> {
        let mut accepted: Vec<GapCandidate> = Vec::new();
        for c in sorted {
            if !accepted.iter().any(|z| self.covers(z, &c)) {
                accepted.push(c);
            }
        }
        accepted
    }
}

/// Distance descending; ties by latitude then longitude ascending.
pub fn sort_worst_first(candidates: &mut [GapCandidate]) {
    candidates.sort_by(worst_first);
}

fn worst_first(a: &GapCandidate, b: &GapCandidate) -> Ordering {
    b.distance_m
        .total_cmp(&a.distance_m)
        .then_with(|| a.position.lat.total_cmp(&b.position.lat))
        .then_with(|| a.position.lon.total_cmp(&b.position.lon))
}
