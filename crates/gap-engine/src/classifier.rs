//! Per-point gap classification.

use gap_core::{Coordinate, GridPoint, TravelMode};
use gap_spatial::{nearest_ground, DistanceModel, GridGenerator, SpatialIndex};

/// A grid point farther than the service radius from every facility.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GapCandidate {
    pub position:         GridPoint,
    /// Ground-nearest facility.
    pub nearest_facility: Coordinate,
    /// Ground distance to `nearest_facility`, metres.
    pub distance_m:       f64,
    /// `distance_m` at the configured travel mode's speed, minutes.
    pub travel_time_min:  f64,
}

/// Labels grid points as gaps against a fixed facility index.
///
/// Holds only shared references and copies, so `classify` is a pure
/// function of its input and one classifier can be used from many threads.
pub struct GapClassifier<'a, M: DistanceModel + ?Sized> {
    index:    &'a SpatialIndex,
    model:    &'a M,
    radius_m: f64,
    mode:     TravelMode,
}

impl<'a, M: DistanceModel + ?Sized> GapClassifier<'a, M> {
    pub fn new(index: &'a SpatialIndex, model: &'a M, radius_m: f64, mode: TravelMode) -> Self {
        Self { index, model, radius_m, mode }
    }

    /// `Some` iff the ground distance to the nearest facility exceeds the
    /// service radius.  A point exactly on the radius is served.
    pub fn classify(&self, point: GridPoint) -> Option<GapCandidate> {
        // A built index always holds at least one facility.
        let nearest = nearest_ground(self.index, self.model, point)?;
        (nearest.distance_m > self.radius_m).then(|| GapCandidate {
            position:         point,
            nearest_facility: nearest.position,
            distance_m:       nearest.distance_m,
            travel_time_min:  self.mode.travel_time_min(nearest.distance_m),
        })
    }

    /// Classify every point of `grid`.
    ///
    /// Returns the number of grid points examined and the candidates in grid
    /// order.  With the `parallel` Cargo feature the points are classified on
    /// Rayon's thread pool; order is the same either way.
    pub fn classify_grid(&self, grid: &GridGenerator) -> (usize, Vec<GapCandidate>) {
        #[cfg(not(feature = "parallel"))]
        {
            let mut examined = 0usize;
            let candidates = grid
                .points()
                .inspect(|_| examined += 1)
                .filter_map(|p| self.classify(p))
                .collect();
            (examined, candidates)
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Materialise the lattice once so Rayon can split it by index.
            let mut points: Vec<GridPoint> = Vec::with_capacity(grid.estimated_len());
            points.extend(grid.points());
            let candidates = points
                .par_iter()
                .filter_map(|&p| self.classify(p))
                .collect();
            (points.len(), candidates)
        }
    }
}
