//! Ground-distance models and the two-phase nearest-facility lookup.
//!
//! # Pluggability
//!
//! The engine calls distance through the [`DistanceModel`] trait, so an
//! application can substitute a road-network or isochrone distance without
//! touching the classifier.  Two geodesic models ship here:
//!
//! | Model         | Surface                       | Typical error at city scale |
//! |---------------|-------------------------------|-----------------------------|
//! | [`Haversine`] | sphere, mean radius           | ≤ 0.5 %                     |
//! | [`Vincenty`]  | WGS-84 ellipsoid              | sub-millimetre              |
//!
//! [`DistanceFormula`] (from the run configuration) dispatches to either.

use gap_core::{Coordinate, DistanceFormula, FacilityId};

use crate::SpatialIndex;

/// How far below the spherical great-circle distance a [`DistanceModel`]
/// may go.  The WGS-84 geodesic differs from the mean-radius sphere by at
/// most about 0.6 %.
pub const RECHECK_SLACK: f64 = 0.01;

// ── DistanceModel trait ───────────────────────────────────────────────────────

/// Ground distance in metres between two coordinates.
///
/// # Contract
///
/// A model must never report less than `1 - RECHECK_SLACK` times the
/// spherical great-circle distance.  Geodesic and road-network distances
/// satisfy this; [`nearest_ground`] relies on it to stop its search early.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one model can be shared across
/// Rayon workers during parallel classification.
pub trait DistanceModel: Send + Sync {
    fn ground_distance_m(&self, a: Coordinate, b: Coordinate) -> f64;
}

// ── Haversine ─────────────────────────────────────────────────────────────────

/// Great-circle distance on a sphere of IUGG mean Earth radius.
#[derive(Copy, Clone, Debug, Default)]
pub struct Haversine;

impl Haversine {
    pub const EARTH_RADIUS_M: f64 = 6_371_008.8;
}

impl DistanceModel for Haversine {
    fn ground_distance_m(&self, a: Coordinate, b: Coordinate) -> f64 {
        let d_lat = (b.lat - a.lat).to_radians();
        let d_lon = (b.lon - a.lon).to_radians();

        let lat1 = a.lat.to_radians();
        let lat2 = b.lat.to_radians();

        let h = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
        Self::EARTH_RADIUS_M * c
    }
}

// ── Vincenty ──────────────────────────────────────────────────────────────────

/// Vincenty's inverse formula on the WGS-84 ellipsoid.
///
/// The iteration fails to converge for nearly antipodal points; those pairs
/// fall back to [`Haversine`].
#[derive(Copy, Clone, Debug, Default)]
pub struct Vincenty;

impl Vincenty {
    const A: f64 = 6_378_137.0;
    const F: f64 = 1.0 / 298.257_223_563;
    const MAX_ITERATIONS: usize = 200;
    const TOLERANCE: f64 = 1e-12;
}

impl DistanceModel for Vincenty {
    fn ground_distance_m(&self, a: Coordinate, b: Coordinate) -> f64 {
        let (major, f) = (Self::A, Self::F);
        let minor = (1.0 - f) * major;

        let l = (b.lon - a.lon).to_radians();
        let u1 = ((1.0 - f) * a.lat.to_radians().tan()).atan();
        let u2 = ((1.0 - f) * b.lat.to_radians().tan()).atan();
        let (sin_u1, cos_u1) = u1.sin_cos();
        let (sin_u2, cos_u2) = u2.sin_cos();

        let mut lambda = l;
        for _ in 0..Self::MAX_ITERATIONS {
            let (sin_lambda, cos_lambda) = lambda.sin_cos();
            let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
                + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
            .sqrt();
            if sin_sigma == 0.0 {
                return 0.0; // coincident points
            }
            let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            let sigma = sin_sigma.atan2(cos_sigma);
            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            let cos2_alpha = 1.0 - sin_alpha * sin_alpha;
            // Equatorial line: cos2_alpha = 0.
            let cos_2sigma_m = if cos2_alpha != 0.0 {
                cos_sigma - 2.0 * sin_u1 * sin_u2 / cos2_alpha
            } else {
                0.0
            };
            let c = f / 16.0 * cos2_alpha * (4.0 + f * (4.0 - 3.0 * cos2_alpha));

            let prev = lambda;
            lambda = l
                + (1.0 - c) * f * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))));

            if (lambda - prev).abs() < Self::TOLERANCE {
                let u_sq = cos2_alpha * (major * major - minor * minor) / (minor * minor);
                let big_a = 1.0
                    + u_sq / 16_384.0 * (4_096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
                let big_b = u_sq / 1_024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
                let delta_sigma = big_b
                    * sin_sigma
                    * (cos_2sigma_m
                        + big_b / 4.0
                            * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))
                                - big_b / 6.0
                                    * cos_2sigma_m
                                    * (-3.0 + 4.0 * sin_sigma.powi(2))
                                    * (-3.0 + 4.0 * cos_2sigma_m.powi(2))));
                return minor * big_a * (sigma - delta_sigma);
            }
        }

        log::debug!("vincenty did not converge for {a} → {b}; using haversine");
        Haversine.ground_distance_m(a, b)
    }
}

// ── Config dispatch ───────────────────────────────────────────────────────────

impl DistanceModel for DistanceFormula {
    #[inline]
    fn ground_distance_m(&self, a: Coordinate, b: Coordinate) -> f64 {
        match self {
            DistanceFormula::Haversine => Haversine.ground_distance_m(a, b),
            DistanceFormula::Vincenty  => Vincenty.ground_distance_m(a, b),
        }
    }
}

// ── Two-phase nearest ─────────────────────────────────────────────────────────

/// The ground-nearest facility to a query point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GroundNearest {
    pub id:         FacilityId,
    pub position:   Coordinate,
    pub distance_m: f64,
}

/// Find the facility with the smallest *ground* distance to `point`.
///
/// Candidates are pulled from the index in ascending great-circle order and
/// each one is rechecked with `model`.  The walk stops once a candidate's
/// great-circle distance, discounted by [`RECHECK_SLACK`], exceeds the best
/// ground distance seen: by the [`DistanceModel`] contract no later
/// candidate can then be closer.  For [`Haversine`] this is exact, and in
/// the common case it costs one or two ground-distance evaluations.
///
/// `None` only for an empty index, which [`SpatialIndex::build`] never
/// produces.
pub fn nearest_ground<M: DistanceModel + ?Sized>(
    index: &SpatialIndex,
    model: &M,
    point: Coordinate,
) -> Option<GroundNearest> {
    let head = index.query_nearest(point)?;
    let mut best = GroundNearest {
        id:         head.id,
        position:   head.position,
        distance_m: model.ground_distance_m(point, head.position),
    };

    for cand in index.nearest_iter(point) {
        if cand.index_distance_m * (1.0 - RECHECK_SLACK) > best.distance_m {
            break;
        }
        if cand.id == head.id {
            continue;
        }
        let d = model.ground_distance_m(point, cand.position);
        // Strict `<` keeps the index-nearest facility on exact ties.
        if d < best.distance_m {
            best = GroundNearest { id: cand.id, position: cand.position, distance_m: d };
        }
    }
    Some(best)
}
