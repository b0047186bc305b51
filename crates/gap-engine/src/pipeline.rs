//! Single-region analysis: index → grid → classify → reduce.

use gap_core::{AnalysisConfig, Coordinate, EmptyRegionPolicy, Facility, Region};
use gap_spatial::{GridGenerator, SpatialIndex};

use crate::{CoverageReducer, EngineError, EngineResult, GapClassifier, GapZone};

/// Outcome of analysing one region.
///
/// Always `zones.len() ≤ candidates ≤ grid_points`.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionAnalysis {
    pub region:         Region,
    /// Facilities of the analysed category that the index was built from.
    pub facility_count: usize,
    pub grid_points:    usize,
    pub candidates:     usize,
    pub zones:          Vec<GapZone>,
}

/// Analyse one region against a facility list.
///
/// Validates `config` first; an invalid configuration is returned before any
/// computation.  Facilities whose category differs from `config.category`
/// are ignored.
pub fn analyze_region(
    region:     &Region,
    facilities: &[Facility],
    config:     &AnalysisConfig,
) -> EngineResult<RegionAnalysis> {
    config.validate()?;
    analyze_validated(region, facilities, config)
}

/// [`analyze_region`] for callers that already validated `config` once for
/// a whole run.
pub(crate) fn analyze_validated(
    region:     &Region,
    facilities: &[Facility],
    config:     &AnalysisConfig,
) -> EngineResult<RegionAnalysis> {
    let positions: Vec<Coordinate> = facilities
        .iter()
        .filter(|f| config.category.as_ref().is_none_or(|c| *c == f.category))
        .map(|f| f.position)
        .collect();

    let grid = GridGenerator::new(*region, config.grid_step_m)?;

    // ── No facilities: decide before an index is ever built ───────────────
    if positions.is_empty() {
        return match config.empty_region_policy {
            EmptyRegionPolicy::Error => Err(EngineError::EmptyFacilitySet),
            EmptyRegionPolicy::WholeRegionGap => {
                let grid_points = grid.points().count();
                log::debug!("region {region:?} has no facilities; reporting it as one gap");
                Ok(RegionAnalysis {
                    region:         *region,
                    facility_count: 0,
                    grid_points,
                    candidates:     grid_points,
                    zones:          vec![GapZone::unserved(region.center())],
                })
            }
        };
    }

    let index = SpatialIndex::build(&positions)?;
    let model = config.distance_formula;

    let classifier = GapClassifier::new(&index, &model, config.service_radius_m, config.travel_mode);
    let (grid_points, candidates) = classifier.classify_grid(&grid);
    let candidate_count = candidates.len();

    let reducer = CoverageReducer::new(&model, config.min_separation_m, config.reduction_policy);
    let zones = reducer.reduce(candidates);

    log::debug!(
        "{} facilities, {grid_points} grid points, {candidate_count} gap candidates, {} zones",
        index.facility_count(),
        zones.len()
    );

    Ok(RegionAnalysis {
        region:         *region,
        facility_count: index.facility_count(),
        grid_points,
        candidates:     candidate_count,
        zones,
    })
}
