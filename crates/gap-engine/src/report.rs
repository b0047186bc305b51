//! Aggregated analysis report.

use std::collections::BTreeMap;

use gap_core::{AnalysisConfig, DistanceFormula, FacilityCategory, ReductionPolicy, TravelMode};

use crate::{EngineError, GapZone, RegionAnalysis};

/// Run parameters echoed into every report for reproducibility.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunParameters {
    pub service_radius_m: f64,
    pub grid_step_m:      f64,
    pub min_separation_m: f64,
    pub category:         Option<FacilityCategory>,
    pub travel_mode:      TravelMode,
    pub distance_formula: DistanceFormula,
    pub reduction_policy: ReductionPolicy,
}

impl From<&AnalysisConfig> for RunParameters {
    fn from(c: &AnalysisConfig) -> Self {
        Self {
            service_radius_m: c.service_radius_m,
            grid_step_m:      c.grid_step_m,
            min_separation_m: c.min_separation_m,
            category:         c.category.clone(),
            travel_mode:      c.travel_mode,
            distance_formula: c.distance_formula,
            reduction_policy: c.reduction_policy,
        }
    }
}

/// Result for one district.
///
/// A failed district has `error` set, `gap_count == 0`, and no zones; no
/// partial output is ever reported for it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionReport {
    pub gap_count:      usize,
    pub gap_zones:      Vec<GapZone>,
    pub facility_count: usize,
    pub grid_points:    usize,
    pub gap_candidates: usize,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub error:          Option<String>,
}

impl RegionReport {
    pub fn failed(error: &EngineError) -> Self {
        Self {
            gap_count:      0,
            gap_zones:      Vec::new(),
            facility_count: 0,
            grid_points:    0,
            gap_candidates: 0,
            error:          Some(error.to_string()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

impl From<RegionAnalysis> for RegionReport {
    fn from(a: RegionAnalysis) -> Self {
        Self {
            gap_count:      a.zones.len(),
            gap_zones:      a.zones,
            facility_count: a.facility_count,
            grid_points:    a.grid_points,
            gap_candidates: a.candidates,
            error:          None,
        }
    }
}

/// Per-district results keyed by district label, plus run parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisReport {
    pub parameters: RunParameters,
    pub regions:    BTreeMap<String, RegionReport>,
}

impl AnalysisReport {
    /// Gap zones summed over successful districts.
    pub fn total_gaps(&self) -> usize {
        self.regions.values().map(|r| r.gap_count).sum()
    }

    /// Labels of districts that carry an error marker.
    pub fn failed_regions(&self) -> impl Iterator<Item = &str> {
        self.regions
            .iter()
            .filter(|(_, r)| r.is_failed())
            .map(|(name, _)| name.as_str())
    }
}
