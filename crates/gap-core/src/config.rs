//! Analysis configuration.
//!
//! # Design
//!
//! One parameterised pipeline serves every facility type: the category,
//! service radius, grid step, and minimum separation are all run parameters
//! rather than per-facility code paths.  `AnalysisConfig` is validated once
//! at the entry of a run ([`AnalysisConfig::validate`]); nothing downstream
//! re-checks it.

use crate::{CoreError, CoreResult, FacilityCategory, TravelMode};

// ── Policy enums ──────────────────────────────────────────────────────────────

/// How gap candidates are collapsed into non-overlapping gap zones.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReductionPolicy {
    /// Worst-served candidate first; each accepted zone clears every
    /// remaining candidate within the minimum separation from the worklist.
    #[default]
    IterativeCovering,
    /// Single pass over the sorted candidates; a candidate is kept unless an
    /// already-accepted zone lies within the minimum separation.
    StaticFilter,
}

impl ReductionPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ReductionPolicy::IterativeCovering => "iterative_covering",
            ReductionPolicy::StaticFilter      => "static_filter",
        }
    }
}

/// Which ground-distance formula thresholds and reports distances.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DistanceFormula {
    /// Great-circle distance on a sphere of mean Earth radius.
    #[default]
    Haversine,
    /// Vincenty inverse solution on the WGS-84 ellipsoid.
    Vincenty,
}

impl DistanceFormula {
    pub fn as_str(self) -> &'static str {
        match self {
            DistanceFormula::Haversine => "haversine",
            DistanceFormula::Vincenty  => "vincenty",
        }
    }
}

/// What to do with a region that has no facilities of the analysed category.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EmptyRegionPolicy {
    /// Report the whole region as a single gap zone at its centre.
    #[default]
    WholeRegionGap,
    /// Report the region as failed with an empty-facility-set error.
    Error,
}

// ── AnalysisConfig ────────────────────────────────────────────────────────────

/// Parameters of one analysis run.
///
/// Typically built by the application from CLI flags or a config file and
/// passed unchanged to every region, so all regions of a report share them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisConfig {
    /// A location is served if a facility lies within this ground distance.
    pub service_radius_m: f64,

    /// Spacing of the candidate lattice, in metres.
    pub grid_step_m: f64,

    /// Minimum ground distance between two reported gap zones.
    pub min_separation_m: f64,

    /// Facility category analysed.  `None` keeps every supplied facility.
    pub category: Option<FacilityCategory>,

    /// Mode used for `estimated_time_min`.  Default: walking.
    pub travel_mode: TravelMode,

    pub distance_formula: DistanceFormula,

    pub reduction_policy: ReductionPolicy,

    pub empty_region_policy: EmptyRegionPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            service_radius_m:    800.0,
            grid_step_m:         300.0,
            min_separation_m:    1_000.0,
            category:            Some(FacilityCategory::School),
            travel_mode:         TravelMode::Walk,
            distance_formula:    DistanceFormula::Haversine,
            reduction_policy:    ReductionPolicy::IterativeCovering,
            empty_region_policy: EmptyRegionPolicy::WholeRegionGap,
        }
    }
}

impl AnalysisConfig {
    /// Construct with the three required distances; everything else default.
    pub fn new(service_radius_m: f64, grid_step_m: f64, min_separation_m: f64) -> Self {
        Self {
            service_radius_m,
            grid_step_m,
            min_separation_m,
            ..Self::default()
        }
    }

    /// Reject non-positive or non-finite distances.
    pub fn validate(&self) -> CoreResult<()> {
        check_positive("service_radius_m", self.service_radius_m)?;
        check_positive("grid_step_m", self.grid_step_m)?;
        check_positive("min_separation_m", self.min_separation_m)?;
        Ok(())
    }
}

fn check_positive(name: &str, value: f64) -> CoreResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidConfiguration(format!(
            "{name} must be a positive finite number of metres, got {value}"
        )))
    }
}
