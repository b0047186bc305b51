//! Per-district orchestration with failure isolation.
//!
//! # Run phases
//!
//! ```text
//! ① Validate  — AnalysisConfig::validate; an invalid config aborts the run.
//! ② Analyse   — for each district (parallel with the `parallel` feature):
//!                 deadline passed?  → Timeout marker, skip
//!                 fetch boundary + facilities, name-filter, run pipeline
//!                 any error         → error marker for this district only
//! ③ Assemble  — sequentially, in input order: observer callbacks and
//!               insertion into the BTreeMap report.
//! ```
//!
//! Districts share nothing mutable: each builds its own index and candidate
//! set.  The deadline is checked before a district starts; a district
//! already running is never interrupted, so completed work is always kept.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use gap_core::AnalysisConfig;

use crate::observer::{AnalysisObserver, NoopObserver};
use crate::pipeline::{analyze_validated, RegionAnalysis};
use crate::{
    district_label, AnalysisReport, EngineError, EngineResult, FacilitySource, NameFilter,
    RegionReport, RunParameters,
};

/// Runs the gap pipeline once per district and merges the results.
///
/// # Optional settings (have defaults)
///
/// | Method          | Default            |
/// |-----------------|--------------------|
/// | `.filter(f)`    | keep every facility|
/// | `.timeout(d)`   | no deadline        |
pub struct DistrictAggregator<S: FacilitySource> {
    source:  S,
    config:  AnalysisConfig,
    filter:  Option<NameFilter>,
    timeout: Option<Duration>,
}

impl<S: FacilitySource> DistrictAggregator<S> {
    pub fn new(source: S, config: AnalysisConfig) -> Self {
        Self { source, config, filter: None, timeout: None }
    }

    /// Drop fetched facilities whose names fail `filter`.
    pub fn filter(mut self, filter: NameFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Stop starting new districts once `timeout` has elapsed since `run`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Analyse every district query in `districts`.
    ///
    /// Report keys are [`district_label`]s of the queries.  Returns `Err`
    /// only for an invalid configuration.
    pub fn run(&self, districts: &[&str]) -> EngineResult<AnalysisReport> {
        self.run_with_observer(districts, &mut NoopObserver)
    }

    /// [`run`](Self::run) with progress callbacks.
    pub fn run_with_observer<O: AnalysisObserver>(
        &self,
        districts: &[&str],
        observer:  &mut O,
    ) -> EngineResult<AnalysisReport> {
        self.config.validate()?;
        let deadline = self.timeout.map(|t| Instant::now() + t);
        observer.on_run_start(districts.len());

        let outcomes = self.analyze_all(districts, deadline);

        let mut regions = BTreeMap::new();
        for (query, report) in districts.iter().zip(outcomes) {
            let label = district_label(query);
            observer.on_region_end(label, &report);
            if regions.insert(label.to_owned(), report).is_some() {
                log::warn!("duplicate district label {label:?}; keeping the later result");
            }
        }

        let report = AnalysisReport {
            parameters: RunParameters::from(&self.config),
            regions,
        };
        log::info!(
            "analysed {} districts: {} gap zones, {} failed",
            report.regions.len(),
            report.total_gaps(),
            report.failed_regions().count()
        );
        observer.on_run_end(&report);
        Ok(report)
    }

    /// One report per district, in input order.
    fn analyze_all(&self, districts: &[&str], deadline: Option<Instant>) -> Vec<RegionReport> {
        #[cfg(not(feature = "parallel"))]
        {
            districts
                .iter()
                .map(|d| self.analyze_district(d, deadline))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            districts
                .par_iter()
                .map(|d| self.analyze_district(d, deadline))
                .collect()
        }
    }

    fn analyze_district(&self, district: &str, deadline: Option<Instant>) -> RegionReport {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            log::warn!("{district}: skipped, analysis deadline exceeded");
            return RegionReport::failed(&EngineError::Timeout);
        }
        match self.try_district(district) {
            Ok(analysis) => {
                log::info!(
                    "{district}: {} gap zones from {} candidates",
                    analysis.zones.len(),
                    analysis.candidates
                );
                RegionReport::from(analysis)
            }
            Err(e) => {
                log::warn!("{district}: {e}");
                RegionReport::failed(&e)
            }
        }
    }

    fn try_district(&self, district: &str) -> EngineResult<RegionAnalysis> {
        let region = self.source.boundary(district)?;
        let mut facilities = self.source.facilities(district, self.config.category.as_ref())?;
        if let Some(filter) = &self.filter {
            facilities = filter.apply(facilities);
        }
        analyze_validated(&region, &facilities, &self.config)
    }
}
