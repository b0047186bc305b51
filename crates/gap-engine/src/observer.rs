//! Analysis observer trait for progress reporting and data collection.

use crate::{AnalysisReport, RegionReport};

/// Callbacks invoked by
/// [`DistrictAggregator::run_with_observer`][crate::DistrictAggregator::run_with_observer].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Callbacks are always made from the
/// calling thread, in district input order, even when districts were
/// analysed in parallel.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl AnalysisObserver for ProgressPrinter {
///     fn on_region_end(&mut self, district: &str, report: &RegionReport) {
///         println!("{district}: {} gap zones", report.gap_count);
///     }
/// }
/// ```
pub trait AnalysisObserver {
    /// Called once, after configuration validation, before any district.
    fn on_run_start(&mut self, _districts: usize) {}

    /// Called once per district with its finished (or failed) report.
    fn on_region_end(&mut self, _district: &str, _report: &RegionReport) {}

    /// Called once with the assembled report.
    fn on_run_end(&mut self, _report: &AnalysisReport) {}
}

/// An [`AnalysisObserver`] that does nothing.
pub struct NoopObserver;

impl AnalysisObserver for NoopObserver {}
