//! `ReportObserver<W>` bridges `AnalysisObserver` to a `ReportWriter`.

use gap_engine::{AnalysisObserver, AnalysisReport, RegionReport};

use crate::row::{GapZoneRow, RegionSummaryRow};
use crate::writer::ReportWriter;
use crate::{OutputError, OutputResult};

/// An [`AnalysisObserver`] that streams district results to any
/// [`ReportWriter`] backend as they are assembled.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct ReportObserver<W: ReportWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: ReportWriter> ReportObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ReportWriter> AnalysisObserver for ReportObserver<W> {
    fn on_region_end(&mut self, district: &str, report: &RegionReport) {
        let result = self.writer.write_summary(&RegionSummaryRow::new(district, report));
        self.store_err(result);

        let zones = GapZoneRow::from_region(district, report);
        if !zones.is_empty() {
            let result = self.writer.write_zones(&zones);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, report: &AnalysisReport) {
        let result = self.writer.write_report(report);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
