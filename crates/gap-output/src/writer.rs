//! The `ReportWriter` trait implemented by all backend writers.

use gap_engine::AnalysisReport;

use crate::{GapZoneRow, OutputResult, RegionSummaryRow};

/// Trait implemented by the CSV and JSON writers.
///
/// Tabular backends consume the per-district rows; document backends
/// consume the whole report in [`write_report`](Self::write_report).
/// Unused hooks default to no-ops.
pub trait ReportWriter {
    /// Write the gap zones of one district.
    fn write_zones(&mut self, _rows: &[GapZoneRow]) -> OutputResult<()> {
        Ok(())
    }

    /// Write one district summary row.
    fn write_summary(&mut self, _row: &RegionSummaryRow) -> OutputResult<()> {
        Ok(())
    }

    /// Write the assembled report.  Called once, after every district.
    fn write_report(&mut self, _report: &AnalysisReport) -> OutputResult<()> {
        Ok(())
    }

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent, safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<A: ReportWriter, B: ReportWriter> ReportWriter for (A, B) {
    fn write_zones(&mut self, rows: &[GapZoneRow]) -> OutputResult<()> {
        self.0.write_zones(rows)?;
        self.1.write_zones(rows)
    }

    fn write_summary(&mut self, row: &RegionSummaryRow) -> OutputResult<()> {
        self.0.write_summary(row)?;
        self.1.write_summary(row)
    }

    fn write_report(&mut self, report: &AnalysisReport) -> OutputResult<()> {
        self.0.write_report(report)?;
        self.1.write_report(report)
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.0.finish()?;
        self.1.finish()
    }
}

/// Write a finished report through `writer` and finish it.
///
/// Districts are written in report (label) order.
pub fn export_report<W: ReportWriter>(writer: &mut W, report: &AnalysisReport) -> OutputResult<()> {
    for (district, region) in &report.regions {
        writer.write_summary(&RegionSummaryRow::new(district, region))?;
        let zones = GapZoneRow::from_region(district, region);
        if !zones.is_empty() {
            writer.write_zones(&zones)?;
        }
    }
    writer.write_report(report)?;
    writer.finish()
}
