//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `gap_zones.csv`
//! - `region_summaries.csv`
//!
//! Missing values (whole-region gap distances, absent errors) are written
//! as empty cells.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{GapZoneRow, OutputResult, RegionSummaryRow};

/// Writes an analysis report to two CSV files.
pub struct CsvWriter {
    zones:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut zones = Writer::from_path(dir.join("gap_zones.csv"))?;
        zones.write_record([
            "district",
            "rank",
            "latitude",
            "longitude",
            "distance_to_nearest_m",
            "estimated_time_min",
        ])?;

        let mut summaries = Writer::from_path(dir.join("region_summaries.csv"))?;
        summaries.write_record([
            "district",
            "gap_count",
            "facility_count",
            "grid_points",
            "gap_candidates",
            "error",
        ])?;

        Ok(Self { zones, summaries, finished: false })
    }
}

fn opt<T: ToString>(v: &Option<T>) -> String {
    v.as_ref().map(T::to_string).unwrap_or_default()
}

impl ReportWriter for CsvWriter {
    fn write_zones(&mut self, rows: &[GapZoneRow]) -> OutputResult<()> {
        for row in rows {
            self.zones.write_record(&[
                row.district.clone(),
                row.rank.to_string(),
                row.latitude.to_string(),
                row.longitude.to_string(),
                opt(&row.distance_to_nearest_m),
                opt(&row.estimated_time_min),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &RegionSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.district.clone(),
            row.gap_count.to_string(),
            row.facility_count.to_string(),
            row.grid_points.to_string(),
            row.gap_candidates.to_string(),
            opt(&row.error),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.zones.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
