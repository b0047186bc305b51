//! JSON output backend: the whole report as `report.json`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use gap_engine::AnalysisReport;

use crate::writer::ReportWriter;
use crate::OutputResult;

/// Serializes the assembled report as pretty-printed JSON.
///
/// The file is created when the report arrives, not in `new`, so a run
/// that aborts early leaves no partial document behind.
pub struct JsonWriter {
    path: PathBuf,
    out:  Option<BufWriter<File>>,
}

impl JsonWriter {
    pub fn new(dir: &Path) -> Self {
        Self { path: dir.join("report.json"), out: None }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportWriter for JsonWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> OutputResult<()> {
        let mut out = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut out, report)?;
        out.write_all(b"\n")?;
        self.out = Some(out);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(mut out) = self.out.take() {
            out.flush()?;
        }
        Ok(())
    }
}
