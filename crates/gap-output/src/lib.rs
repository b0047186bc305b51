//! `gap-output` — report writers for the coverage-gap engine.
//!
//! | Backend | Files created                                |
//! |---------|----------------------------------------------|
//! | CSV     | `gap_zones.csv`, `region_summaries.csv`      |
//! | JSON    | `report.json`                                |
//!
//! Both backends implement [`ReportWriter`].  They can be driven by
//! [`ReportObserver`] during a run, or fed a finished report with
//! [`export_report`].  A pair `(A, B)` of writers is itself a writer, so one
//! run can produce both formats.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gap_output::{CsvWriter, JsonWriter, ReportObserver};
//!
//! let writer = (CsvWriter::new(dir)?, JsonWriter::new(dir));
//! let mut obs = ReportObserver::new(writer);
//! aggregator.run_with_observer(&districts, &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use observer::ReportObserver;
pub use row::{GapZoneRow, RegionSummaryRow};
pub use writer::{export_report, ReportWriter};
