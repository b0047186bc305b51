//! CSV facility loader.
//!
//! # CSV format
//!
//! One row per facility.  `name` may be empty.
//!
//! ```csv
//! district,category,name,lat,lon
//! Oktyabrsky,school,School No. 5,42.8401,74.6102
//! Oktyabrsky,clinic,,42.8355,74.6251
//! Leninsky,school,School No. 12,42.8620,74.5530
//! ```
//!
//! Rows are grouped by `district` in a `BTreeMap` so iteration order is
//! stable regardless of row order in the file.  Within a district, facilities
//! keep file order.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{Coordinate, CoreError, CoreResult, Facility, FacilityCategory};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FacilityRecord {
    district: String,
    category: String,
    name:     Option<String>,
    lat:      f64,
    lon:      f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load facilities from a CSV file, grouped by district name.
pub fn load_facilities_csv(path: &Path) -> CoreResult<BTreeMap<String, Vec<Facility>>> {
    let file = std::fs::File::open(path)?;
    load_facilities_reader(file)
}

/// Like [`load_facilities_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from an
/// upstream response body.
pub fn load_facilities_reader<R: Read>(reader: R) -> CoreResult<BTreeMap<String, Vec<Facility>>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_district: BTreeMap<String, Vec<Facility>> = BTreeMap::new();

    for (line, result) in csv_reader.deserialize::<FacilityRecord>().enumerate() {
        let row = result.map_err(|e| CoreError::Parse(e.to_string()))?;
        let position = Coordinate::try_new(row.lat, row.lon).map_err(|e| {
            // +2: header row and 1-based numbering.
            CoreError::Parse(format!("record {}: {e}", line + 2))
        })?;
        let Ok(category) = row.category.parse::<FacilityCategory>();
        let facility = match row.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Facility::named(position, category, name),
            _ => Facility::new(position, category),
        };

        by_district.entry(row.district.trim().to_owned()).or_default().push(facility);
    }

    Ok(by_district)
}
