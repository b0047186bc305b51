//! Integration tests for gap-output.

#[cfg(test)]
mod fixtures {
    use std::collections::BTreeMap;

    use gap_core::AnalysisConfig;
    use gap_engine::{AnalysisReport, EngineError, GapZone, RegionReport, RunParameters};

    pub fn zone(lat: f64, lon: f64, d: Option<f64>) -> GapZone {
        GapZone {
            latitude:              lat,
            longitude:             lon,
            distance_to_nearest_m: d,
            estimated_time_min:    d.map(|d| d / 90.0),
        }
    }

    pub fn region(zones: Vec<GapZone>) -> RegionReport {
        RegionReport {
            gap_count:      zones.len(),
            gap_zones:      zones,
            facility_count: 3,
            grid_points:    120,
            gap_candidates: 17,
            error:          None,
        }
    }

    /// Two healthy districts, one failed.
    pub fn report() -> AnalysisReport {
        let mut regions = BTreeMap::new();
        regions.insert(
            "Leninsky district".to_owned(),
            region(vec![zone(42.87, 74.55, Some(1_800.0)), zone(42.85, 74.52, Some(900.0))]),
        );
        regions.insert("Oktyabrsky district".to_owned(), region(vec![zone(42.83, 74.62, None)]));
        regions.insert(
            "Pervomaisky district".to_owned(),
            RegionReport::failed(&EngineError::Timeout),
        );
        AnalysisReport {
            parameters: RunParameters::from(&AnalysisConfig::default()),
            regions,
        }
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::writer::{export_report, ReportWriter};

    use super::fixtures::report;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn records(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        csv::Reader::from_path(path).unwrap().records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("gap_zones.csv").exists());
        assert!(dir.path().join("region_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("gap_zones.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["district", "rank", "latitude", "longitude", "distance_to_nearest_m", "estimated_time_min"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("region_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["district", "gap_count", "facility_count", "grid_points", "gap_candidates", "error"]
        );
    }

    #[test]
    fn csv_report_contents() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        export_report(&mut w, &report()).unwrap();

        let zones = records(dir.path().join("gap_zones.csv"));
        assert_eq!(zones.len(), 3);
        assert_eq!(&zones[0][0], "Leninsky district");
        assert_eq!(&zones[0][1], "1");
        assert_eq!(&zones[0][4], "1800");
        assert_eq!(&zones[0][5], "20");
        assert_eq!(&zones[1][1], "2");
        // Whole-region gap: no distance or time.
        assert_eq!(&zones[2][0], "Oktyabrsky district");
        assert_eq!(&zones[2][4], "");
        assert_eq!(&zones[2][5], "");

        let summaries = records(dir.path().join("region_summaries.csv"));
        assert_eq!(summaries.len(), 3);
        assert_eq!(&summaries[0][1], "2");
        assert_eq!(&summaries[0][5], "");
        assert_eq!(&summaries[2][0], "Pervomaisky district");
        assert_eq!(&summaries[2][1], "0");
        assert!(summaries[2][5].contains("deadline"));
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_zones_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_zones(&[]).unwrap();
    }
}

// ── JSON ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod json_tests {
    use gap_engine::AnalysisReport;

    use crate::json::JsonWriter;
    use crate::writer::{export_report, ReportWriter};

    use super::fixtures::report;

    #[test]
    fn no_file_before_report() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = JsonWriter::new(dir.path());
        w.finish().unwrap();
        assert!(!w.path().exists());
    }

    #[test]
    fn json_mapping_shape() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = JsonWriter::new(dir.path());
        export_report(&mut w, &report()).unwrap();

        let text = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(v["parameters"]["service_radius_m"], 800.0);
        assert_eq!(v["parameters"]["travel_mode"], "walk");

        let leninsky = &v["regions"]["Leninsky district"];
        assert_eq!(leninsky["gap_count"], 2);
        assert_eq!(leninsky["gap_zones"][0]["latitude"], 42.87);
        assert_eq!(leninsky["gap_zones"][0]["distance_to_nearest_m"], 1_800.0);
        assert!(leninsky.get("error").is_none());

        let okt = &v["regions"]["Oktyabrsky district"]["gap_zones"][0];
        assert!(okt["distance_to_nearest_m"].is_null());

        let failed = &v["regions"]["Pervomaisky district"];
        assert_eq!(failed["gap_count"], 0);
        assert!(failed["error"].as_str().unwrap().contains("deadline"));
    }

    #[test]
    fn json_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = JsonWriter::new(dir.path());
        export_report(&mut w, &report()).unwrap();

        let text = std::fs::read_to_string(w.path()).unwrap();
        let back: AnalysisReport = serde_json::from_str(&text).unwrap();
        let original = report();
        assert_eq!(back.parameters, original.parameters);
        assert_eq!(back.regions.len(), original.regions.len());
        for (name, region) in &original.regions {
            assert_eq!(back.regions[name].gap_count, region.gap_count);
            assert_eq!(back.regions[name].error, region.error);
        }
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use std::collections::HashMap;

    use gap_core::{AnalysisConfig, Coordinate, Facility, FacilityCategory, Region};
    use gap_engine::{DistrictAggregator, FacilitySource, UpstreamError};

    use crate::csv::CsvWriter;
    use crate::json::JsonWriter;
    use crate::observer::ReportObserver;

    struct MapSource(HashMap<&'static str, (Region, Vec<Facility>)>);

    impl FacilitySource for MapSource {
        fn boundary(&self, district: &str) -> Result<Region, UpstreamError> {
            self.0
                .get(district)
                .map(|(r, _)| *r)
                .ok_or_else(|| UpstreamError::new("no such district"))
        }

        fn facilities(
            &self,
            district: &str,
            _category: Option<&FacilityCategory>,
        ) -> Result<Vec<Facility>, UpstreamError> {
            self.0
                .get(district)
                .map(|(_, f)| f.clone())
                .ok_or_else(|| UpstreamError::new("no such district"))
        }
    }

    #[test]
    fn integration_csv_and_json() {
        let mut map = HashMap::new();
        map.insert(
            "Oktyabrsky district",
            (
                Region::new(42.80, 42.86, 74.58, 74.66).unwrap(),
                vec![Facility::new(Coordinate::new(42.83, 74.60), FacilityCategory::School)],
            ),
        );
        let agg = DistrictAggregator::new(MapSource(map), AnalysisConfig::default());

        let dir = tempfile::tempdir().unwrap();
        let writer = (CsvWriter::new(dir.path()).unwrap(), JsonWriter::new(dir.path()));
        let mut obs = ReportObserver::new(writer);
        let report = agg
            .run_with_observer(&["Oktyabrsky district", "Atlantis"], &mut obs)
            .unwrap();
        assert!(obs.take_error().is_none());

        let zones: Vec<_> = csv::Reader::from_path(dir.path().join("gap_zones.csv"))
            .unwrap()
            .records()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(zones.len(), report.total_gaps());
        assert!(!zones.is_empty());

        let summaries: Vec<_> = csv::Reader::from_path(dir.path().join("region_summaries.csv"))
            .unwrap()
            .records()
            .map(|r| r.unwrap())
            .collect();
        // Observer order follows the input list.
        assert_eq!(&summaries[0][0], "Oktyabrsky district");
        assert_eq!(&summaries[1][0], "Atlantis");
        assert!(summaries[1][5].contains("no such district"));

        assert!(dir.path().join("report.json").exists());
    }

    #[test]
    fn write_errors_are_stored() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in place of report.json makes File::create fail.
        std::fs::create_dir(dir.path().join("report.json")).unwrap();

        let agg = DistrictAggregator::new(MapSource(HashMap::new()), AnalysisConfig::default());
        let mut obs = ReportObserver::new(JsonWriter::new(dir.path()));
        agg.run_with_observer(&["Atlantis"], &mut obs).unwrap();
        assert!(obs.take_error().is_some());
        assert!(obs.take_error().is_none(), "error is taken once");
    }
}
