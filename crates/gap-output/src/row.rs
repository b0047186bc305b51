//! Flat row types written by tabular backends.

use gap_engine::RegionReport;

/// One recommended gap zone of one district.
#[derive(Debug, Clone, PartialEq)]
pub struct GapZoneRow {
    pub district:              String,
    /// 1-based position in the district's worst-first zone list.
    pub rank:                  usize,
    pub latitude:              f64,
    pub longitude:             f64,
    /// Empty for a whole-region gap.
    pub distance_to_nearest_m: Option<f64>,
    pub estimated_time_min:    Option<f64>,
}

impl GapZoneRow {
    /// Rows for every zone of `report`, in report order.
    pub fn from_region(district: &str, report: &RegionReport) -> Vec<Self> {
        report
            .gap_zones
            .iter()
            .enumerate()
            .map(|(i, z)| Self {
                district:              district.to_owned(),
                rank:                  i + 1,
                latitude:              z.latitude,
                longitude:             z.longitude,
                distance_to_nearest_m: z.distance_to_nearest_m,
                estimated_time_min:    z.estimated_time_min,
            })
            .collect()
    }
}

/// Per-district counts and error marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSummaryRow {
    pub district:       String,
    pub gap_count:      usize,
    pub facility_count: usize,
    pub grid_points:    usize,
    pub gap_candidates: usize,
    pub error:          Option<String>,
}

impl RegionSummaryRow {
    pub fn new(district: &str, report: &RegionReport) -> Self {
        Self {
            district:       district.to_owned(),
            gap_count:      report.gap_count,
            facility_count: report.facility_count,
            grid_points:    report.grid_points,
            gap_candidates: report.gap_candidates,
            error:          report.error.clone(),
        }
    }
}
