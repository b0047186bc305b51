//! bishkek — school coverage gaps across the districts of Bishkek.
//!
//! Facilities come from an embedded CSV and district boundaries from a small
//! table of approximate bounding boxes, standing in for a geocoder and a
//! POI provider.  One district is marked unavailable to show failure
//! isolation.  Writes `gap_zones.csv`, `region_summaries.csv`, and
//! `report.json` to `output/bishkek`.
//!
//! Set `RUST_LOG=debug` for per-district grid and index sizes.

use std::collections::{BTreeMap, HashMap};
use std::io::Cursor;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;

use gap_core::{load_facilities_reader, AnalysisConfig, Facility, FacilityCategory, Region};
use gap_engine::{
    district_label, estimate_population, AnalysisObserver, AnalysisReport, CachedSource,
    DistrictAggregator, DistrictBuildings, FacilitySource, MemoryCache, NameFilter,
    RegionReport, UpstreamError, population::DEFAULT_CITY_POPULATION,
};
use gap_output::{CsvWriter, JsonWriter, ReportObserver, ReportWriter};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/bishkek";
const RUN_TIMEOUT: Duration = Duration::from_secs(60);

const DISTRICTS: [&str; 4] = [
    "Leninsky district, Bishkek, Kyrgyzstan",
    "Oktyabrsky district, Bishkek, Kyrgyzstan",
    "Pervomaisky district, Bishkek, Kyrgyzstan",
    "Sverdlovsky district, Bishkek, Kyrgyzstan",
];

/// Approximate district bounding boxes: (label, min_lat, max_lat, min_lon, max_lon).
const BOUNDARIES: [(&str, f64, f64, f64, f64); 4] = [
    ("Leninsky district",    42.800, 42.880, 74.500, 74.600),
    ("Oktyabrsky district",  42.790, 42.870, 74.600, 74.700),
    ("Pervomaisky district", 42.860, 42.920, 74.530, 74.610),
    ("Sverdlovsky district", 42.850, 42.920, 74.610, 74.700),
];

/// Simulated provider outage.
const UNAVAILABLE: &str = "Sverdlovsky district";

/// Residential building counts used for the population split.
const BUILDINGS: [(&str, Option<u64>); 4] = [
    ("Leninsky district",    Some(14_200)),
    ("Oktyabrsky district",  Some(11_800)),
    ("Pervomaisky district", Some(9_600)),
    ("Sverdlovsky district", None),
];

// ── Facility CSV ──────────────────────────────────────────────────────────────

// Autoschools and music/sport schools are dropped by the general-schools
// name filter; the clinic by the category.
const FACILITIES_CSV: &str = "\
district,category,name,lat,lon\n\
Leninsky district,school,Средняя школа №12,42.8620,74.5530\n\
Leninsky district,school,Школа-гимназия №29,42.8410,74.5780\n\
Leninsky district,school,Автошкола Драйв,42.8200,74.5200\n\
Leninsky district,school,Средняя школа №54,42.8150,74.5650\n\
Leninsky district,clinic,ЦСМ №6,42.8550,74.5410\n\
Oktyabrsky district,school,Средняя школа №5,42.8401,74.6102\n\
Oktyabrsky district,school,Детская музыкальная школа №3,42.8000,74.6800\n\
Oktyabrsky district,school,Школа-лицей №67,42.8250,74.6450\n\
Oktyabrsky district,clinic,,42.8355,74.6251\n\
Pervomaisky district,school,Средняя школа №1,42.8780,74.5900\n\
Pervomaisky district,school,Спортивная школа Динамо,42.9000,74.5500\n\
Sverdlovsky district,school,Средняя школа №61,42.8800,74.6500\n\
";

// ── Facility source ───────────────────────────────────────────────────────────

/// In-memory stand-in for a geocoder plus POI provider.
struct DemoSource {
    boundaries: HashMap<&'static str, Region>,
    facilities: BTreeMap<String, Vec<Facility>>,
}

impl DemoSource {
    fn new() -> Result<Self> {
        let mut boundaries = HashMap::new();
        for (label, min_lat, max_lat, min_lon, max_lon) in BOUNDARIES {
            boundaries.insert(label, Region::new(min_lat, max_lat, min_lon, max_lon)?);
        }
        let facilities = load_facilities_reader(Cursor::new(FACILITIES_CSV))?;
        Ok(Self { boundaries, facilities })
    }

    fn check_available(label: &str) -> Result<(), UpstreamError> {
        if label == UNAVAILABLE {
            return Err(UpstreamError::new(format!("{label}: POI provider timed out after 25 s")));
        }
        Ok(())
    }
}

impl FacilitySource for DemoSource {
    fn boundary(&self, district: &str) -> Result<Region, UpstreamError> {
        let label = district_label(district);
        Self::check_available(label)?;
        self.boundaries
            .get(label)
            .copied()
            .ok_or_else(|| UpstreamError::new(format!("geocoder has no boundary for {label}")))
    }

    fn facilities(
        &self,
        district: &str,
        category: Option<&FacilityCategory>,
    ) -> Result<Vec<Facility>, UpstreamError> {
        let label = district_label(district);
        Self::check_available(label)?;
        Ok(self
            .facilities
            .get(label)
            .map(|all| {
                all.iter()
                    .filter(|f| category.is_none_or(|c| *c == f.category))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

// ── Observer wrapper to print progress ───────────────────────────────────────

struct ProgressObserver<W: ReportWriter> {
    inner: ReportObserver<W>,
    done:  usize,
    total: usize,
}

impl<W: ReportWriter> AnalysisObserver for ProgressObserver<W> {
    fn on_run_start(&mut self, districts: usize) {
        self.total = districts;
        self.inner.on_run_start(districts);
    }

    fn on_region_end(&mut self, district: &str, report: &RegionReport) {
        self.done += 1;
        match &report.error {
            Some(e) => println!("  [{}/{}] {district}: FAILED ({e})", self.done, self.total),
            None => println!(
                "  [{}/{}] {district}: {} gap zones",
                self.done, self.total, report.gap_count
            ),
        }
        self.inner.on_region_end(district, report);
    }

    fn on_run_end(&mut self, report: &AnalysisReport) {
        self.inner.on_run_end(report);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("=== bishkek — school coverage gaps ===");

    // 1. Configuration: 800 m walking radius, 300 m grid, 1 km separation.
    let config = AnalysisConfig::default();
    println!(
        "Radius: {} m  |  Grid step: {} m  |  Separation: {} m  |  Mode: {}",
        config.service_radius_m, config.grid_step_m, config.min_separation_m, config.travel_mode
    );
    println!();

    // 2. Source behind an in-memory cache.
    let source = CachedSource::new(DemoSource::new()?, MemoryCache::new());
    let aggregator = DistrictAggregator::new(source, config)
        .filter(NameFilter::general_schools())
        .timeout(RUN_TIMEOUT);

    // 3. Output: CSV and JSON from one run.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let dir = Path::new(OUTPUT_DIR);
    let writer = (CsvWriter::new(dir)?, JsonWriter::new(dir));
    let mut obs = ProgressObserver { inner: ReportObserver::new(writer), done: 0, total: 0 };

    // 4. Run.
    let t0 = Instant::now();
    let report = aggregator.run_with_observer(&DISTRICTS, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }
    log::info!("{} facility lists cached", aggregator.source().cache().len());

    // 5. Summary.
    println!();
    println!("Analysis complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "{:<22} {:>6} {:>10} {:>8} {:>10}",
        "District", "Gaps", "Facilities", "Grid", "Candidates"
    );
    println!("{}", "-".repeat(60));
    for (name, r) in &report.regions {
        if r.is_failed() {
            println!("{name:<22} {:>6}", "—");
            continue;
        }
        println!(
            "{:<22} {:>6} {:>10} {:>8} {:>10}",
            name, r.gap_count, r.facility_count, r.grid_points, r.gap_candidates
        );
    }
    println!("Total gap zones: {}", report.total_gaps());
    println!();

    // 6. Worst-served point per district.
    for (name, r) in &report.regions {
        if let Some(z) = r.gap_zones.first() {
            match (z.distance_to_nearest_m, z.estimated_time_min) {
                (Some(d), Some(t)) => println!(
                    "{name}: worst at ({:.4}, {:.4}), {:.0} m / {:.1} min to nearest school",
                    z.latitude, z.longitude, d, t
                ),
                _ => println!("{name}: no schools at all, centre ({:.4}, {:.4})", z.latitude, z.longitude),
            }
        }
    }
    println!();

    // 7. Population split by residential buildings.
    let buildings: Vec<DistrictBuildings> = BUILDINGS
        .iter()
        .map(|&(district, count)| DistrictBuildings {
            district:  district.to_owned(),
            buildings: count.ok_or_else(|| UpstreamError::new("building count unavailable")),
        })
        .collect();
    println!("{:<22} {:>10} {:>12}", "District", "Buildings", "Population");
    println!("{}", "-".repeat(46));
    for e in estimate_population(&buildings, DEFAULT_CITY_POPULATION) {
        let count = e.building_count.map_or_else(|| "—".to_owned(), |n| n.to_string());
        println!("{:<22} {:>10} {:>12}", e.district, count, e.estimated_population);
    }

    println!();
    println!("Output written to {OUTPUT_DIR}/");
    Ok(())
}
