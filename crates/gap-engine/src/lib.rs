//! `gap-engine` — coverage-gap analysis pipeline.
//!
//! # Pipeline
//!
//! ```text
//! per district:
//!   ① Fetch     — boundary + facilities from the FacilitySource port
//!                 (optionally through a FacilityCache), name-filtered.
//!   ② Index     — SpatialIndex over the facility positions.
//!   ③ Grid      — GridGenerator lattice over the district's bounding box.
//!   ④ Classify  — GapClassifier: ground distance to the nearest facility;
//!                 points beyond the service radius become GapCandidates
//!                 (parallel with the `parallel` feature).
//!   ⑤ Reduce    — CoverageReducer: worst-served first, clear everything
//!                 within the minimum separation, repeat.
//! merge:
//!   DistrictAggregator collects one RegionReport per district; a failing
//!   district carries an error marker and never aborts the others.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Classifies grid points and runs districts on Rayon.       |
//! | `serde`    | Derives `Serialize`/`Deserialize` on report types.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gap_core::AnalysisConfig;
//! use gap_engine::DistrictAggregator;
//!
//! let config = AnalysisConfig::new(800.0, 300.0, 1_000.0);
//! let report = DistrictAggregator::new(source, config)
//!     .filter(NameFilter::general_schools())
//!     .run(&["Oktyabrsky district, Bishkek"])?;
//! ```

pub mod aggregator;
pub mod classifier;
pub mod error;
pub mod filter;
pub mod observer;
pub mod pipeline;
pub mod population;
pub mod reducer;
pub mod report;
pub mod source;


pub use aggregator::DistrictAggregator;
pub use classifier::{GapCandidate, GapClassifier};
pub use error::{EngineError, EngineResult, UpstreamError};
pub use filter::NameFilter;
pub use observer::{AnalysisObserver, NoopObserver};
pub use pipeline::{analyze_region, RegionAnalysis};
pub use population::{estimate_population, DistrictBuildings, PopulationEstimate};
pub use reducer::{CoverageReducer, GapZone};
pub use report::{AnalysisReport, RegionReport, RunParameters};
pub use source::{district_label, CacheKey, CachedSource, FacilityCache, FacilitySource, MemoryCache};
