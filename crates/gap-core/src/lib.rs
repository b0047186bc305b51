//! `gap-core` — foundational types for the coverage-gap analysis engine.
//!
//! This crate is a dependency of every other `gap-*` crate.  It intentionally
//! has no `gap-*` dependencies and minimal external ones (`thiserror`, plus
//! `csv`/`serde` for the facility loader).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`geo`]       | `Coordinate`, `GridPoint`, degree-length constants      |
//! | [`region`]    | `Region` bounding box                                   |
//! | [`facility`]  | `Facility`, `FacilityCategory`                          |
//! | [`ids`]       | `FacilityId`                                            |
//! | [`transport`] | `TravelMode` and assumed speeds                         |
//! | [`config`]    | `AnalysisConfig` and its policy enums                   |
//! | [`loader`]    | `load_facilities_csv`, `load_facilities_reader`         |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod facility;
pub mod geo;
pub mod ids;
pub mod loader;
pub mod region;
pub mod transport;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AnalysisConfig, DistanceFormula, EmptyRegionPolicy, ReductionPolicy};
pub use error::{CoreError, CoreResult};
pub use facility::{Facility, FacilityCategory};
pub use geo::{Coordinate, GridPoint, METERS_PER_DEG_LAT};
pub use ids::FacilityId;
pub use loader::{load_facilities_csv, load_facilities_reader};
pub use region::Region;
pub use transport::TravelMode;
