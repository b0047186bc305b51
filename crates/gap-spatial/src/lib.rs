//! `gap-spatial` — facility indexing, candidate lattices, and ground distance.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`index`]    | `SpatialIndex` (R-tree over unit-sphere ECEF points)         |
//! | [`grid`]     | `GridGenerator`, lazy `GridPoints` iterator                  |
//! | [`distance`] | `DistanceModel` trait, `Haversine`, `Vincenty`, `nearest_ground` |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                           |
//!
//! # Two distances
//!
//! The index ranks facilities by a cheap planar distance.  That number is a
//! retrieval heuristic only.  Every distance that is compared against a
//! threshold or reported leaves this crate through a [`DistanceModel`].

pub mod distance;
pub mod error;
pub mod grid;
pub mod index;


pub use distance::{nearest_ground, DistanceModel, GroundNearest, Haversine, Vincenty};
pub use error::{SpatialError, SpatialResult};
pub use grid::{GridGenerator, GridPoints};
pub use index::{Nearest, SpatialIndex};
