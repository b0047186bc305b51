//! Spatial-subsystem error type.

use thiserror::Error;

use gap_core::CoreError;

/// Errors produced by `gap-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("cannot build a spatial index over zero facilities")]
    EmptyFacilitySet,

    #[error("grid step must be a positive finite number of metres, got {0}")]
    InvalidStep(f64),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
