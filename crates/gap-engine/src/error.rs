//! Engine error types.
//!
//! Configuration errors are fatal and surface from
//! [`DistrictAggregator::run`][crate::DistrictAggregator::run].  Every other
//! variant is caught per district and recorded as that district's error
//! marker.

use thiserror::Error;

use gap_core::CoreError;
use gap_spatial::SpatialError;

/// A collaborator failed to supply boundary or facility data.
///
/// Source adapters convert their transport errors into this message-carrying
/// type so the engine stays independent of any HTTP or geocoding client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UpstreamError {
    message: String,
}

impl UpstreamError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("no facilities of the analysed category in this region")]
    EmptyFacilitySet,

    #[error("upstream data error: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("analysis deadline exceeded before this region started")]
    Timeout,

    #[error("spatial error: {0}")]
    Spatial(SpatialError),

    #[error(transparent)]
    Core(CoreError),
}

impl From<CoreError> for EngineError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidConfiguration(msg) => EngineError::InvalidConfiguration(msg),
            other => EngineError::Core(other),
        }
    }
}

impl From<SpatialError> for EngineError {
    fn from(e: SpatialError) -> Self {
        match e {
            SpatialError::EmptyFacilitySet => EngineError::EmptyFacilitySet,
            SpatialError::InvalidStep(step) => EngineError::InvalidConfiguration(format!(
                "grid_step_m must be a positive finite number of metres, got {step}"
            )),
            SpatialError::Core(core) => core.into(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
