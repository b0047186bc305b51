//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The error type for `gap-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("coordinate ({lat}, {lon}) is outside the WGS-84 range")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("invalid region: {0}")]
    InvalidRegion(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `gap-core`.
pub type CoreResult<T> = Result<T, CoreError>;
