//! Facility records as supplied by an upstream data source.

use std::fmt;
use std::str::FromStr;

use crate::Coordinate;

/// What kind of public facility a record describes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FacilityCategory {
    School,
    Clinic,
    /// Any other amenity tag, stored lower-case.
    Other(String),
}

impl FacilityCategory {
    /// Label used in CSV input/output and cache keys.
    pub fn as_str(&self) -> &str {
        match self {
            FacilityCategory::School   => "school",
            FacilityCategory::Clinic   => "clinic",
            FacilityCategory::Other(s) => s.as_str(),
        }
    }
}

impl FromStr for FacilityCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Ok(match lower.as_str() {
            "school" => FacilityCategory::School,
            "clinic" => FacilityCategory::Clinic,
            _        => FacilityCategory::Other(lower),
        })
    }
}

impl fmt::Display for FacilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A facility location.  Immutable once loaded for an analysis run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facility {
    pub position: Coordinate,
    pub name:     Option<String>,
    pub category: FacilityCategory,
}

impl Facility {
    pub fn new(position: Coordinate, category: FacilityCategory) -> Self {
        Self { position, name: None, category }
    }

    pub fn named(position: Coordinate, category: FacilityCategory, name: impl Into<String>) -> Self {
        Self { position, name: Some(name.into()), category }
    }
}
