//! Proportional population estimate from residential building counts.
//!
//! A city's total population is split across districts in proportion to the
//! number of residential buildings each one has.  Crude, but it needs only
//! data the facility provider already serves, and it is good enough to rank
//! districts when weighing gap zones against each other.

use crate::UpstreamError;

/// Default total for Bishkek.
pub const DEFAULT_CITY_POPULATION: u64 = 1_300_000;

/// Residential building count for one district, or why it is missing.
#[derive(Clone, Debug, PartialEq)]
pub struct DistrictBuildings {
    pub district:  String,
    pub buildings: Result<u64, UpstreamError>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationEstimate {
    pub district:             String,
    pub building_count:       Option<u64>,
    pub estimated_population: u64,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub error:                Option<String>,
}

/// Distribute `total_population` over `districts` by building share.
///
/// Districts whose count is an error keep the error and get 0.  If no
/// district has a positive count, every estimate is 0.  Shares are floored,
/// so the estimates may sum to slightly less than the total.
pub fn estimate_population(
    districts:        &[DistrictBuildings],
    total_population: u64,
) -> Vec<PopulationEstimate> {
    let total_buildings: u64 = districts
        .iter()
        .filter_map(|d| d.buildings.as_ref().ok())
        .sum();

    districts
        .iter()
        .map(|d| match &d.buildings {
            Ok(n) => PopulationEstimate {
                district:             d.district.clone(),
                building_count:       Some(*n),
                estimated_population: share(*n, total_buildings, total_population),
                error:                None,
            },
            Err(e) => PopulationEstimate {
                district:             d.district.clone(),
                building_count:       None,
                estimated_population: 0,
                error:                Some(e.to_string()),
            },
        })
        .collect()
}

fn share(part: u64, whole: u64, total: u64) -> u64 {
    if whole == 0 {
        return 0;
    }
    // u128 keeps part * total exact for any realistic city.
    (part as u128 * total as u128 / whole as u128) as u64
}
