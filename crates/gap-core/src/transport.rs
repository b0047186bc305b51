//! Travel mode used to turn a ground distance into an estimated travel time.

/// How a resident is assumed to reach a facility.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum TravelMode {
    /// On foot (default).
    #[default]
    Walk,
    /// Bicycle.
    Bike,
    /// Private vehicle on city streets.
    Car,
}

impl TravelMode {
    /// Assumed average speed in metres per minute.
    ///
    /// Walk is 90 m/min (5.4 km/h); bike 15 km/h; car 30 km/h urban average.
    #[inline]
    pub fn speed_m_per_min(self) -> f64 {
        match self {
            TravelMode::Walk => 90.0,
            TravelMode::Bike => 250.0,
            TravelMode::Car  => 500.0,
        }
    }

    /// Minutes needed to cover `distance_m`.
    #[inline]
    pub fn travel_time_min(self, distance_m: f64) -> f64 {
        distance_m / self.speed_m_per_min()
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Walk => "walk",
            TravelMode::Bike => "bike",
            TravelMode::Car  => "car",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
