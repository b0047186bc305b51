//! Facility identifier.

use std::fmt;

/// Position of a facility in the slice a `SpatialIndex` was built from.
///
/// The inner integer is `pub`; prefer [`index`](Self::index) when using it
/// to index a `Vec`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FacilityId(pub u32);

impl FacilityId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FacilityId({})", self.0)
    }
}
