//! Station candidates returned by the nearest-station lookup.

use serde::Serialize;

use super::Coordinate;

/// A transit station near a query point.
///
/// Produced by [`crate::stations::StationFinder`] and only meaningful for
/// the request that produced it: `distance_meters` is measured from that
/// request's query coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationCandidate {
    name: String,
    place_id: Option<String>,
    vicinity: Option<String>,
    location: Coordinate,
    distance_meters: u32,
}

impl StationCandidate {
    /// Create a candidate located `distance_meters` (rounded) from the query point.
    pub fn new(
        name: impl Into<String>,
        place_id: Option<String>,
        vicinity: Option<String>,
        location: Coordinate,
        distance_meters: u32,
    ) -> Self {
        Self {
            name: name.into(),
            place_id,
            vicinity,
            location,
            distance_meters,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Provider-stable identifier, if the provider supplied one.
    pub fn place_id(&self) -> Option<&str> {
        self.place_id.as_deref()
    }

    /// Approximate address text.
    pub fn vicinity(&self) -> Option<&str> {
        self.vicinity.as_deref()
    }

    pub fn location(&self) -> Coordinate {
        self.location
    }

    /// Straight-line distance from the query point, in whole meters.
    pub fn distance_meters(&self) -> u32 {
        self.distance_meters
    }

    /// Key used in variant labels: the stable id, or the name without one.
    pub fn label_key(&self) -> &str {
        self.place_id().unwrap_or(&self.name)
    }
}
