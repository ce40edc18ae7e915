//! Collaborator traits for the mapping provider.
//!
//! The planner only talks to the outside world through these traits, so it
//! can be driven by the Google Maps client in production and by
//! deterministic doubles in tests.

use std::future::Future;

use crate::domain::{Coordinate, Hop, Leg, TravelMode};

/// Why a collaborator produced no result.
///
/// Callers treat every variant the same way (the result is absent); the
/// reason exists for logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Network failure, timeout or rejected credentials
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Provider answered with a non-success status
    #[error("provider returned status {0}")]
    Status(String),

    /// Provider answered successfully but found nothing
    #[error("no result")]
    NoResult,

    /// Response body could not be interpreted
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// A raw nearby-place record, before any validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceCandidate {
    pub name: Option<String>,
    pub place_id: Option<String>,
    pub vicinity: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Fetches a single-mode leg between two points.
pub trait LegFetcher: Sync {
    /// Fetch the leg for `hop` travelled by `mode`.
    ///
    /// `departure_epoch_secs` is only meaningful for transit legs.
    fn fetch_leg(
        &self,
        hop: &Hop,
        mode: TravelMode,
        departure_epoch_secs: Option<i64>,
    ) -> impl Future<Output = Result<Leg, LookupError>> + Send;
}

/// Searches for places of a category around a point.
pub trait PlacesProvider: Sync {
    fn search_nearby(
        &self,
        center: Coordinate,
        radius_meters: u32,
        category: &str,
    ) -> impl Future<Output = Result<Vec<PlaceCandidate>, LookupError>> + Send;
}

/// Resolves free-text addresses to coordinates.
pub trait Geocoder: Sync {
    fn geocode(&self, address: &str)
    -> impl Future<Output = Result<Coordinate, LookupError>> + Send;
}
