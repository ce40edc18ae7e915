//! Domain types for the route planner.
//!
//! This module contains the core model types: coordinates, station
//! candidates, legs and route variants. Types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod coordinate;
mod error;
mod leg;
mod station;
mod variant;

pub use coordinate::{Coordinate, EARTH_RADIUS_METERS};
pub use error::DomainError;
pub use leg::{Endpoint, Hop, Leg, TransitSegment, TravelMode, UnknownTravelMode};
pub use station::StationCandidate;
pub use variant::RouteVariant;
