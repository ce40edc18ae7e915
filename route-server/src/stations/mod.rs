//! Nearest-station lookup.
//!
//! Asks a places provider for metro stations around a point and ranks them
//! by straight-line (haversine) distance.

mod finder;

pub use finder::{DEFAULT_SEARCH_RADIUS_METERS, DEFAULT_STATION_CATEGORY, StationFinder, nearest};
