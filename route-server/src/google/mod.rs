//! Google Maps Platform client.
//!
//! This module provides an HTTP client for the Google Maps web services the
//! planner depends on:
//! - Directions, for single-mode walk, drive and rail transit legs
//! - Places Nearby Search, for metro stations around a point
//! - Geocoding, for free-text addresses
//!
//! Google reports most failures in a `status` field of an HTTP 200 body, so
//! the status is checked after decoding rather than from the HTTP code.

mod client;
mod convert;
mod error;
mod types;

pub use client::{GoogleMapsClient, MapsConfig};
pub use convert::strip_html;
pub use error::MapsError;
