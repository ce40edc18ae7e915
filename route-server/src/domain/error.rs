//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from provider/IO errors.

use super::TravelMode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Latitude or longitude is NaN or infinite
    #[error("invalid coordinate: ({lat}, {lng})")]
    InvalidCoordinate { lat: f64, lng: f64 },

    /// A leg was placed in a variant slot that does not accept its mode
    #[error("{slot} leg cannot use mode {mode}")]
    LegModeMismatch { slot: &'static str, mode: TravelMode },
}
