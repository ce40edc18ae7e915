//! Geographic coordinates and great-circle distance.

use std::fmt;

use serde::Serialize;

use super::DomainError;

/// Mean Earth radius used by the haversine formula, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A WGS84 latitude/longitude pair in degrees.
///
/// The only validation is that both components are finite. Range checks
/// are left to the mapping provider.
///
/// # Examples
///
/// ```
/// use route_server::domain::Coordinate;
///
/// let cp = Coordinate::new(28.6315, 77.2167).unwrap();
/// assert_eq!(cp.to_string(), "28.6315,77.2167");
///
/// assert!(Coordinate::new(f64::NAN, 77.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting NaN and infinite components.
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(DomainError::InvalidCoordinate { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Build a coordinate from optional components.
    ///
    /// Returns `None` when either component is missing or not finite.
    pub fn from_parts(lat: Option<f64>, lng: Option<f64>) -> Option<Self> {
        Self::new(lat?, lng?).ok()
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance to `other` in meters (haversine formula).
    pub fn haversine_meters(&self, other: &Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos()
                * other.lat.to_radians().cos()
                * (d_lng / 2.0).sin().powi(2);
        // Rounding can push near-antipodal inputs just past 1.
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_METERS * c
    }
}

impl fmt::Display for Coordinate {
    /// Formats as `lat,lng`, the form the mapping provider expects.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
        assert!(Coordinate::new(f64::NEG_INFINITY, f64::NAN).is_err());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn from_parts_requires_both() {
        assert!(Coordinate::from_parts(Some(1.0), None).is_none());
        assert!(Coordinate::from_parts(None, Some(1.0)).is_none());
        assert!(Coordinate::from_parts(Some(f64::NAN), Some(1.0)).is_none());
        assert_eq!(
            Coordinate::from_parts(Some(1.0), Some(2.0)),
            Some(coord(1.0, 2.0))
        );
    }

    #[test]
    fn zero_distance_to_self() {
        let p = coord(28.6315, 77.2167);
        assert_eq!(p.haversine_meters(&p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // One degree along a meridian is R * pi / 180.
        let d = coord(0.0, 0.0).haversine_meters(&coord(1.0, 0.0));
        let expected = EARTH_RADIUS_METERS * std::f64::consts::PI / 180.0;
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn delhi_landmarks() {
        // Rajiv Chowk to Kashmere Gate, roughly 4 km apart.
        let rajiv_chowk = coord(28.6328, 77.2197);
        let kashmere_gate = coord(28.6675, 77.2282);

        let d = rajiv_chowk.haversine_meters(&kashmere_gate);
        assert!((d - 3_950.0).abs() < 300.0, "got {d}");
    }

    #[test]
    fn display_format() {
        assert_eq!(coord(28.5, -77.25).to_string(), "28.5,-77.25");
    }
}
