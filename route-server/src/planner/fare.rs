//! Fare aggregation.
//!
//! A variant's cost is the transit fare as quoted by the provider plus a
//! metered auto-rickshaw fare for every drive leg.

use crate::domain::{Leg, TravelMode};

/// Parse a free-form fare string such as `₹25.00`.
///
/// Keeps only ASCII digits and `.`, then parses what remains. Absent,
/// empty and unparseable input all count as zero.
pub fn parse_fare(text: Option<&str>) -> f64 {
    let Some(text) = text else {
        return 0.0;
    };
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|fare| fare.is_finite() && *fare >= 0.0)
        .unwrap_or(0.0)
}

/// Metered fare for a drive of `distance_meters`, rounded to whole rupees.
pub fn drive_fare(distance_meters: u32, rate_per_km: f64) -> f64 {
    (f64::from(distance_meters) / 1000.0 * rate_per_km).round()
}

/// Total cost of an access/transit/egress triple.
pub fn total_cost(access: &Leg, transit: &Leg, egress: &Leg, rate_per_km: f64) -> f64 {
    let metered: f64 = [access, egress]
        .iter()
        .filter(|leg| leg.mode() == TravelMode::Drive)
        .map(|leg| drive_fare(leg.distance_meters(), rate_per_km))
        .sum();

    parse_fare(transit.fare_text()) + metered
}
