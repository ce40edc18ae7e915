//! Route variants.
//!
//! A `RouteVariant` is one complete journey candidate: an access leg from
//! the trip origin to a station, a transit leg between two stations, and an
//! egress leg from the second station to the trip destination.

use super::{DomainError, Leg, TravelMode};

/// A complete three-leg journey candidate.
///
/// # Invariants
///
/// - Exactly three legs, always in `[access, transit, egress]` order
/// - Access and egress legs are `Walk` or `Drive`
/// - The transit leg is `Transit`
/// - Totals are computed once at construction
#[derive(Debug, Clone, PartialEq)]
pub struct RouteVariant {
    id: String,
    access: Leg,
    transit: Leg,
    egress: Leg,
    total_duration_seconds: u64,
    total_distance_meters: u64,
    total_cost: f64,
    summary: String,
}

impl RouteVariant {
    /// Assemble a variant from three resolved legs.
    ///
    /// Duration and distance are summed across all legs. `total_cost` is
    /// supplied by the caller's fare policy.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a leg's mode does not fit its slot.
    pub fn new(
        id: impl Into<String>,
        access: Leg,
        transit: Leg,
        egress: Leg,
        total_cost: f64,
    ) -> Result<Self, DomainError> {
        if !access.mode().is_access_mode() {
            return Err(DomainError::LegModeMismatch {
                slot: "access",
                mode: access.mode(),
            });
        }
        if transit.mode() != TravelMode::Transit {
            return Err(DomainError::LegModeMismatch {
                slot: "transit",
                mode: transit.mode(),
            });
        }
        if !egress.mode().is_access_mode() {
            return Err(DomainError::LegModeMismatch {
                slot: "egress",
                mode: egress.mode(),
            });
        }

        let legs = [&access, &transit, &egress];
        let total_duration_seconds = legs.iter().map(|l| u64::from(l.duration_seconds())).sum();
        let total_distance_meters = legs.iter().map(|l| u64::from(l.distance_meters())).sum();
        let summary = summarize(&access, &transit, &egress);

        Ok(Self {
            id: id.into(),
            access,
            transit,
            egress,
            total_duration_seconds,
            total_distance_meters,
            total_cost,
            summary,
        })
    }

    /// Generated label, unique within one computation.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Origin → first station leg.
    pub fn access(&self) -> &Leg {
        &self.access
    }

    /// Station → station leg.
    pub fn transit(&self) -> &Leg {
        &self.transit
    }

    /// Last station → destination leg.
    pub fn egress(&self) -> &Leg {
        &self.egress
    }

    /// All three legs in travel order.
    pub fn legs(&self) -> [&Leg; 3] {
        [&self.access, &self.transit, &self.egress]
    }

    pub fn total_duration_seconds(&self) -> u64 {
        self.total_duration_seconds
    }

    pub fn total_distance_meters(&self) -> u64 {
        self.total_distance_meters
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Short human summary, e.g. `Walk → METRO (Blue Line) → Auto`.
    pub fn summary(&self) -> &str {
        &self.summary
    }
}

fn summarize(access: &Leg, transit: &Leg, egress: &Leg) -> String {
    let label = transit.mode().summary_label();
    let metro = match transit.first_line_name() {
        Some(line) => format!("{label} ({line})"),
        None => label.to_string(),
    };
    format!(
        "{} → {} → {}",
        access.mode().summary_label(),
        metro,
        egress.mode().summary_label()
    )
}
