//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, Leg, RouteVariant, StationCandidate, TransitSegment};

/// Default number of stations returned by the nearest-station endpoints.
pub const DEFAULT_TOP_STATIONS: usize = 3;

/// Upper bound on `top` for the nearest-station endpoints.
pub const MAX_TOP_STATIONS: usize = 20;

/// Request to plan routes between two addresses.
#[derive(Debug, Deserialize)]
pub struct RoutesByAddressRequest {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Request to plan routes between two coordinates.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutesByCoordinatesRequest {
    pub from_lat: f64,
    pub from_lng: f64,
    pub to_lat: f64,
    pub to_lng: f64,

    /// Display label for the origin (defaults to `lat,lng`)
    pub from_name: Option<String>,

    /// Display label for the destination (defaults to `lat,lng`)
    pub to_name: Option<String>,
}

/// Request to geocode an address.
#[derive(Debug, Deserialize)]
pub struct GeocodeRequest {
    pub address: Option<String>,
}

/// Request for the stations nearest a coordinate.
#[derive(Debug, Deserialize)]
pub struct NearestStationsRequest {
    pub lat: f64,
    pub lng: f64,
    pub top: Option<usize>,
}

/// Request for the stations nearest an address.
#[derive(Debug, Deserialize)]
pub struct NearestStationsByTextRequest {
    pub address: Option<String>,
    pub top: Option<usize>,
}

/// Request for a single raw directions leg.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugDirectionsRequest {
    pub from_lat: f64,
    pub from_lng: f64,
    pub to_lat: f64,
    pub to_lng: f64,

    /// `walking`, `driving` or `transit` (defaults to walking)
    pub mode: Option<String>,

    /// Departure time in epoch seconds, for transit
    pub departure_time: Option<i64>,
}

/// Response listing ranked route variants.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutesResponse {
    /// Always `ok`; errors use [`StatusResponse`]
    pub status: &'static str,
    pub from: String,
    pub to: String,
    pub total_variants: usize,
    pub routes: Vec<RouteVariantDto>,
}

impl RoutesResponse {
    /// Build a successful response from ranked variants.
    pub fn new(from: String, to: String, variants: &[RouteVariant]) -> Self {
        let routes: Vec<RouteVariantDto> = variants.iter().map(RouteVariantDto::from_domain).collect();
        Self {
            status: "ok",
            from,
            to,
            total_variants: routes.len(),
            routes,
        }
    }
}

/// Status-plus-message response for rejected route requests.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: String,
}

/// One ranked route variant.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteVariantDto {
    pub id: String,

    /// Short summary, e.g. `Walk → METRO (Blue Line) → Auto`
    pub summary_text: String,
    pub total_duration_seconds: u64,
    pub total_distance_meters: u64,
    pub total_cost_rs: f64,

    /// Access, transit and egress legs, in that order
    pub legs: Vec<RouteLegDto>,
}

/// One leg of a route variant.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLegDto {
    /// `walking`, `driving` or `transit`
    pub mode: &'static str,
    pub from_name: String,
    pub to_name: String,
    pub duration_seconds: u32,
    pub distance_meters: u32,
    pub polyline: Option<String>,
    pub steps: Vec<String>,
    pub fare_text: Option<String>,
    pub transit_segments: Vec<TransitSegmentDto>,
}

/// One vehicle ride within a transit leg.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitSegmentDto {
    pub line_name: Option<String>,
    pub vehicle: Option<String>,
    pub departure_stop: Option<String>,
    pub arrival_stop: Option<String>,
    pub headsign: Option<String>,
    pub num_stops: u32,
}

/// A station near a queried point.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    pub name: String,
    pub place_id: Option<String>,
    pub vicinity: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub distance_meters: u32,
}

/// A resolved coordinate.
#[derive(Debug, Serialize)]
pub struct LatLngDto {
    pub lat: f64,
    pub lng: f64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl RouteVariantDto {
    /// Create from a domain RouteVariant.
    pub fn from_domain(variant: &RouteVariant) -> Self {
        Self {
            id: variant.id().to_string(),
            summary_text: variant.summary().to_string(),
            total_duration_seconds: variant.total_duration_seconds(),
            total_distance_meters: variant.total_distance_meters(),
            total_cost_rs: variant.total_cost(),
            legs: variant.legs().into_iter().map(RouteLegDto::from_domain).collect(),
        }
    }
}

impl RouteLegDto {
    /// Create from a domain Leg.
    pub fn from_domain(leg: &Leg) -> Self {
        Self {
            mode: leg.mode().api_name(),
            from_name: leg.origin().name.clone(),
            to_name: leg.destination().name.clone(),
            duration_seconds: leg.duration_seconds(),
            distance_meters: leg.distance_meters(),
            polyline: leg.polyline().map(str::to_string),
            steps: leg.steps().to_vec(),
            fare_text: leg.fare_text().map(str::to_string),
            transit_segments: leg
                .transit_segments()
                .iter()
                .map(TransitSegmentDto::from_domain)
                .collect(),
        }
    }
}

impl TransitSegmentDto {
    /// Create from a domain TransitSegment.
    pub fn from_domain(segment: &TransitSegment) -> Self {
        Self {
            line_name: segment.line_name.clone(),
            vehicle: segment.vehicle.clone(),
            departure_stop: segment.departure_stop.clone(),
            arrival_stop: segment.arrival_stop.clone(),
            headsign: segment.headsign.clone(),
            num_stops: segment.num_stops,
        }
    }
}

impl StationDto {
    /// Create from a domain StationCandidate.
    pub fn from_domain(station: &StationCandidate) -> Self {
        Self {
            name: station.name().to_string(),
            place_id: station.place_id().map(str::to_string),
            vicinity: station.vicinity().map(str::to_string),
            lat: station.location().lat(),
            lng: station.location().lng(),
            distance_meters: station.distance_meters(),
        }
    }
}

impl From<Coordinate> for LatLngDto {
    fn from(at: Coordinate) -> Self {
        Self {
            lat: at.lat(),
            lng: at.lng(),
        }
    }
}

/// Clamp a requested station count into `1..=MAX_TOP_STATIONS`.
pub fn top_stations(requested: Option<usize>) -> usize {
    requested
        .unwrap_or(DEFAULT_TOP_STATIONS)
        .clamp(1, MAX_TOP_STATIONS)
}
