//! Google Maps Platform response DTOs.
//!
//! These types map onto the JSON bodies of the Directions, Places Nearby
//! Search and Geocoding web services. Google omits fields freely, so every
//! struct defaults what is missing instead of failing the whole response.

use serde::Deserialize;

/// Response from the Directions API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DirectionsResponse {
    /// `OK`, `ZERO_RESULTS`, `NOT_FOUND`, `REQUEST_DENIED`, ...
    pub status: String,
    pub error_message: Option<String>,
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DirectionsRoute {
    pub summary: Option<String>,
    pub overview_polyline: Option<EncodedPolyline>,
    pub legs: Vec<DirectionsLeg>,
    /// Only present for transit routes where every agency publishes fares.
    pub fare: Option<Fare>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DirectionsLeg {
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
    pub start_address: Option<String>,
    pub end_address: Option<String>,
    pub steps: Vec<DirectionsStep>,
    pub fare: Option<Fare>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DirectionsStep {
    /// Instruction with inline HTML markup, e.g. `Walk to <b>Rajiv Chowk</b>`.
    pub html_instructions: Option<String>,
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
    /// `WALKING`, `DRIVING` or `TRANSIT`.
    pub travel_mode: Option<String>,
    pub polyline: Option<EncodedPolyline>,
    pub transit_details: Option<TransitDetails>,
}

/// A quantity reported both as display text and as a raw value
/// (meters for distances, seconds for durations).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextValue {
    pub text: Option<String>,
    pub value: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EncodedPolyline {
    pub points: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Fare {
    pub currency: Option<String>,
    pub value: Option<f64>,
    /// Display text, e.g. `₹30.00`.
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransitDetails {
    pub departure_stop: Option<TransitStop>,
    pub arrival_stop: Option<TransitStop>,
    pub departure_time: Option<TransitTime>,
    pub arrival_time: Option<TransitTime>,
    pub headsign: Option<String>,
    pub num_stops: Option<u32>,
    pub line: Option<TransitLine>,
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransitStop {
    pub name: Option<String>,
    pub stop_id: Option<String>,
    pub platform: Option<String>,
    pub location: Option<LatLng>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransitTime {
    /// Local display time, e.g. `10:04 AM`.
    pub text: Option<String>,
    pub time_zone: Option<String>,
    /// Seconds since the Unix epoch.
    pub value: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransitLine {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub trip_short_name: Option<String>,
    pub color: Option<String>,
    pub vehicle: Option<TransitVehicle>,
    pub agencies: Vec<TransitAgency>,
    /// Not part of the documented schema; some feeds include it.
    pub stops: Vec<LineStop>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransitVehicle {
    pub name: Option<String>,
    /// `SUBWAY`, `HEAVY_RAIL`, `METRO_RAIL`, `BUS`, ...
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransitAgency {
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LineStop {
    pub name: Option<String>,
    pub stop_id: Option<String>,
}

/// Response from the Places Nearby Search API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlacesResponse {
    pub status: String,
    pub error_message: Option<String>,
    pub results: Vec<PlaceResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaceResult {
    pub name: Option<String>,
    pub place_id: Option<String>,
    pub vicinity: Option<String>,
    pub geometry: Option<Geometry>,
}

/// Response from the Geocoding API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeocodeResponse {
    pub status: String,
    pub error_message: Option<String>,
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeocodeResult {
    pub formatted_address: Option<String>,
    pub place_id: Option<String>,
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Geometry {
    pub location: Option<LatLng>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LatLng {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}
