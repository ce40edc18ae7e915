//! Single-mode journey legs.
//!
//! A `Leg` is one origin → destination hop travelled in a single mode,
//! as returned by a [`crate::provider::LegFetcher`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::Coordinate;

/// How a leg is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walk,
    Drive,
    Transit,
}

impl TravelMode {
    /// Short lowercase name (`walk`, `drive`, `transit`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Walk => "walk",
            TravelMode::Drive => "drive",
            TravelMode::Transit => "transit",
        }
    }

    /// Mode name understood by the directions API.
    pub fn api_name(&self) -> &'static str {
        match self {
            TravelMode::Walk => "walking",
            TravelMode::Drive => "driving",
            TravelMode::Transit => "transit",
        }
    }

    /// Label used in variant summaries.
    pub fn summary_label(&self) -> &'static str {
        match self {
            TravelMode::Walk => "Walk",
            TravelMode::Drive => "Auto",
            TravelMode::Transit => "METRO",
        }
    }

    /// Whether this mode can connect a trip endpoint to a station.
    pub fn is_access_mode(&self) -> bool {
        matches!(self, TravelMode::Walk | TravelMode::Drive)
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown travel mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown travel mode: {0}")]
pub struct UnknownTravelMode(String);

impl FromStr for TravelMode {
    type Err = UnknownTravelMode;

    /// Accepts both the short names and the directions API names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walk" | "walking" => Ok(TravelMode::Walk),
            "drive" | "driving" => Ok(TravelMode::Drive),
            "transit" => Ok(TravelMode::Transit),
            _ => Err(UnknownTravelMode(s.to_string())),
        }
    }
}

/// A named point a leg starts or ends at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Endpoint {
    pub name: String,
    pub location: Coordinate,
}

impl Endpoint {
    pub fn new(name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    /// Endpoint labelled with its own `lat,lng` text.
    pub fn unnamed(location: Coordinate) -> Self {
        Self::new(location.to_string(), location)
    }

    /// Endpoint with an optional label, falling back to `lat,lng`.
    pub fn with_optional_name(name: Option<String>, location: Coordinate) -> Self {
        match name.filter(|n| !n.trim().is_empty()) {
            Some(name) => Self::new(name, location),
            None => Self::unnamed(location),
        }
    }
}

/// A requested hop between two endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Hop {
    pub from: Endpoint,
    pub to: Endpoint,
}

impl Hop {
    pub fn new(from: Endpoint, to: Endpoint) -> Self {
        Self { from, to }
    }
}

/// One vehicle ride inside a transit leg.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitSegment {
    pub line_name: Option<String>,
    pub line_short_name: Option<String>,
    pub trip_short_name: Option<String>,
    /// Vehicle kind, e.g. `SUBWAY` or `HEAVY_RAIL`.
    pub vehicle: Option<String>,
    pub agency: Option<String>,
    pub departure_stop: Option<String>,
    pub arrival_stop: Option<String>,
    pub departure_time_text: Option<String>,
    pub arrival_time_text: Option<String>,
    pub headsign: Option<String>,
    pub num_stops: u32,
    /// Intermediate stop names, in travel order, when the provider lists them.
    pub stops: Vec<String>,
    pub platform: Option<String>,
    pub polyline: Option<String>,
}

/// A single-mode hop with its provider metadata.
///
/// Transit segments are only carried by `Transit` legs; they are dropped
/// for any other mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    mode: TravelMode,
    from: Endpoint,
    to: Endpoint,
    distance_meters: u32,
    duration_seconds: u32,
    polyline: Option<String>,
    steps: Vec<String>,
    fare_text: Option<String>,
    transit_segments: Vec<TransitSegment>,
}

impl Leg {
    /// Create a leg covering `hop` with the given totals.
    pub fn new(mode: TravelMode, hop: Hop, distance_meters: u32, duration_seconds: u32) -> Self {
        Self {
            mode,
            from: hop.from,
            to: hop.to,
            distance_meters,
            duration_seconds,
            polyline: None,
            steps: Vec::new(),
            fare_text: None,
            transit_segments: Vec::new(),
        }
    }

    /// Attach the encoded path geometry.
    pub fn with_polyline(mut self, polyline: Option<String>) -> Self {
        self.polyline = polyline;
        self
    }

    /// Attach textual step descriptions.
    pub fn with_steps(mut self, steps: Vec<String>) -> Self {
        self.steps = steps;
        self
    }

    /// Attach the fare display text.
    pub fn with_fare_text(mut self, fare_text: Option<String>) -> Self {
        self.fare_text = fare_text;
        self
    }

    /// Attach transit segments (ignored unless this is a transit leg).
    pub fn with_transit_segments(mut self, segments: Vec<TransitSegment>) -> Self {
        if self.mode == TravelMode::Transit {
            self.transit_segments = segments;
        }
        self
    }

    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    pub fn origin(&self) -> &Endpoint {
        &self.from
    }

    pub fn destination(&self) -> &Endpoint {
        &self.to
    }

    pub fn distance_meters(&self) -> u32 {
        self.distance_meters
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    pub fn polyline(&self) -> Option<&str> {
        self.polyline.as_deref()
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn fare_text(&self) -> Option<&str> {
        self.fare_text.as_deref()
    }

    pub fn transit_segments(&self) -> &[TransitSegment] {
        &self.transit_segments
    }

    /// Line name of the first ride, if any.
    pub fn first_line_name(&self) -> Option<&str> {
        self.transit_segments
            .first()
            .and_then(|s| s.line_name.as_deref())
            .filter(|name| !name.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hop() -> Hop {
        Hop::new(
            Endpoint::new("Home", Coordinate::new(28.60, 77.20).unwrap()),
            Endpoint::new("Rajiv Chowk", Coordinate::new(28.63, 77.22).unwrap()),
        )
    }

    fn segment(line: Option<&str>) -> TransitSegment {
        TransitSegment {
            line_name: line.map(String::from),
            ..TransitSegment::default()
        }
    }

    #[test]
    fn mode_names() {
        assert_eq!(TravelMode::Walk.as_str(), "walk");
        assert_eq!(TravelMode::Drive.api_name(), "driving");
        assert_eq!(TravelMode::Transit.api_name(), "transit");
        assert_eq!(TravelMode::Walk.summary_label(), "Walk");
        assert_eq!(TravelMode::Drive.summary_label(), "Auto");
        assert_eq!(TravelMode::Transit.summary_label(), "METRO");
    }

    #[test]
    fn parse_mode() {
        assert_eq!("walking".parse::<TravelMode>(), Ok(TravelMode::Walk));
        assert_eq!("Drive".parse::<TravelMode>(), Ok(TravelMode::Drive));
        assert_eq!(" transit ".parse::<TravelMode>(), Ok(TravelMode::Transit));
        assert!("bicycling".parse::<TravelMode>().is_err());
    }

    #[test]
    fn access_modes() {
        assert!(TravelMode::Walk.is_access_mode());
        assert!(TravelMode::Drive.is_access_mode());
        assert!(!TravelMode::Transit.is_access_mode());
    }

    #[test]
    fn unnamed_endpoint_uses_coordinates() {
        let location = Coordinate::new(28.5, 77.25).unwrap();
        assert_eq!(Endpoint::unnamed(location).name, "28.5,77.25");
        assert_eq!(
            Endpoint::with_optional_name(Some("  ".into()), location).name,
            "28.5,77.25"
        );
        assert_eq!(
            Endpoint::with_optional_name(Some("Saket".into()), location).name,
            "Saket"
        );
    }

    #[test]
    fn segments_only_on_transit_legs() {
        let walk = Leg::new(TravelMode::Walk, hop(), 300, 240)
            .with_transit_segments(vec![segment(Some("Blue Line"))]);
        assert!(walk.transit_segments().is_empty());

        let transit = Leg::new(TravelMode::Transit, hop(), 5_000, 900)
            .with_transit_segments(vec![segment(Some("Blue Line")), segment(Some("Yellow Line"))]);
        assert_eq!(transit.transit_segments().len(), 2);
        assert_eq!(transit.first_line_name(), Some("Blue Line"));
    }

    #[test]
    fn first_line_name_skips_blank() {
        let transit = Leg::new(TravelMode::Transit, hop(), 5_000, 900)
            .with_transit_segments(vec![segment(Some(" ")), segment(Some("Yellow Line"))]);
        assert_eq!(transit.first_line_name(), None);

        let no_segments = Leg::new(TravelMode::Transit, hop(), 5_000, 900);
        assert_eq!(no_segments.first_line_name(), None);
    }

    #[test]
    fn builder_attaches_metadata() {
        let leg = Leg::new(TravelMode::Transit, hop(), 5_000, 900)
            .with_polyline(Some("abc".into()))
            .with_steps(vec!["Metro towards Samaypur Badli".into()])
            .with_fare_text(Some("₹30.00".into()));

        assert_eq!(leg.polyline(), Some("abc"));
        assert_eq!(leg.steps().len(), 1);
        assert_eq!(leg.fare_text(), Some("₹30.00"));
        assert_eq!(leg.origin().name, "Home");
        assert_eq!(leg.destination().name, "Rajiv Chowk");
    }
}
