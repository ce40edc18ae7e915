//! Nearest-station lookup.

use tracing::{debug, warn};

use crate::domain::{Coordinate, StationCandidate};
use crate::provider::{PlaceCandidate, PlacesProvider};

/// Search radius used when asking the places provider for stations.
///
/// Large enough to cover a whole city; ranking relies on our own distance
/// sort rather than on the provider's ordering.
pub const DEFAULT_SEARCH_RADIUS_METERS: u32 = 15_000;

/// Place category that identifies metro stations.
pub const DEFAULT_STATION_CATEGORY: &str = "subway_station";

/// Finds the stations closest to a point by straight-line distance.
pub struct StationFinder<'a, P: PlacesProvider> {
    places: &'a P,
    radius_meters: u32,
    category: String,
}

impl<'a, P: PlacesProvider> StationFinder<'a, P> {
    /// Create a finder with the default radius and category.
    pub fn new(places: &'a P) -> Self {
        Self {
            places,
            radius_meters: DEFAULT_SEARCH_RADIUS_METERS,
            category: DEFAULT_STATION_CATEGORY.to_string(),
        }
    }

    /// Override the search radius.
    pub fn with_radius(mut self, radius_meters: u32) -> Self {
        self.radius_meters = radius_meters;
        self
    }

    /// Override the place category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Return up to `max_results` stations nearest to `at`, closest first.
    ///
    /// Provider failures degrade to an empty list.
    pub async fn find(&self, at: Coordinate, max_results: usize) -> Vec<StationCandidate> {
        let raw = match self
            .places
            .search_nearby(at, self.radius_meters, &self.category)
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                warn!(location = %at, error = %e, "station lookup failed");
                return Vec::new();
            }
        };

        let stations = nearest(at, raw, max_results);
        debug!(location = %at, found = stations.len(), "nearest stations");
        stations
    }
}

/// Validate, measure, sort and truncate raw place records.
pub fn nearest(
    at: Coordinate,
    candidates: Vec<PlaceCandidate>,
    max_results: usize,
) -> Vec<StationCandidate> {
    let mut stations: Vec<StationCandidate> = candidates
        .into_iter()
        .filter_map(|c| to_station(at, c))
        .collect();

    // Stable, so equidistant stations keep the provider's order.
    stations.sort_by_key(StationCandidate::distance_meters);
    stations.truncate(max_results);
    stations
}

fn to_station(at: Coordinate, candidate: PlaceCandidate) -> Option<StationCandidate> {
    let name = candidate.name.filter(|n| !n.trim().is_empty())?;
    let location = Coordinate::from_parts(candidate.lat, candidate.lng)?;
    let distance = at.haversine_meters(&location).round() as u32;

    Some(StationCandidate::new(
        name,
        candidate.place_id,
        candidate.vicinity,
        location,
        distance,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::LookupError;
    use std::sync::Mutex;

    fn origin() -> Coordinate {
        Coordinate::new(28.6315, 77.2167).unwrap()
    }

    fn place(name: &str, lat: f64, lng: f64) -> PlaceCandidate {
        PlaceCandidate {
            name: Some(name.into()),
            place_id: Some(format!("id-{name}")),
            vicinity: Some("New Delhi".into()),
            lat: Some(lat),
            lng: Some(lng),
        }
    }

    /// Places stub returning a fixed answer and recording requests.
    struct StubPlaces {
        answer: Result<Vec<PlaceCandidate>, LookupError>,
        requests: Mutex<Vec<(u32, String)>>,
    }

    impl StubPlaces {
        fn new(answer: Result<Vec<PlaceCandidate>, LookupError>) -> Self {
            Self {
                answer,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    impl PlacesProvider for StubPlaces {
        async fn search_nearby(
            &self,
            _center: Coordinate,
            radius_meters: u32,
            category: &str,
        ) -> Result<Vec<PlaceCandidate>, LookupError> {
            self.requests
                .lock()
                .unwrap()
                .push((radius_meters, category.to_string()));
            self.answer.clone()
        }
    }

    #[test]
    fn nearest_sorts_by_distance() {
        let raw = vec![
            place("Far", 28.70, 77.30),
            place("Near", 28.632, 77.217),
            place("Middle", 28.65, 77.23),
        ];

        let stations = nearest(origin(), raw, 10);
        let names: Vec<_> = stations.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Near", "Middle", "Far"]);

        for pair in stations.windows(2) {
            assert!(pair[0].distance_meters() <= pair[1].distance_meters());
        }
    }

    #[test]
    fn nearest_truncates() {
        let raw = vec![
            place("A", 28.632, 77.217),
            place("B", 28.64, 77.22),
            place("C", 28.65, 77.23),
            place("D", 28.66, 77.24),
        ];

        assert_eq!(nearest(origin(), raw.clone(), 3).len(), 3);
        assert_eq!(nearest(origin(), raw.clone(), 10).len(), 4);
        assert!(nearest(origin(), raw, 0).is_empty());
    }

    #[test]
    fn nearest_drops_invalid_candidates() {
        let raw = vec![
            PlaceCandidate {
                lat: None,
                ..place("No lat", 0.0, 0.0)
            },
            PlaceCandidate {
                lng: Some(f64::NAN),
                ..place("NaN lng", 0.0, 0.0)
            },
            PlaceCandidate {
                name: None,
                ..place("", 28.64, 77.22)
            },
            PlaceCandidate {
                name: Some("   ".into()),
                ..place("", 28.64, 77.22)
            },
            place("Valid", 28.64, 77.22),
        ];

        let stations = nearest(origin(), raw, 10);
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].name(), "Valid");
        assert_eq!(stations[0].place_id(), Some("id-Valid"));
        assert_eq!(stations[0].vicinity(), Some("New Delhi"));
    }

    #[test]
    fn distance_is_rounded_meters() {
        let at = Coordinate::new(0.0, 0.0).unwrap();
        // 0.001 degrees of latitude is about 111.19 m.
        let stations = nearest(at, vec![place("S", 0.001, 0.0)], 1);
        assert_eq!(stations[0].distance_meters(), 111);
    }

    #[test]
    fn equidistant_stations_keep_provider_order() {
        let raw = vec![place("First", 28.64, 77.22), place("Second", 28.64, 77.22)];
        let stations = nearest(origin(), raw, 2);
        assert_eq!(stations[0].name(), "First");
        assert_eq!(stations[1].name(), "Second");
    }

    #[tokio::test]
    async fn find_uses_radius_and_category() {
        let places = StubPlaces::new(Ok(vec![place("Rajiv Chowk", 28.6328, 77.2197)]));
        let finder = StationFinder::new(&places);

        let stations = finder.find(origin(), 3).await;
        assert_eq!(stations.len(), 1);

        let requests = places.requests.lock().unwrap();
        assert_eq!(
            *requests,
            vec![(DEFAULT_SEARCH_RADIUS_METERS, DEFAULT_STATION_CATEGORY.to_string())]
        );
    }

    #[tokio::test]
    async fn find_with_custom_search() {
        let places = StubPlaces::new(Ok(Vec::new()));
        let finder = StationFinder::new(&places)
            .with_radius(5_000)
            .with_category("train_station");

        assert!(finder.find(origin(), 3).await.is_empty());
        assert_eq!(
            *places.requests.lock().unwrap(),
            vec![(5_000, "train_station".to_string())]
        );
    }

    #[tokio::test]
    async fn find_degrades_to_empty_on_failure() {
        for err in [
            LookupError::Unavailable("connection refused".into()),
            LookupError::Status("REQUEST_DENIED".into()),
            LookupError::Malformed("expected object".into()),
        ] {
            let places = StubPlaces::new(Err(err));
            let finder = StationFinder::new(&places);
            assert!(finder.find(origin(), 3).await.is_empty());
        }
    }
}
