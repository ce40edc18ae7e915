//! Google Maps Platform HTTP client.
//!
//! Provides async methods for the Directions, Places Nearby Search and
//! Geocoding web services, and implements the planner's collaborator
//! traits on top of them.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::{Coordinate, Hop, Leg, TravelMode};
use crate::provider::{Geocoder, LegFetcher, LookupError, PlaceCandidate, PlacesProvider};
use crate::stations::{DEFAULT_SEARCH_RADIUS_METERS, DEFAULT_STATION_CATEGORY};

use super::convert::{convert_directions, convert_geocode, convert_places};
use super::error::MapsError;
use super::types::{DirectionsResponse, GeocodeResponse, PlacesResponse};

/// Default base URL for the Maps web services.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Configuration for the Google Maps client.
#[derive(Debug, Clone)]
pub struct MapsConfig {
    /// API key sent with every request
    pub api_key: String,
    /// Base URL for the API (defaults to production Google)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Radius for nearby station searches, in meters
    pub search_radius_meters: u32,
    /// Place type that identifies stations
    pub station_category: String,
}

impl MapsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 10,
            search_radius_meters: DEFAULT_SEARCH_RADIUS_METERS,
            station_category: DEFAULT_STATION_CATEGORY.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the nearby station search radius.
    pub fn with_search_radius(mut self, meters: u32) -> Self {
        self.search_radius_meters = meters;
        self
    }

    /// Set the place type searched for stations.
    pub fn with_station_category(mut self, category: impl Into<String>) -> Self {
        self.station_category = category.into();
        self
    }
}

/// Google Maps Platform client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct GoogleMapsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
    search_radius_meters: u32,
    station_category: String,
}

impl GoogleMapsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MapsConfig) -> Result<Self, MapsError> {
        if config.max_concurrent == 0 {
            return Err(MapsError::InvalidRequest(
                "max_concurrent must be positive".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
            search_radius_meters: config.search_radius_meters,
            station_category: config.station_category,
        })
    }

    /// Radius configured for station searches.
    pub fn search_radius_meters(&self) -> u32 {
        self.search_radius_meters
    }

    /// Place type configured for station searches.
    pub fn station_category(&self) -> &str {
        &self.station_category
    }

    /// Fetch directions for `hop` and convert the first route's first leg.
    ///
    /// Transit requests are restricted to rail and, when given, depart at
    /// `departure_epoch_secs`.
    pub async fn directions(
        &self,
        hop: &Hop,
        mode: TravelMode,
        departure_epoch_secs: Option<i64>,
    ) -> Result<Leg, MapsError> {
        let mut query = vec![
            ("origin", hop.from.location.to_string()),
            ("destination", hop.to.location.to_string()),
            ("mode", mode.api_name().to_string()),
        ];
        if mode == TravelMode::Transit {
            query.push(("transit_mode", "rail".to_string()));
        }
        if let Some(departure) = departure_epoch_secs.filter(|d| *d > 0) {
            query.push(("departure_time", departure.to_string()));
        }

        let response: DirectionsResponse = self.get_json("directions/json", &query).await?;
        convert_directions(response, hop, mode)
    }

    /// Search for places of `category` within `radius_meters` of `center`.
    pub async fn nearby(
        &self,
        center: Coordinate,
        radius_meters: u32,
        category: &str,
    ) -> Result<Vec<PlaceCandidate>, MapsError> {
        let query = [
            ("location", center.to_string()),
            ("radius", radius_meters.to_string()),
            ("type", category.to_string()),
        ];

        let response: PlacesResponse = self.get_json("place/nearbysearch/json", &query).await?;
        convert_places(response)
    }

    /// Resolve a free-text address to the first matching location.
    pub async fn geocode_address(&self, address: &str) -> Result<Coordinate, MapsError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(MapsError::InvalidRequest("empty address".to_string()));
        }

        let query = [("address", address.to_string())];
        let response: GeocodeResponse = self.get_json("geocode/json", &query).await?;
        convert_geocode(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, MapsError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| MapsError::InvalidRequest("client is shutting down".to_string()))?;

        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(MapsError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MapsError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MapsError::HttpStatus {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| MapsError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl LegFetcher for GoogleMapsClient {
    async fn fetch_leg(
        &self,
        hop: &Hop,
        mode: TravelMode,
        departure_epoch_secs: Option<i64>,
    ) -> Result<Leg, LookupError> {
        self.directions(hop, mode, departure_epoch_secs)
            .await
            .map_err(|e| {
                debug!(from = %hop.from.location, to = %hop.to.location, %mode, error = %e, "no directions");
                LookupError::from(e)
            })
    }
}

impl PlacesProvider for GoogleMapsClient {
    async fn search_nearby(
        &self,
        center: Coordinate,
        radius_meters: u32,
        category: &str,
    ) -> Result<Vec<PlaceCandidate>, LookupError> {
        Ok(self.nearby(center, radius_meters, category).await?)
    }
}

impl Geocoder for GoogleMapsClient {
    async fn geocode(&self, address: &str) -> Result<Coordinate, LookupError> {
        Ok(self.geocode_address(address).await?)
    }
}
