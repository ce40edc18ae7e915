//! Application state for the web layer.

use std::sync::Arc;

use crate::google::GoogleMapsClient;
use crate::planner::{RoutePlanner, RoutingConfig};
use crate::stations::StationFinder;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Google Maps client, used for directions, places and geocoding
    pub maps: Arc<GoogleMapsClient>,

    /// Route computation configuration
    pub config: Arc<RoutingConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(maps: GoogleMapsClient, config: RoutingConfig) -> Self {
        Self {
            maps: Arc::new(maps),
            config: Arc::new(config),
        }
    }

    /// Station finder using the client's configured radius and category.
    pub fn station_finder(&self) -> StationFinder<'_, GoogleMapsClient> {
        StationFinder::new(self.maps.as_ref())
            .with_radius(self.maps.search_radius_meters())
            .with_category(self.maps.station_category())
    }

    /// Route planner backed by the Google Maps client.
    pub fn planner(&self) -> RoutePlanner<'_, GoogleMapsClient, GoogleMapsClient> {
        RoutePlanner::new(self.maps.as_ref(), self.maps.as_ref(), &self.config)
            .with_station_finder(self.station_finder())
    }
}
