//! Route variant computation.
//!
//! For every pairing of a station near the origin with a station near the
//! destination the planner tries to build one access → transit → egress
//! journey. Pairs missing any leg are dropped; the survivors are labelled,
//! ranked and truncated.

use futures::future::{join, join_all};
use tracing::{debug, warn};

use super::config::RoutingConfig;
use super::departure::next_departure_epoch;
use super::fare::total_cost;
use super::rank::rank_variants;
use super::select::select_leg;
use crate::domain::{Endpoint, Hop, Leg, RouteVariant, StationCandidate, TravelMode};
use crate::provider::{Geocoder, LegFetcher, LookupError, PlacesProvider};
use crate::stations::StationFinder;

/// Request for route computation between two labelled points.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub origin: Endpoint,
    pub destination: Endpoint,
}

impl RouteRequest {
    pub fn new(origin: Endpoint, destination: Endpoint) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Build a request by geocoding two free-text addresses.
    ///
    /// Each endpoint is labelled with its address text. Returns the first
    /// lookup failure when either address cannot be resolved.
    pub async fn from_addresses<G: Geocoder>(
        geocoder: &G,
        from: &str,
        to: &str,
    ) -> Result<Self, LookupError> {
        let (origin, destination) = join(geocoder.geocode(from), geocoder.geocode(to)).await;
        Ok(Self::new(
            Endpoint::new(from.trim(), origin?),
            Endpoint::new(to.trim(), destination?),
        ))
    }
}

/// Result of route computation.
#[derive(Debug, Clone, Default)]
pub struct RouteResult {
    /// Variants ranked best-first, at most `max_variants` of them.
    pub variants: Vec<RouteVariant>,

    /// Number of station pairs evaluated.
    pub pairs_considered: usize,
}

impl RouteResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// The three legs of one station pair, before labelling.
struct PairLegs {
    access: Leg,
    transit: Leg,
    egress: Leg,
    origin_key: String,
    destination_key: String,
}

/// Multi-modal route planner.
pub struct RoutePlanner<'a, F: LegFetcher, P: PlacesProvider> {
    fetcher: &'a F,
    stations: StationFinder<'a, P>,
    config: &'a RoutingConfig,
}

impl<'a, F: LegFetcher, P: PlacesProvider> RoutePlanner<'a, F, P> {
    /// Create a planner searching stations with the default radius and category.
    pub fn new(fetcher: &'a F, places: &'a P, config: &'a RoutingConfig) -> Self {
        Self {
            fetcher,
            stations: StationFinder::new(places),
            config,
        }
    }

    /// Replace the station finder, e.g. to change its radius or category.
    pub fn with_station_finder(mut self, stations: StationFinder<'a, P>) -> Self {
        self.stations = stations;
        self
    }

    /// Compute ranked variants, departing at the next configured clock time.
    pub async fn compute(&self, request: &RouteRequest) -> RouteResult {
        let departure = next_departure_epoch(self.config.departure_time);
        self.compute_at(request, departure).await
    }

    /// Compute ranked variants with every transit leg departing at
    /// `departure_epoch_secs`.
    pub async fn compute_at(&self, request: &RouteRequest, departure_epoch_secs: i64) -> RouteResult {
        let top = self.config.top_stations;
        let (origin_stations, destination_stations) = join(
            self.stations.find(request.origin.location, top),
            self.stations.find(request.destination.location, top),
        )
        .await;

        if origin_stations.is_empty() || destination_stations.is_empty() {
            debug!(
                origin_stations = origin_stations.len(),
                destination_stations = destination_stations.len(),
                "no station pairs to evaluate"
            );
            return RouteResult::empty();
        }

        let pairs: Vec<(&StationCandidate, &StationCandidate)> = origin_stations
            .iter()
            .flat_map(|o| destination_stations.iter().map(move |d| (o, d)))
            .collect();

        // Batches run in order and join_all keeps input order, so survivors
        // come out in pair order whatever the batch size.
        let mut evaluated = Vec::with_capacity(pairs.len());
        for batch in pairs.chunks(self.config.batch_size.max(1)) {
            let futures: Vec<_> = batch
                .iter()
                .map(|(o, d)| self.evaluate_pair(request, o, d, departure_epoch_secs))
                .collect();
            evaluated.extend(join_all(futures).await);
        }

        let mut variants = Vec::new();
        for legs in evaluated.into_iter().flatten() {
            let id = format!(
                "r{}-{}-{}",
                variants.len() + 1,
                legs.origin_key,
                legs.destination_key
            );
            let cost = total_cost(
                &legs.access,
                &legs.transit,
                &legs.egress,
                self.config.auto_rate_per_km,
            );
            match RouteVariant::new(id, legs.access, legs.transit, legs.egress, cost) {
                Ok(variant) => variants.push(variant),
                Err(e) => warn!(error = %e, "discarding inconsistent variant"),
            }
        }

        debug!(
            pairs = pairs.len(),
            built = variants.len(),
            "route variants computed"
        );

        RouteResult {
            variants: rank_variants(variants, self.config.max_variants),
            pairs_considered: pairs.len(),
        }
    }

    /// Geocode two addresses and compute variants between them.
    ///
    /// An address that cannot be resolved yields an empty result.
    pub async fn compute_for_addresses<G: Geocoder>(
        &self,
        geocoder: &G,
        from: &str,
        to: &str,
    ) -> RouteResult {
        match RouteRequest::from_addresses(geocoder, from, to).await {
            Ok(request) => self.compute(&request).await,
            Err(e) => {
                warn!(from, to, error = %e, "address not resolved");
                RouteResult::empty()
            }
        }
    }

    async fn evaluate_pair(
        &self,
        request: &RouteRequest,
        origin_station: &StationCandidate,
        destination_station: &StationCandidate,
        departure_epoch_secs: i64,
    ) -> Option<PairLegs> {
        let boarding = station_endpoint(origin_station);
        let alighting = station_endpoint(destination_station);
        let threshold = self.config.walk_threshold_meters;

        let access_hop = Hop::new(request.origin.clone(), boarding.clone());
        let access = match select_leg(self.fetcher, &access_hop, threshold).await {
            Ok(leg) => leg,
            Err(e) => {
                debug!(station = %boarding.name, error = %e, "skipping pair: no access leg");
                return None;
            }
        };

        let transit_hop = Hop::new(boarding.clone(), alighting.clone());
        let transit = match self
            .fetcher
            .fetch_leg(&transit_hop, TravelMode::Transit, Some(departure_epoch_secs))
            .await
        {
            Ok(leg) => leg,
            Err(e) => {
                debug!(
                    from = %boarding.name,
                    to = %alighting.name,
                    error = %e,
                    "skipping pair: no transit leg"
                );
                return None;
            }
        };

        let egress_hop = Hop::new(alighting.clone(), request.destination.clone());
        let egress = match select_leg(self.fetcher, &egress_hop, threshold).await {
            Ok(leg) => leg,
            Err(e) => {
                debug!(station = %alighting.name, error = %e, "skipping pair: no egress leg");
                return None;
            }
        };

        Some(PairLegs {
            access,
            transit,
            egress,
            origin_key: origin_station.label_key().to_string(),
            destination_key: destination_station.label_key().to_string(),
        })
    }
}

fn station_endpoint(station: &StationCandidate) -> Endpoint {
    Endpoint::new(station.name(), station.location())
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
