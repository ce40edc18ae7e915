//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::{Coordinate, DomainError, Endpoint, Hop, TravelMode, UnknownTravelMode};
use crate::planner::RouteRequest;
use crate::provider::{Geocoder, LegFetcher, LookupError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// Every endpoint is readable from any origin.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/routes", get(routes_by_address))
        .route("/routes/by-coordinates", get(routes_by_coordinates))
        .route("/api/geocode", get(geocode))
        .route("/api/nearest-stations", get(nearest_stations))
        .route("/api/nearest-stations-by-text", get(nearest_stations_by_text))
        .route("/debug/directions", get(debug_directions))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan routes between two free-text addresses.
///
/// An address that cannot be geocoded yields an empty route list.
async fn routes_by_address(
    State(state): State<AppState>,
    Query(req): Query<RoutesByAddressRequest>,
) -> Response {
    let (Some(from), Some(to)) = (non_blank(req.from), non_blank(req.to)) else {
        let body = StatusResponse {
            status: "error",
            message: "Both 'from' and 'to' parameters are required.".to_string(),
        };
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    };

    let result = state
        .planner()
        .compute_for_addresses(state.maps.as_ref(), &from, &to)
        .await;

    info!(
        %from,
        %to,
        pairs = result.pairs_considered,
        variants = result.variants.len(),
        "routes computed"
    );
    Json(RoutesResponse::new(from, to, &result.variants)).into_response()
}

/// Plan routes between two coordinates.
async fn routes_by_coordinates(
    State(state): State<AppState>,
    Query(req): Query<RoutesByCoordinatesRequest>,
) -> Result<Json<RoutesResponse>, AppError> {
    let origin = Endpoint::with_optional_name(
        req.from_name,
        Coordinate::new(req.from_lat, req.from_lng)?,
    );
    let destination =
        Endpoint::with_optional_name(req.to_name, Coordinate::new(req.to_lat, req.to_lng)?);

    let request = RouteRequest::new(origin, destination);
    let result = state.planner().compute(&request).await;

    info!(
        from = %request.origin.name,
        to = %request.destination.name,
        pairs = result.pairs_considered,
        variants = result.variants.len(),
        "routes computed"
    );
    Ok(Json(RoutesResponse::new(
        request.origin.name,
        request.destination.name,
        &result.variants,
    )))
}

/// Resolve an address to a coordinate.
async fn geocode(
    State(state): State<AppState>,
    Query(req): Query<GeocodeRequest>,
) -> Result<Json<LatLngDto>, AppError> {
    let address = non_blank(req.address).ok_or_else(|| AppError::BadRequest {
        message: "'address' parameter is required".to_string(),
    })?;

    let at = state
        .maps
        .geocode(&address)
        .await
        .map_err(|e| AppError::NotFound {
            message: format!("could not geocode '{address}': {e}"),
        })?;

    Ok(Json(at.into()))
}

/// Stations nearest a coordinate, closest first.
async fn nearest_stations(
    State(state): State<AppState>,
    Query(req): Query<NearestStationsRequest>,
) -> Result<Json<Vec<StationDto>>, AppError> {
    let at = Coordinate::new(req.lat, req.lng)?;
    let stations = state
        .station_finder()
        .find(at, top_stations(req.top))
        .await;

    Ok(Json(stations.iter().map(StationDto::from_domain).collect()))
}

/// Stations nearest an address, closest first.
///
/// An address that cannot be geocoded yields an empty list.
async fn nearest_stations_by_text(
    State(state): State<AppState>,
    Query(req): Query<NearestStationsByTextRequest>,
) -> Result<Json<Vec<StationDto>>, AppError> {
    let address = non_blank(req.address).ok_or_else(|| AppError::BadRequest {
        message: "'address' parameter is required".to_string(),
    })?;

    let at = match state.maps.geocode(&address).await {
        Ok(at) => at,
        Err(e) => {
            warn!(%address, error = %e, "could not geocode station search");
            return Ok(Json(Vec::new()));
        }
    };
    let stations = state
        .station_finder()
        .find(at, top_stations(req.top))
        .await;

    Ok(Json(stations.iter().map(StationDto::from_domain).collect()))
}

/// Fetch one raw leg from the directions provider.
async fn debug_directions(
    State(state): State<AppState>,
    Query(req): Query<DebugDirectionsRequest>,
) -> Result<Response, AppError> {
    let mode: TravelMode = req.mode.as_deref().unwrap_or("walking").parse()?;
    let hop = Hop::new(
        Endpoint::unnamed(Coordinate::new(req.from_lat, req.from_lng)?),
        Endpoint::unnamed(Coordinate::new(req.to_lat, req.to_lng)?),
    );

    let leg = state
        .maps
        .fetch_leg(&hop, mode, req.departure_time)
        .await
        .map_err(|e| match e {
            LookupError::Unavailable(message) => AppError::Internal { message },
            other => AppError::NotFound {
                message: format!("no {mode} leg: {other}"),
            },
        })?;

    Ok(Json(leg).into_response())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<UnknownTravelMode> for AppError {
    fn from(e: UnknownTravelMode) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            warn!(%status, %message, "request failed");
        } else {
            info!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
