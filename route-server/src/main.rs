use std::net::SocketAddr;

use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use route_server::google::{GoogleMapsClient, MapsConfig};
use route_server::planner::RoutingConfig;
use route_server::web::{AppState, create_router};

/// Address used when `BIND_ADDR` is unset.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Get credentials from environment
    let api_key = std::env::var("GOOGLE_API_KEY").unwrap_or_else(|_| {
        warn!("GOOGLE_API_KEY not set; every provider call will fail");
        String::new()
    });

    let maps = GoogleMapsClient::new(MapsConfig::new(api_key)).map_err(|e| {
        error!(error = %e, "failed to create Google Maps client");
        e
    })?;

    let config = RoutingConfig::from_env();
    info!(
        top_stations = config.top_stations,
        walk_threshold_meters = config.walk_threshold_meters,
        auto_rate_per_km = config.auto_rate_per_km,
        max_variants = config.max_variants,
        departure_time = %config.departure_time,
        batch_size = config.batch_size,
        "routing configuration"
    );

    let app = create_router(AppState::new(maps, config));

    // Bind and serve
    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()?;
    info!(%addr, "route server listening");
    info!("endpoints: /health /routes /routes/by-coordinates /api/geocode /api/nearest-stations /api/nearest-stations-by-text /debug/directions");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
