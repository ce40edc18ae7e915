//! Web layer for the route planner.
//!
//! Provides JSON endpoints for planning routes, finding stations and
//! geocoding addresses.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
