//! Route variant planner.
//!
//! This module implements the core computation: pick stations near both
//! ends of a trip, build an access → transit → egress journey for every
//! station pair, and rank the survivors by duration and cost.

mod config;
mod departure;
mod engine;
mod fare;
mod rank;
mod select;

pub use config::RoutingConfig;
pub use departure::{next_departure, next_departure_epoch};
pub use engine::{RoutePlanner, RouteRequest, RouteResult};
pub use fare::{drive_fare, parse_fare, total_cost};
pub use rank::{compare_variants, rank_variants};
pub use select::select_leg;
