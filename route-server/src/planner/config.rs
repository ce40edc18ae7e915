//! Routing configuration for the variant engine.

use chrono::NaiveTime;
use tracing::warn;

/// Configuration parameters for route computation.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingConfig {
    /// Number of candidate stations considered on each side.
    pub top_stations: usize,

    /// Walks longer than this (meters) are replaced by a drive when one exists.
    pub walk_threshold_meters: u32,

    /// Auto-rickshaw fare per kilometer for drive legs (rupees).
    pub auto_rate_per_km: f64,

    /// Maximum number of variants to return.
    pub max_variants: usize,

    /// Local clock time every transit leg departs at.
    pub departure_time: NaiveTime,

    /// Number of station pairs evaluated concurrently.
    /// 1 evaluates pairs strictly one after another.
    pub batch_size: usize,
}

impl RoutingConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        top_stations: usize,
        walk_threshold_meters: u32,
        auto_rate_per_km: f64,
        max_variants: usize,
        departure_time: NaiveTime,
        batch_size: usize,
    ) -> Self {
        Self {
            top_stations,
            walk_threshold_meters,
            auto_rate_per_km,
            max_variants,
            departure_time,
            batch_size,
        }
    }

    /// Defaults overridden by `ROUTING_*` environment variables.
    ///
    /// - `ROUTING_TOP_STATIONS`
    /// - `ROUTING_WALK_THRESHOLD_METERS`
    /// - `ROUTING_AUTO_RATE_PER_KM`
    /// - `ROUTING_MAX_VARIANTS`
    /// - `ROUTING_DEPARTURE_TIME` (`HH:MM`)
    /// - `ROUTING_BATCH_SIZE`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each key.
    ///
    /// Values that fail to parse are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        override_with(&lookup, "ROUTING_TOP_STATIONS", &mut config.top_stations, |v| {
            v.parse::<usize>().ok().filter(|n| *n > 0)
        });
        override_with(
            &lookup,
            "ROUTING_WALK_THRESHOLD_METERS",
            &mut config.walk_threshold_meters,
            |v| v.parse().ok(),
        );
        override_with(
            &lookup,
            "ROUTING_AUTO_RATE_PER_KM",
            &mut config.auto_rate_per_km,
            |v| v.parse::<f64>().ok().filter(|r| r.is_finite() && *r >= 0.0),
        );
        override_with(&lookup, "ROUTING_MAX_VARIANTS", &mut config.max_variants, |v| {
            v.parse().ok()
        });
        override_with(
            &lookup,
            "ROUTING_DEPARTURE_TIME",
            &mut config.departure_time,
            |v| NaiveTime::parse_from_str(v, "%H:%M").ok(),
        );
        override_with(&lookup, "ROUTING_BATCH_SIZE", &mut config.batch_size, |v| {
            v.parse::<usize>().ok().filter(|n| *n > 0)
        });

        config
    }
}

fn override_with<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    slot: &mut T,
    parse: impl Fn(&str) -> Option<T>,
) {
    let Some(raw) = lookup(key) else {
        return;
    };
    match parse(raw.trim()) {
        Some(value) => *slot = value,
        None => warn!(key, value = %raw, "ignoring invalid routing setting"),
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            top_stations: 3,
            walk_threshold_meters: 400,
            auto_rate_per_km: 12.0,
            max_variants: 9,
            departure_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default(),
            batch_size: 3, // one origin station's row at a time
        }
    }
}
