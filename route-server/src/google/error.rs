//! Google Maps client error types.

use crate::provider::LookupError;

/// Errors from the Google Maps HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum MapsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}{}", suffix(" (body: ", .body, ")"))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Server answered with a non-success HTTP status
    #[error("HTTP status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// API answered with a non-`OK` status field
    #[error("API status {status}{}", suffix(": ", .message, ""))]
    ApiStatus {
        status: String,
        message: Option<String>,
    },

    /// The response was well formed but had nothing usable in it
    #[error("response contained no {0}")]
    Empty(&'static str),

    /// The request was rejected before being sent
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Rate limited by the API
    #[error("rate limited by Google Maps API")]
    RateLimited,

    /// Invalid API key or unauthorized
    #[error("unauthorized (invalid API key)")]
    Unauthorized,
}

fn suffix(before: &str, detail: &Option<String>, after: &str) -> String {
    detail
        .as_deref()
        .map(|d| format!("{before}{d}{after}"))
        .unwrap_or_default()
}

impl From<MapsError> for LookupError {
    fn from(err: MapsError) -> Self {
        match err {
            MapsError::Http(_)
            | MapsError::HttpStatus { .. }
            | MapsError::RateLimited
            | MapsError::Unauthorized => LookupError::Unavailable(err.to_string()),
            MapsError::ApiStatus { status, .. } if status == "ZERO_RESULTS" => {
                LookupError::NoResult
            }
            MapsError::ApiStatus { status, .. } => LookupError::Status(status),
            MapsError::Json { message, .. } => LookupError::Malformed(message),
            MapsError::Empty(_) | MapsError::InvalidRequest(_) => LookupError::NoResult,
        }
    }
}
