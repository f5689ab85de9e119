use crate::model::{Location, LocationCandidate, WeatherSnapshot};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;
use thiserror::Error;

pub mod open_meteo;

/// Result of resolving a free-text city name.
///
/// The single/ambiguous split is explicit so callers branch on a tag instead
/// of inspecting the shape of a list.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeOutcome {
    /// Exactly one upstream match.
    Single(Location),
    /// Two or more matches, in upstream response order.
    Multiple(Vec<LocationCandidate>),
}

#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The upstream result set was empty or absent.
    #[error("Invalid city name. Please try again.")]
    NotFound,

    #[error("Failed to send geocoding request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse geocoding response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Geocoding request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

#[derive(Debug, Error)]
pub enum WeatherError {
    /// The response carried no current-conditions payload.
    #[error("Weather data not available.")]
    Unavailable,

    #[error("Failed to send weather request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse weather response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Weather request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Resolves a city name to coordinates and disambiguation metadata.
///
/// Callers must reject blank input before invoking this; an empty query is a
/// contract violation, not a `NotFound`.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn resolve(&self, city: &str) -> Result<GeocodeOutcome, GeocodeError>;
}

/// Fetches a current-conditions snapshot for a resolved location.
///
/// Every call issues a fresh outbound request; nothing is cached.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch(&self, location: &Location) -> Result<WeatherSnapshot, WeatherError>;
}
