use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::{Location, LocationCandidate, WeatherSnapshot};

use super::{GeocodeError, GeocodeOutcome, Geocoder, WeatherError, WeatherSource};

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Client for the two unauthenticated Open-Meteo endpoints.
///
/// Implements both [`Geocoder`] and [`WeatherSource`]; cloning shares the
/// underlying HTTP connection pool.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    max_candidates: u8,
}

impl OpenMeteoClient {
    pub fn new(max_candidates: u8) -> Self {
        Self {
            http: Client::new(),
            max_candidates,
        }
    }
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_CANDIDATES)
    }
}

#[async_trait]
impl Geocoder for OpenMeteoClient {
    async fn resolve(&self, city: &str) -> Result<GeocodeOutcome, GeocodeError> {
        debug!(city, "geocoding lookup");

        let count = self.max_candidates.to_string();
        let res = self
            .http
            .get(GEOCODING_URL)
            .query(&[("name", city), ("count", count.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(GeocodeError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        parse_geocode_body(&body)
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    async fn fetch(&self, location: &Location) -> Result<WeatherSnapshot, WeatherError> {
        debug!(
            latitude = location.latitude,
            longitude = location.longitude,
            "current weather lookup"
        );

        let res = self
            .http
            .get(FORECAST_URL)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        parse_weather_body(&body)
    }
}

#[derive(Debug, Deserialize)]
struct GeoSearchResponse {
    results: Option<Vec<GeoPlace>>,
}

#[derive(Debug, Deserialize)]
struct GeoPlace {
    name: String,
    #[serde(default)]
    admin1: Option<String>,
    country: String,
    latitude: f64,
    longitude: f64,
}

impl From<GeoPlace> for Location {
    fn from(place: GeoPlace) -> Self {
        Location {
            name: place.name,
            admin1: place.admin1.unwrap_or_default(),
            country: place.country,
            latitude: place.latitude,
            longitude: place.longitude,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: Option<f64>,
    windspeed: Option<f64>,
    winddirection: Option<f64>,
    time: Option<String>,
}

fn parse_geocode_body(body: &str) -> Result<GeocodeOutcome, GeocodeError> {
    let parsed: GeoSearchResponse = serde_json::from_str(body)?;
    let mut results = parsed.results.unwrap_or_default();

    match results.len() {
        0 => Err(GeocodeError::NotFound),
        1 => {
            let place = results.remove(0);
            Ok(GeocodeOutcome::Single(Location::from(place)))
        }
        _ => {
            let candidates = results
                .into_iter()
                .enumerate()
                .map(|(position, place)| {
                    let location = Location::from(place);
                    LocationCandidate {
                        index: position + 1,
                        label: location.label(),
                        location,
                    }
                })
                .collect();
            Ok(GeocodeOutcome::Multiple(candidates))
        }
    }
}

fn parse_weather_body(body: &str) -> Result<WeatherSnapshot, WeatherError> {
    let parsed: ForecastResponse = serde_json::from_str(body)?;
    let current = parsed.current_weather.ok_or(WeatherError::Unavailable)?;

    Ok(WeatherSnapshot {
        temperature_c: current.temperature,
        windspeed_kmh: current.windspeed,
        wind_direction_deg: current.winddirection,
        observation_time: current.time,
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
