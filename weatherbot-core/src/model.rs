use serde::{Deserialize, Serialize};

/// A place resolved from a free-text city name.
///
/// Immutable once produced by the geocoder; identity is structural
/// (name + country + coordinates), there is no upstream ID to keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    /// First-level administrative area (state, region). Empty when the
    /// upstream result omits it.
    pub admin1: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Display label: the non-empty parts of name, admin1 and country joined
    /// with `", "`, so an empty admin1 never leaves a dangling separator.
    pub fn label(&self) -> String {
        [self.name.as_str(), self.admin1.as_str(), self.country.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One of several ambiguous geocoding matches offered for user selection.
///
/// Only exists while a selection is pending; `index` is the 1-based position
/// in the upstream response order.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationCandidate {
    pub index: usize,
    pub label: String,
    pub location: Location,
}

/// A single point-in-time weather observation for one location.
///
/// Fields mirror the upstream `current_weather` payload; any of them may be
/// absent, in which case the report renders a placeholder. The observation
/// time is passed through verbatim and never reparsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_c: Option<f64>,
    pub windspeed_kmh: Option<f64>,
    pub wind_direction_deg: Option<f64>,
    pub observation_time: Option<String>,
}
