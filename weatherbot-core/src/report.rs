//! Plain-text rendering of a weather report.

use crate::model::{Location, WeatherSnapshot};

/// Marker rendered in place of a reading the upstream payload omitted.
const UNAVAILABLE: &str = "unavailable";

/// Render a current-weather report, one field per line in stable order.
///
/// Pure and deterministic: identical inputs yield byte-identical output.
pub fn format_report(location: &Location, snapshot: &WeatherSnapshot) -> String {
    format!(
        "Weather report for {title}\n\
         City: {city}\n\
         Region: {region}\n\
         Country: {country}\n\
         Temperature: {temperature}\n\
         Windspeed: {windspeed}\n\
         Wind direction: {direction}\n\
         Observation time: {time}",
        title = location.label(),
        city = location.name,
        region = location.admin1,
        country = location.country,
        temperature = reading(snapshot.temperature_c, " °C"),
        windspeed = reading(snapshot.windspeed_kmh, " km/h"),
        direction = reading(snapshot.wind_direction_deg, "°"),
        time = snapshot.observation_time.as_deref().unwrap_or(UNAVAILABLE),
    )
}

fn reading(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v}{unit}"),
        None => UNAVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> Location {
        Location {
            name: "Paris".to_string(),
            admin1: "".to_string(),
            country: "France".to_string(),
            latitude: 48.86,
            longitude: 2.35,
        }
    }

    fn full_snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_c: Some(21.4),
            windspeed_kmh: Some(12.0),
            wind_direction_deg: Some(250.0),
            observation_time: Some("2024-05-01T12:00".to_string()),
        }
    }

    #[test]
    fn renders_every_field_on_its_own_line() {
        let report = format_report(&paris(), &full_snapshot());
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Weather report for Paris, France",
                "City: Paris",
                "Region: ",
                "Country: France",
                "Temperature: 21.4 °C",
                "Windspeed: 12 km/h",
                "Wind direction: 250°",
                "Observation time: 2024-05-01T12:00",
            ]
        );
    }

    #[test]
    fn missing_readings_render_as_unavailable() {
        let snapshot = WeatherSnapshot {
            temperature_c: None,
            windspeed_kmh: None,
            wind_direction_deg: None,
            observation_time: None,
        };

        let report = format_report(&paris(), &snapshot);
        assert!(report.contains("Temperature: unavailable"));
        assert!(report.contains("Windspeed: unavailable"));
        assert!(report.contains("Wind direction: unavailable"));
        assert!(report.contains("Observation time: unavailable"));
    }

    #[test]
    fn formatting_is_idempotent() {
        let location = paris();
        let snapshot = full_snapshot();

        let first = format_report(&location, &snapshot);
        let second = format_report(&location, &snapshot);
        assert_eq!(first, second);
    }
}
