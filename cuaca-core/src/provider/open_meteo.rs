use async_trait::async_trait;
use chrono::NaiveDateTime;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    classify::WeatherCode,
    model::{Coordinates, TIMEZONE, WeatherObservation},
};

use super::{FetchError, WeatherProvider};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Open-Meteo current-weather client. Needs no API key.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn fetch_current(
        &self,
        location: Coordinates,
    ) -> Result<WeatherObservation, FetchError> {
        let res = self
            .http
            .get(FORECAST_URL)
            .query(&[
                ("latitude", location.lat.to_string()),
                ("longitude", location.lon.to_string()),
                ("current_weather", "true".to_string()),
                ("timezone", TIMEZONE.to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = res.text().await?;
        debug!("open-meteo payload: {}", truncate_body(&body));

        parse_observation(&body)
    }
}

/// Shape of the Open-Meteo forecast payload, reduced to the fields the
/// display uses. `current_weather` is only present when the request
/// asked for it, so its absence is a payload error, not a parse error.
#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current_weather: Option<OmCurrentWeather>,
    timezone: String,
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: u16,
    /// Local time in the requested timezone, e.g. "2024-05-01T14:30".
    time: String,
}

fn parse_observation(body: &str) -> Result<WeatherObservation, FetchError> {
    let parsed: OmForecastResponse = serde_json::from_str(body)?;
    let current = parsed.current_weather.ok_or(FetchError::MissingCurrentWeather)?;
    let observed_at = parse_local_time(&current.time)?;

    Ok(WeatherObservation {
        temperature_c: current.temperature,
        wind_speed_kmh: current.windspeed,
        code: WeatherCode::from_code(current.weathercode),
        observed_at,
        timezone: parsed.timezone,
    })
}

/// Open-Meteo reports local time at minute resolution; older payloads
/// carry seconds as well.
fn parse_local_time(raw: &str) -> Result<NaiveDateTime, FetchError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| FetchError::BadTimestamp(raw.to_string()))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    const FIXTURE: &str = r#"{
        "latitude": -6.25,
        "longitude": 106.8125,
        "timezone": "Asia/Jakarta",
        "current_weather": {
            "temperature": 31.2,
            "windspeed": 10.5,
            "winddirection": 190.0,
            "weathercode": 95,
            "time": "2024-05-01T14:30"
        }
    }"#;

    #[test]
    fn parses_a_well_formed_payload() {
        let obs = parse_observation(FIXTURE).expect("fixture should parse");

        assert_eq!(obs.temperature_c, 31.2);
        assert_eq!(obs.wind_speed_kmh, 10.5);
        assert_eq!(obs.code, WeatherCode::Thunderstorm);
        assert_eq!(obs.timezone, "Asia/Jakarta");

        let expected = NaiveDate::from_ymd_opt(2024, 5, 1)
            .expect("valid date")
            .and_hms_opt(14, 30, 0)
            .expect("valid time");
        assert_eq!(obs.observed_at, expected);
    }

    #[test]
    fn missing_current_weather_is_its_own_error() {
        let body = r#"{"latitude": -6.25, "longitude": 106.8125, "timezone": "Asia/Jakarta"}"#;
        let err = parse_observation(body).unwrap_err();
        assert!(matches!(err, FetchError::MissingCurrentWeather));
    }

    #[test]
    fn malformed_json_is_a_payload_error() {
        let err = parse_observation("not json at all").unwrap_err();
        assert!(matches!(err, FetchError::MalformedPayload(_)));
    }

    #[test]
    fn local_time_accepts_second_resolution() {
        let at = parse_local_time("2024-05-01T14:30:45").expect("seconds should parse");
        assert_eq!(at.second(), 45);
    }

    #[test]
    fn unreadable_time_carries_the_raw_string() {
        let err = parse_local_time("yesterday-ish").unwrap_err();
        assert!(matches!(err, FetchError::BadTimestamp(ref raw) if raw == "yesterday-ish"));
    }

    #[test]
    fn unrecognized_codes_survive_extraction() {
        let body = FIXTURE.replace("\"weathercode\": 95", "\"weathercode\": 42");
        let obs = parse_observation(&body).expect("payload should parse");
        assert_eq!(obs.code, WeatherCode::Unrecognized(42));
    }
}
