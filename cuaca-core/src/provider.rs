use crate::model::{Coordinates, WeatherObservation};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod open_meteo;

/// Why a fetch failed.
///
/// Callers are not expected to branch on the variant: every failure is
/// presented to the user the same way. The variants exist so the
/// underlying cause can be logged for diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach the weather provider: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather provider answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to parse weather payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("weather payload has no current_weather block")]
    MissingCurrentWeather,

    #[error("unreadable observation time {0:?}")]
    BadTimestamp(String),
}

/// A source of current-weather observations for a coordinate.
///
/// One fetch per call, no retry; the display widget decides what to do
/// with a failure.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_current(
        &self,
        location: Coordinates,
    ) -> Result<WeatherObservation, FetchError>;
}
