use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::classify::WeatherCode;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// The single location this display operates on.
///
/// Both the weather request and the map marker must reference this
/// constant; it is the only place the coordinate is written down.
pub const PLAZA_INDONESIA: Coordinates = Coordinates { lat: -6.1931, lon: 106.8217 };

/// Popup/heading label for the fixed location.
pub const LOCATION_LABEL: &str = "Plaza Indonesia";

/// IANA timezone the provider is asked to localize timestamps to.
pub const TIMEZONE: &str = "Asia/Jakarta";

/// One current-weather reading, as extracted from the provider payload.
///
/// Created once per successful fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub code: WeatherCode,
    /// Local wall-clock time of the observation, already in `timezone`.
    pub observed_at: NaiveDateTime,
    /// Timezone label reported back by the provider, e.g. "Asia/Jakarta".
    pub timezone: String,
}
