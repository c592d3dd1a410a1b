//! Core library for the Plaza Indonesia weather display.
//!
//! This crate defines:
//! - The domain model and the fixed location constants
//! - Weather-code classification (status label + icon category)
//! - The Open-Meteo provider behind a `WeatherProvider` trait
//! - The display state machine driving loading / error / ready
//! - Timestamp formatting and the map view description
//!
//! It is used by `cuaca-display`, but can also be reused by other hosts
//! that want to mount the widget on a different surface.

pub mod classify;
pub mod format;
pub mod map;
pub mod model;
pub mod provider;
pub mod widget;

pub use classify::{Classification, IconKind, WeatherCode, classify};
pub use format::format_observation_time;
pub use map::{MapView, Marker};
pub use model::{Coordinates, LOCATION_LABEL, PLAZA_INDONESIA, TIMEZONE, WeatherObservation};
pub use provider::{FetchError, WeatherProvider, open_meteo::OpenMeteoProvider};
pub use widget::{DisplayState, WeatherWidget};
