//! Text rendering of the display states.
//!
//! Loading and Error each render a single line and return early, so the
//! map only ever appears below a loaded weather card.

use std::io::{self, Write};

use cuaca_core::{DisplayState, LOCATION_LABEL, MapView, classify, format_observation_time};

use crate::icons;

/// Render the widget state to a text surface.
pub fn render(state: &DisplayState, out: &mut impl Write) -> io::Result<()> {
    let observation = match state {
        DisplayState::Loading => {
            writeln!(out, "Loading...")?;
            return Ok(());
        }
        DisplayState::Error => {
            writeln!(out, "Failed to fetch weather data")?;
            return Ok(());
        }
        DisplayState::Ready(observation) => observation,
    };

    let classification = classify(observation.code);

    writeln!(out, "Weather Information for {LOCATION_LABEL}")?;
    writeln!(out)?;
    writeln!(out, "{}", icons::animation_for(classification.icon).first_frame())?;
    writeln!(out)?;
    writeln!(out, "Date: {}", format_observation_time(observation.observed_at))?;
    writeln!(out, "Temperature: {}°C", observation.temperature_c)?;
    writeln!(out, "Wind Speed: {} km/h", observation.wind_speed_kmh)?;
    writeln!(out, "Timezone: {}", observation.timezone)?;
    writeln!(out, "Weather Status: {}", classification.status)?;
    writeln!(out)?;

    render_map(&MapView::plaza_indonesia(), out)
}

/// Text rendition of the map view: center, zoom, marker popup and a
/// link that opens the same view in a browser.
fn render_map(view: &MapView, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "Map: {lat:.4}, {lon:.4} (zoom {zoom}, {w}x{h})",
        lat = view.center.lat,
        lon = view.center.lon,
        zoom = view.zoom,
        w = view.width_px,
        h = view.height_px,
    )?;
    writeln!(out, "  [*] {}", view.marker.popup_label)?;
    writeln!(out, "  {}", view.osm_link())?;
    Ok(())
}
