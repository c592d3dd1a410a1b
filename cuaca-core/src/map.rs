use crate::model::{Coordinates, LOCATION_LABEL, PLAZA_INDONESIA};

/// OpenStreetMap raster tiles, the layer the display embeds.
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Marker glyph used instead of the map widget's default pin.
pub const MARKER_ICON_URL: &str = "https://leafletjs.com/examples/custom-icons/leaf-green.png";

/// A marker on the map with a popup label.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: Coordinates,
    pub icon_url: &'static str,
    pub popup_label: &'static str,
}

/// Everything a map surface needs to draw the location map: center,
/// zoom, pixel size, tile layer and the single marker.
///
/// This is plain data; rendering belongs to whatever map widget the
/// host embeds.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub width_px: u32,
    pub height_px: u32,
    pub tile_url: &'static str,
    pub marker: Marker,
}

impl MapView {
    /// The one map this display ever shows: centered on the fixed
    /// location, zoom 15, with a single labeled marker on the same
    /// coordinate the weather fetch uses.
    pub fn plaza_indonesia() -> Self {
        Self {
            center: PLAZA_INDONESIA,
            zoom: 15,
            width_px: 600,
            height_px: 400,
            tile_url: TILE_URL,
            marker: Marker {
                position: PLAZA_INDONESIA,
                icon_url: MARKER_ICON_URL,
                popup_label: LOCATION_LABEL,
            },
        }
    }

    /// Shareable OpenStreetMap link for the same view, for surfaces
    /// that cannot embed tiles.
    pub fn osm_link(&self) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map={zoom}/{lat}/{lon}",
            lat = self.center.lat,
            lon = self.center.lon,
            zoom = self.zoom,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_center_matches_the_fetch_coordinate() {
        let view = MapView::plaza_indonesia();
        assert_eq!(view.center, PLAZA_INDONESIA);
        assert_eq!(view.marker.position, view.center);
    }

    #[test]
    fn map_uses_the_fixed_zoom_and_label() {
        let view = MapView::plaza_indonesia();
        assert_eq!(view.zoom, 15);
        assert_eq!(view.marker.popup_label, "Plaza Indonesia");
    }

    #[test]
    fn osm_link_encodes_center_and_zoom() {
        let link = MapView::plaza_indonesia().osm_link();
        assert!(link.contains("mlat=-6.1931"));
        assert!(link.contains("mlon=106.8217"));
        assert!(link.contains("#map=15/"));
    }
}
