// src/surface/leaflet.rs

use crate::domain::LatLng;
use crate::surface::{Element, MapSurface, MarkerId, TileLayer};
use maud::Markup;
use serde_json::json;
use std::fmt::Write;

#[derive(Debug, Clone)]
struct MarkerState {
    at: LatLng,
    popup: Option<String>,
    on_map: bool,
}

/// Map state recorded in memory and replayed in the browser as a Leaflet
/// bootstrap script.
#[derive(Debug, Clone)]
pub struct LeafletMap {
    container: Element,
    view: Option<(LatLng, u8)>,
    tile_layers: Vec<TileLayer>,
    markers: Vec<MarkerState>,
    open_popup: Option<MarkerId>,
}

impl LeafletMap {
    /// Binds a new map to `container`.
    pub fn new(container: Element) -> Self {
        Self {
            container,
            view: None,
            tile_layers: Vec::new(),
            markers: Vec::new(),
            open_popup: None,
        }
    }

    fn is_on_map(&self, marker: MarkerId) -> bool {
        self.markers.get(marker.0).is_some_and(|m| m.on_map)
    }

    /// JavaScript that rebuilds this map state with Leaflet (`L` global).
    pub fn script(&self) -> String {
        let mut js = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_script(&mut js);
        // Popup markup may contain `</`, which must not close the script tag.
        js.replace("</", "<\\/")
    }

    fn write_script(&self, js: &mut String) -> std::fmt::Result {
        writeln!(js, "(function () {{")?;
        writeln!(js, "  const map = L.map({});", json!(self.container.id()))?;
        if let Some((center, zoom)) = self.view {
            writeln!(js, "  map.setView([{}, {}], {});", center.lat, center.lng, zoom)?;
        }
        for layer in &self.tile_layers {
            let options = json!({
                "maxZoom": layer.max_zoom,
                "attribution": layer.attribution,
            });
            writeln!(
                js,
                "  L.tileLayer({}, {}).addTo(map);",
                json!(layer.url_template),
                options
            )?;
        }
        writeln!(js, "  const markers = [];")?;
        for (i, marker) in self.markers.iter().enumerate() {
            write!(js, "  markers[{i}] = L.marker([{}, {}])", marker.at.lat, marker.at.lng)?;
            if let Some(popup) = &marker.popup {
                write!(js, ".bindPopup({})", json!(popup))?;
            }
            if marker.on_map {
                write!(js, ".addTo(map)")?;
            }
            writeln!(js, ";")?;
        }
        if let Some(MarkerId(i)) = self.open_popup {
            if self.is_on_map(MarkerId(i)) {
                writeln!(js, "  markers[{i}].openPopup();")?;
            }
        }
        writeln!(js, "}})();")
    }

    fn marker_mut(&mut self, marker: MarkerId) -> Option<&mut MarkerState> {
        self.markers.get_mut(marker.0)
    }
}

impl MapSurface for LeafletMap {
    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.view = Some((center, zoom));
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.tile_layers.push(layer.clone());
    }

    fn create_marker(&mut self, at: LatLng) -> MarkerId {
        self.markers.push(MarkerState {
            at,
            popup: None,
            on_map: false,
        });
        MarkerId(self.markers.len() - 1)
    }

    fn bind_popup(&mut self, marker: MarkerId, popup: Markup) {
        if let Some(m) = self.marker_mut(marker) {
            m.popup = Some(popup.into_string());
        }
    }

    fn add_marker(&mut self, marker: MarkerId) {
        if let Some(m) = self.marker_mut(marker) {
            m.on_map = true;
        }
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        if let Some(m) = self.marker_mut(marker) {
            m.on_map = false;
        }
        if self.open_popup == Some(marker) {
            self.open_popup = None;
        }
    }

    fn open_popup(&mut self, marker: MarkerId) {
        if marker.0 < self.markers.len() {
            self.open_popup = Some(marker);
        }
    }
}
