//! Map engine configuration.
//!
//! Every field has a default so a host can deserialize a partial document
//! (or nothing at all) and still get a working map.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::geo::Point;

/// Tunables for the rendering surface, camera flights, and geofence styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Mapbox style URL.
    pub style: String,
    /// Mapbox access token. `None` leaves whatever the page already set.
    pub access_token: Option<String>,
    /// Keep the drawing buffer so the map can be captured as an image.
    pub preserve_drawing_buffer: bool,
    /// Center of the `Idle` camera view.
    pub default_center: Point,
    /// Zoom of the `Idle` camera view.
    pub default_zoom: f64,
    /// Flight speed when returning to the `Idle` view.
    pub idle_speed: f64,
    /// Zoom when focused on an entity.
    pub focus_zoom: f64,
    /// Flight speed when focusing an entity.
    pub focus_speed: f64,
    /// Flight curve when focusing an entity.
    pub focus_curve: f64,
    /// Tint of the global geofence region.
    pub global_fence_color: String,
    /// Opacity of geofence fill layers.
    pub fence_fill_opacity: f64,
    /// Width of geofence outline layers, in pixels.
    pub fence_line_width: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            style: "mapbox://styles/mapbox/dark-v11".to_owned(),
            access_token: None,
            preserve_drawing_buffer: true,
            default_center: Point::new(28.7488, 77.1175),
            default_zoom: 16.0,
            idle_speed: 1.1,
            focus_zoom: 19.0,
            focus_speed: 0.9,
            focus_curve: 1.3,
            global_fence_color: "#9ca3af".to_owned(),
            fence_fill_opacity: 0.25,
            fence_line_width: 2.0,
        }
    }
}

impl MapConfig {
    /// Overlay a (possibly partial) JSON document on the defaults.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `raw` is not valid JSON or a field has the
    /// wrong type.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Builder-style access token override.
    #[must_use]
    pub fn with_access_token(mut self, token: Option<&str>) -> Self {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.access_token = Some(token.to_owned());
        }
        self
    }
}
