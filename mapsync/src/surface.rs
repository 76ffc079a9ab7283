//! The rendering surface seam.
//!
//! [`MapSurface`] is everything the engine needs from a retained-mode map: named
//! geometry sources, layers bound to them, positioned markers, animated camera
//! flights, a click listener, and a cursor. The browser implementation lives in
//! [`crate::mapbox`]; tests drive the engine through an in-memory fake.
//!
//! The surface owns long-lived objects. Callers are expected to ask before
//! creating (`has_source`, `has_layer`) and to keep the marker handles they get
//! back rather than recreating markers.

use std::rc::Rc;

use serde_json::Value;
use thiserror::Error;

use crate::geo::Point;
use crate::geometry::Geometry;
use crate::model::Triage;

/// Failure reported by the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The surface has no source with this id.
    #[error("unknown source `{0}`")]
    UnknownSource(String),
    /// The surface was already removed.
    #[error("surface has been removed")]
    Removed,
    /// The underlying JavaScript call threw.
    #[error("map call failed: {0}")]
    Js(String),
}

/// Pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// A click on the surface, already projected to geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    pub lng_lat: Point,
    pub button: Button,
}

/// Listener installed on the surface while click capture is active.
pub type ClickHandler = Rc<dyn Fn(ClickEvent)>;

/// Pointer cursor shown over the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Whatever the surface normally shows.
    #[default]
    Default,
    /// Edit mode: clicks add points.
    Crosshair,
}

impl Cursor {
    /// CSS `cursor` value. The default cursor clears the inline style.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Crosshair => "crosshair",
        }
    }
}

/// Kind of a geofence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Fill,
    Line,
}

/// A visual layer bound to a source.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpec {
    pub id: String,
    pub source: String,
    pub kind: LayerKind,
    pub color: String,
    /// Fill opacity for fill layers, stroke width for line layers.
    pub weight: f64,
}

impl LayerSpec {
    /// Mapbox style-spec layer document.
    #[must_use]
    pub fn to_style(&self) -> Value {
        match self.kind {
            LayerKind::Fill => serde_json::json!({
                "id": self.id,
                "type": "fill",
                "source": self.source,
                "paint": {
                    "fill-color": ["literal", self.color],
                    "fill-opacity": self.weight,
                },
            }),
            LayerKind::Line => serde_json::json!({
                "id": self.id,
                "type": "line",
                "source": self.source,
                "paint": {
                    "line-color": ["literal", self.color],
                    "line-width": self.weight,
                },
            }),
        }
    }
}

/// Everything needed to create a casualty marker. Position is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub id: String,
    pub position: Point,
    pub label: String,
    pub triage: Triage,
    pub id_color: String,
}

/// Presentational state of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkerVisual {
    pub hidden: bool,
    pub focused: bool,
}

/// An animated camera move.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyTo {
    pub center: Point,
    pub zoom: f64,
    pub speed: f64,
    pub curve: Option<f64>,
    /// Not interruptible by ordinary user interaction.
    pub essential: bool,
}

impl FlyTo {
    /// Options object for `Map#flyTo`.
    #[must_use]
    pub fn to_options(&self) -> Value {
        let mut options = serde_json::json!({
            "center": self.center.lng_lat(),
            "zoom": self.zoom,
            "speed": self.speed,
        });
        if let Some(map) = options.as_object_mut() {
            if let Some(curve) = self.curve {
                map.insert("curve".to_owned(), Value::from(curve));
            }
            if self.essential {
                map.insert("essential".to_owned(), Value::Bool(true));
            }
        }
        options
    }
}

/// A retained-mode map the engine keeps in sync.
pub trait MapSurface {
    /// Handle to a live marker object.
    type Marker;

    fn has_source(&self, id: &str) -> bool;

    /// Create a geometry source.
    ///
    /// # Errors
    ///
    /// Fails if the surface rejects the source.
    fn add_source(&mut self, id: &str, data: &Geometry) -> Result<(), SurfaceError>;

    /// Replace a source's data wholesale.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::UnknownSource`] if the source does not exist.
    fn set_source_data(&mut self, id: &str, data: &Geometry) -> Result<(), SurfaceError>;

    fn has_layer(&self, id: &str) -> bool;

    /// # Errors
    ///
    /// Fails if the surface rejects the layer.
    fn add_layer(&mut self, layer: &LayerSpec) -> Result<(), SurfaceError>;

    /// Create and place a marker.
    ///
    /// # Errors
    ///
    /// Fails if the marker element cannot be created.
    fn add_marker(&mut self, spec: &MarkerSpec) -> Result<Self::Marker, SurfaceError>;

    /// # Errors
    ///
    /// Fails if the marker element cannot be updated.
    fn set_marker_visual(&mut self, marker: &Self::Marker, visual: MarkerVisual) -> Result<(), SurfaceError>;

    /// # Errors
    ///
    /// Fails if the marker cannot be detached.
    fn remove_marker(&mut self, marker: Self::Marker) -> Result<(), SurfaceError>;

    /// # Errors
    ///
    /// Fails if the flight cannot be started.
    fn fly_to(&mut self, flight: &FlyTo) -> Result<(), SurfaceError>;

    /// Install the click listener. At most one is installed at a time.
    ///
    /// # Errors
    ///
    /// Fails if the listener cannot be registered.
    fn attach_click(&mut self, handler: ClickHandler) -> Result<(), SurfaceError>;

    /// Remove the click listener, if any.
    ///
    /// # Errors
    ///
    /// Fails if the listener cannot be deregistered.
    fn detach_click(&mut self) -> Result<(), SurfaceError>;

    /// # Errors
    ///
    /// Fails if the cursor style cannot be written.
    fn set_cursor(&mut self, cursor: Cursor) -> Result<(), SurfaceError>;

    /// Destroy the surface and release every native object it owns.
    ///
    /// # Errors
    ///
    /// Fails if the underlying map throws while tearing down.
    fn remove(&mut self) -> Result<(), SurfaceError>;
}
