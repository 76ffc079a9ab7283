//! In-memory `MapSurface` that records every call, shared by the unit tests.

use std::collections::HashMap;

use crate::geo::Point;
use crate::geometry::Geometry;
use crate::surface::{
    Button, ClickEvent, ClickHandler, Cursor, FlyTo, LayerSpec, MapSurface, MarkerSpec, MarkerVisual, SurfaceError,
};

/// Opaque marker handle issued by [`FakeSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FakeMarker(pub u32);

#[derive(Default)]
pub struct FakeSurface {
    pub sources: HashMap<String, Geometry>,
    pub source_writes: usize,
    pub layers: Vec<LayerSpec>,
    pub markers: HashMap<FakeMarker, (MarkerSpec, MarkerVisual)>,
    pub markers_created: usize,
    pub markers_removed: usize,
    pub flights: Vec<FlyTo>,
    pub click: Option<ClickHandler>,
    pub attach_calls: usize,
    pub detach_calls: usize,
    pub cursor: Cursor,
    pub removed: bool,
    pub fail_remove: bool,
    pub fail_markers: bool,
    pub fail_attach: bool,
    next_marker: u32,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a pointer click at `(lat, lng)`.
    pub fn click_at(&self, lat: f64, lng: f64, button: Button) {
        if let Some(handler) = self.click.clone() {
            handler(ClickEvent { lng_lat: Point::new(lat, lng), button });
        }
    }

    pub fn layer_count_for(&self, source: &str) -> usize {
        self.layers.iter().filter(|l| l.source == source).count()
    }

    pub fn visual_of(&self, id: &str) -> Option<MarkerVisual> {
        self.markers.values().find(|(spec, _)| spec.id == id).map(|(_, v)| *v)
    }

    pub fn marker_count_for(&self, id: &str) -> usize {
        self.markers.values().filter(|(spec, _)| spec.id == id).count()
    }
}

impl MapSurface for FakeSurface {
    type Marker = FakeMarker;

    fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    fn add_source(&mut self, id: &str, data: &Geometry) -> Result<(), SurfaceError> {
        if self.removed {
            return Err(SurfaceError::Removed);
        }
        self.sources.insert(id.to_owned(), data.clone());
        Ok(())
    }

    fn set_source_data(&mut self, id: &str, data: &Geometry) -> Result<(), SurfaceError> {
        let Some(slot) = self.sources.get_mut(id) else {
            return Err(SurfaceError::UnknownSource(id.to_owned()));
        };
        *slot = data.clone();
        self.source_writes += 1;
        Ok(())
    }

    fn has_layer(&self, id: &str) -> bool {
        self.layers.iter().any(|l| l.id == id)
    }

    fn add_layer(&mut self, layer: &LayerSpec) -> Result<(), SurfaceError> {
        self.layers.push(layer.clone());
        Ok(())
    }

    fn add_marker(&mut self, spec: &MarkerSpec) -> Result<FakeMarker, SurfaceError> {
        if self.fail_markers {
            return Err(SurfaceError::Js("marker element".to_owned()));
        }
        self.next_marker += 1;
        let handle = FakeMarker(self.next_marker);
        self.markers.insert(handle, (spec.clone(), MarkerVisual::default()));
        self.markers_created += 1;
        Ok(handle)
    }

    fn set_marker_visual(&mut self, marker: &FakeMarker, visual: MarkerVisual) -> Result<(), SurfaceError> {
        if let Some(entry) = self.markers.get_mut(marker) {
            entry.1 = visual;
        }
        Ok(())
    }

    fn remove_marker(&mut self, marker: FakeMarker) -> Result<(), SurfaceError> {
        self.markers.remove(&marker);
        self.markers_removed += 1;
        Ok(())
    }

    fn fly_to(&mut self, flight: &FlyTo) -> Result<(), SurfaceError> {
        self.flights.push(flight.clone());
        Ok(())
    }

    fn attach_click(&mut self, handler: ClickHandler) -> Result<(), SurfaceError> {
        if self.fail_attach {
            return Err(SurfaceError::Js("map is not accepting listeners".to_owned()));
        }
        self.click = Some(handler);
        self.attach_calls += 1;
        Ok(())
    }

    fn detach_click(&mut self) -> Result<(), SurfaceError> {
        self.click = None;
        self.detach_calls += 1;
        Ok(())
    }

    fn set_cursor(&mut self, cursor: Cursor) -> Result<(), SurfaceError> {
        self.cursor = cursor;
        Ok(())
    }

    fn remove(&mut self) -> Result<(), SurfaceError> {
        if self.fail_remove {
            return Err(SurfaceError::Js("context already lost".to_owned()));
        }
        self.removed = true;
        self.sources.clear();
        self.layers.clear();
        Ok(())
    }
}
