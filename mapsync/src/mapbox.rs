//! [`MapSurface`] backed by Mapbox GL JS, bound through `wasm-bindgen`.
//!
//! The page must load the `mapboxgl` global before the engine is created.

use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement};

#[cfg(test)]
#[path = "mapbox_test.rs"]
mod mapbox_test;

use crate::config::MapConfig;
use crate::geo::Point;
use crate::geometry::Geometry;
use crate::surface::{
    Button, ClickEvent, ClickHandler, Cursor, FlyTo, LayerSpec, MapSurface, MarkerSpec, MarkerVisual, SurfaceError,
};

mod ffi {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = mapboxgl)]
        #[derive(Debug, Clone)]
        pub type Map;

        #[wasm_bindgen(constructor, js_namespace = mapboxgl, catch)]
        pub fn new(options: &JsValue) -> Result<Map, JsValue>;

        #[wasm_bindgen(method, catch)]
        pub fn on(this: &Map, event: &str, handler: &js_sys::Function) -> Result<(), JsValue>;

        #[wasm_bindgen(method, catch)]
        pub fn off(this: &Map, event: &str, handler: &js_sys::Function) -> Result<(), JsValue>;

        #[wasm_bindgen(method, js_name = getSource)]
        pub fn get_source(this: &Map, id: &str) -> JsValue;

        #[wasm_bindgen(method, catch, js_name = addSource)]
        pub fn add_source(this: &Map, id: &str, source: &JsValue) -> Result<(), JsValue>;

        #[wasm_bindgen(method, js_name = getLayer)]
        pub fn get_layer(this: &Map, id: &str) -> JsValue;

        #[wasm_bindgen(method, catch, js_name = addLayer)]
        pub fn add_layer(this: &Map, layer: &JsValue) -> Result<(), JsValue>;

        #[wasm_bindgen(method, catch, js_name = flyTo)]
        pub fn fly_to(this: &Map, options: &JsValue) -> Result<(), JsValue>;

        #[wasm_bindgen(method, js_name = getCanvas)]
        pub fn get_canvas(this: &Map) -> web_sys::HtmlCanvasElement;

        #[wasm_bindgen(method)]
        pub fn resize(this: &Map);

        #[wasm_bindgen(method, catch)]
        pub fn remove(this: &Map) -> Result<(), JsValue>;
    }

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = mapboxgl)]
        #[derive(Debug, Clone)]
        pub type Marker;

        #[wasm_bindgen(constructor, js_namespace = mapboxgl, catch)]
        pub fn new(options: &JsValue) -> Result<Marker, JsValue>;

        #[wasm_bindgen(method, js_name = setLngLat)]
        pub fn set_lng_lat(this: &Marker, lng_lat: &JsValue) -> Marker;

        #[wasm_bindgen(method, catch, js_name = addTo)]
        pub fn add_to(this: &Marker, map: &Map) -> Result<Marker, JsValue>;

        #[wasm_bindgen(method)]
        pub fn remove(this: &Marker) -> Marker;
    }
}

/// A live casualty marker and the element it renders.
pub struct MapboxMarker {
    marker: ffi::Marker,
    element: HtmlElement,
}

/// Mapbox GL map plus the event closures registered on it. Closures are kept
/// alive here until [`MapSurface::remove`].
pub struct MapboxSurface {
    map: ffi::Map,
    on_load: Closure<dyn FnMut()>,
    on_context_lost: Closure<dyn FnMut(Event)>,
    click: Option<Closure<dyn FnMut(JsValue)>>,
    removed: bool,
}

/// Unregister the listener held in `slot` with `off`, and drop it only once
/// `off` succeeded. A listener the map still references must stay alive.
fn release_listener<T, E>(slot: &mut Option<T>, off: impl FnOnce(&T) -> Result<(), E>) -> Result<(), E> {
    if let Some(listener) = slot.as_ref() {
        off(listener)?;
    }
    *slot = None;
    Ok(())
}

fn js_error(err: JsValue) -> SurfaceError {
    SurfaceError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn to_js(value: &Value) -> Result<JsValue, SurfaceError> {
    js_sys::JSON::parse(&value.to_string()).map_err(js_error)
}

fn set_field(target: &JsValue, key: &str, value: &JsValue) -> Result<(), SurfaceError> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value).map_err(js_error)?;
    Ok(())
}

fn get_field(target: &JsValue, key: &str) -> Result<JsValue, SurfaceError> {
    js_sys::Reflect::get(target, &JsValue::from_str(key)).map_err(js_error)
}

fn lng_lat(point: Point) -> Result<JsValue, SurfaceError> {
    to_js(&serde_json::json!(point.lng_lat()))
}

/// Read `{lngLat, originalEvent.button}` from a Mapbox mouse event.
fn click_event(raw: &JsValue) -> Result<ClickEvent, SurfaceError> {
    let at = get_field(raw, "lngLat")?;
    let (Some(lat), Some(lng)) = (get_field(&at, "lat")?.as_f64(), get_field(&at, "lng")?.as_f64()) else {
        return Err(SurfaceError::Js("click event without coordinates".to_owned()));
    };
    let original = get_field(raw, "originalEvent")?;
    let code = if original.is_object() { get_field(&original, "button")?.as_f64().unwrap_or(0.0) } else { 0.0 };
    #[allow(clippy::cast_possible_truncation)]
    let button = Button::from_dom(code as i16);
    Ok(ClickEvent { lng_lat: Point::new(lat, lng), button })
}

impl MapboxSurface {
    /// Create a map inside `container`. `on_load` runs when the style has
    /// loaded; the canvas is resized at the same moment.
    ///
    /// # Errors
    ///
    /// Fails if `mapboxgl` is missing or the constructor throws.
    pub fn new(container: &HtmlElement, config: &MapConfig, mut on_load: impl FnMut() + 'static) -> Result<Self, SurfaceError> {
        if let Some(token) = &config.access_token {
            let library = get_field(&js_sys::global(), "mapboxgl")?;
            if library.is_undefined() {
                return Err(SurfaceError::Js("mapboxgl is not loaded".to_owned()));
            }
            set_field(&library, "accessToken", &JsValue::from_str(token))?;
        }

        let options = to_js(&serde_json::json!({
            "style": config.style,
            "center": config.default_center.lng_lat(),
            "zoom": config.default_zoom,
            "preserveDrawingBuffer": config.preserve_drawing_buffer,
        }))?;
        set_field(&options, "container", container)?;
        let map = ffi::Map::new(&options).map_err(js_error)?;

        let resize_target = map.clone();
        let on_load = Closure::<dyn FnMut()>::new(move || {
            resize_target.resize();
            on_load();
        });
        map.on("load", on_load.as_ref().unchecked_ref()).map_err(js_error)?;

        let on_context_lost = Closure::<dyn FnMut(Event)>::new(|event: Event| {
            log::warn!("map rendering context lost");
            event.prevent_default();
        });
        map.get_canvas()
            .add_event_listener_with_callback("webglcontextlost", on_context_lost.as_ref().unchecked_ref())
            .map_err(js_error)?;

        Ok(Self { map, on_load, on_context_lost, click: None, removed: false })
    }

    fn guard(&self) -> Result<(), SurfaceError> {
        if self.removed { Err(SurfaceError::Removed) } else { Ok(()) }
    }

    fn marker_element(spec: &MarkerSpec) -> Result<HtmlElement, SurfaceError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| SurfaceError::Js("no document".to_owned()))?;
        let element: HtmlElement = document.create_element("div").map_err(js_error)?.unchecked_into();
        element.set_class_name(&format!("casualty-marker triage-{}", spec.triage.as_str()));
        element.set_text_content(Some(&spec.label));
        element.style().set_property("--id-color", &spec.id_color).map_err(js_error)?;
        element.set_attribute("data-casualty-id", &spec.id).map_err(js_error)?;
        Ok(element)
    }
}

impl MapSurface for MapboxSurface {
    type Marker = MapboxMarker;

    fn has_source(&self, id: &str) -> bool {
        !self.removed && !self.map.get_source(id).is_undefined()
    }

    fn add_source(&mut self, id: &str, data: &Geometry) -> Result<(), SurfaceError> {
        self.guard()?;
        let source = to_js(&serde_json::json!({ "type": "geojson", "data": data.to_geojson() }))?;
        self.map.add_source(id, &source).map_err(js_error)
    }

    fn set_source_data(&mut self, id: &str, data: &Geometry) -> Result<(), SurfaceError> {
        self.guard()?;
        let source = self.map.get_source(id);
        if source.is_undefined() {
            return Err(SurfaceError::UnknownSource(id.to_owned()));
        }
        let set_data: js_sys::Function = get_field(&source, "setData")?
            .dyn_into()
            .map_err(|_| SurfaceError::Js(format!("source `{id}` has no setData")))?;
        set_data.call1(&source, &to_js(&data.to_geojson())?).map_err(js_error)?;
        Ok(())
    }

    fn has_layer(&self, id: &str) -> bool {
        !self.removed && !self.map.get_layer(id).is_undefined()
    }

    fn add_layer(&mut self, layer: &LayerSpec) -> Result<(), SurfaceError> {
        self.guard()?;
        self.map.add_layer(&to_js(&layer.to_style())?).map_err(js_error)
    }

    fn add_marker(&mut self, spec: &MarkerSpec) -> Result<MapboxMarker, SurfaceError> {
        self.guard()?;
        let element = Self::marker_element(spec)?;
        let options = js_sys::Object::new();
        set_field(&options, "element", &element)?;
        let marker = ffi::Marker::new(&options).map_err(js_error)?;
        marker.set_lng_lat(&lng_lat(spec.position)?);
        marker.add_to(&self.map).map_err(js_error)?;
        Ok(MapboxMarker { marker, element })
    }

    fn set_marker_visual(&mut self, marker: &MapboxMarker, visual: MarkerVisual) -> Result<(), SurfaceError> {
        let classes = marker.element.class_list();
        classes.toggle_with_force("hidden", visual.hidden).map_err(js_error)?;
        classes.toggle_with_force("focused", visual.focused).map_err(js_error)?;
        Ok(())
    }

    fn remove_marker(&mut self, marker: MapboxMarker) -> Result<(), SurfaceError> {
        marker.marker.remove();
        Ok(())
    }

    fn fly_to(&mut self, flight: &FlyTo) -> Result<(), SurfaceError> {
        self.guard()?;
        self.map.fly_to(&to_js(&flight.to_options())?).map_err(js_error)
    }

    fn attach_click(&mut self, handler: ClickHandler) -> Result<(), SurfaceError> {
        self.guard()?;
        self.detach_click()?;
        let closure = Closure::<dyn FnMut(JsValue)>::new(move |raw: JsValue| {
            match click_event(&raw) {
                Ok(event) => handler(event),
                Err(err) => log::warn!("ignored map click: {err}"),
            }
        });
        self.map.on("click", closure.as_ref().unchecked_ref()).map_err(js_error)?;
        self.click = Some(closure);
        Ok(())
    }

    fn detach_click(&mut self) -> Result<(), SurfaceError> {
        let map = &self.map;
        release_listener(&mut self.click, |closure| map.off("click", closure.as_ref().unchecked_ref()).map_err(js_error))
    }

    fn set_cursor(&mut self, cursor: Cursor) -> Result<(), SurfaceError> {
        self.guard()?;
        self.map.get_canvas().style().set_property("cursor", cursor.css()).map_err(js_error)
    }

    fn remove(&mut self) -> Result<(), SurfaceError> {
        self.guard()?;
        self.removed = true;
        self.detach_click()?;
        self.map.off("load", self.on_load.as_ref().unchecked_ref()).map_err(js_error)?;
        self.map
            .get_canvas()
            .remove_event_listener_with_callback("webglcontextlost", self.on_context_lost.as_ref().unchecked_ref())
            .map_err(js_error)?;
        self.map.remove().map_err(js_error)
    }
}
