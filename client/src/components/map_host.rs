//! Bridge component between Leptos state and the imperative `mapsync::engine::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The engine owns every long-lived map object. This host mounts it once,
//! flips a readiness signal from the map's load event, and runs one reconcile
//! pass whenever any input signal changes. The engine is shared only by this
//! host's effects, so disposing them drops it, and dropping it tears the map
//! down.

use leptos::prelude::*;

use mapsync::model::{Casualty, FocusTarget, TriageFilter, Uav};

use crate::state::geofence::GeofenceState;

#[cfg(feature = "hydrate")]
use mapsync::click::AddPointHandler;
#[cfg(feature = "hydrate")]
use mapsync::config::MapConfig;
#[cfg(feature = "hydrate")]
use mapsync::engine::{Engine, Scene};
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

/// Map host component.
///
/// Geofences come from the app-wide [`GeofenceState`]. While `editing` is
/// true, primary clicks on the map append to the global fence.
#[component]
pub fn MapHost(
    #[prop(into)] casualties: Signal<Vec<Casualty>>,
    #[prop(into)] uavs: Signal<Vec<Uav>>,
    #[prop(into)] triage_filter: Signal<TriageFilter>,
    #[prop(into)] focus: Signal<Option<FocusTarget>>,
    #[prop(into)] editing: Signal<bool>,
) -> impl IntoView {
    let geofence = expect_context::<RwSignal<GeofenceState>>();
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let ready = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let engine = Rc::new(RefCell::new(None::<Engine>));

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(container) = container_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let config = MapConfig::default().with_access_token(option_env!("MAPBOX_ACCESS_TOKEN"));
            match Engine::new(&container, config, move || ready.set(true)) {
                Ok(instance) => *engine.borrow_mut() = Some(instance),
                Err(err) => log::error!("failed to mount map: {err}"),
            }
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let add_point: AddPointHandler = Rc::new(move |point| geofence.update(|g| g.add_global_point(point)));
        Effect::new(move || {
            if !ready.get() {
                return;
            }
            let casualties = casualties.get();
            let uavs = uavs.get();
            let triage_filter = triage_filter.get();
            let focus = focus.get();
            let editing = editing.get();
            let fences = geofence.get();

            let mut slot = engine.borrow_mut();
            let Some(engine) = slot.as_mut() else {
                return;
            };
            if !engine.core.is_ready() {
                engine.mark_ready(&uavs);
            }
            engine.reconcile(&Scene {
                uavs: &uavs,
                casualties: &casualties,
                triage_filter,
                focus: focus.as_ref(),
                global_fence: &fences.global,
                vehicle_fences: &fences.vehicles,
                on_add_point: editing.then_some(&add_point),
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (casualties, uavs, triage_filter, focus, editing, geofence, ready);

    view! { <div class="map-host" node_ref=container_ref></div> }
}
