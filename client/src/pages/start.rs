//! Start page: mission gate status, mission entry, and global geofence editing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing route. Entry is gated on the bundled mission status; with the
//! gate open but the mission not ready, holding Shift offers an override.
//! The geofencing panel edits the app-wide global fence, so points drawn here
//! are still there on the mission page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use mapsync::fence_file::{self, SAVE_FILE_NAME};
use mapsync::model::{Casualty, FocusTarget, TriageFilter, Uav};

use crate::components::map_host::MapHost;
use crate::state::geofence::GeofenceState;
use crate::state::mission::{ENTER_TRANSITION_MS, Entry, MissionStatus};
use crate::util::notify;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use mapsync::fence_file::FenceFormat;

#[component]
pub fn StartPage() -> impl IntoView {
    let geofence = expect_context::<RwSignal<GeofenceState>>();
    let navigate = use_navigate();

    let status = MissionStatus::bundled().unwrap_or_else(|err| {
        #[cfg(feature = "hydrate")]
        log::error!("bundled mission status is malformed: {err}");
        #[cfg(not(feature = "hydrate"))]
        let _ = err;
        MissionStatus::closed()
    });
    let gate_open = status.gate_open();
    let mission_ready = status.mission_ready;
    let telemetry = status.telemetry_label();
    let gate = status.gate.clone();

    let shift_held = RwSignal::new(false);
    let geofencing = RwSignal::new(false);
    let transitioning = RwSignal::new(false);
    let file_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    {
        let down = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.shift_key() {
                shift_held.set(true);
            }
        });
        let up = window_event_listener(leptos::ev::keyup, move |ev| {
            if !ev.shift_key() {
                shift_held.set(false);
            }
        });
        on_cleanup(move || {
            down.remove();
            up.remove();
        });
    }

    let entry = Memo::new(move |_| status.entry(shift_held.get()));

    let on_enter = move |_| {
        if !entry.get_untracked().allowed() || transitioning.get_untracked() {
            return;
        }
        geofencing.set(false);
        transitioning.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            Timeout::new(ENTER_TRANSITION_MS, move || navigate("/casualty", NavigateOptions::default())).forget();
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, ENTER_TRANSITION_MS, NavigateOptions::default());
    };

    let on_load_click = move |_| {
        #[cfg(feature = "hydrate")]
        if let Some(input) = file_ref.get_untracked() {
            input.click();
        }
    };

    let on_file_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_ref.get_untracked() else {
                return;
            };
            crate::util::file_io::read_selected_text(&input, move |text| {
                let parsed = text.and_then(|t| fence_file::parse(&t, FenceFormat::Lenient).map_err(|e| e.to_string()));
                match parsed {
                    Ok(points) => {
                        log::info!("loaded {} global geofence points", points.len());
                        geofence.update(|g| g.replace_global(points));
                    }
                    Err(message) => {
                        log::warn!("global geofence load rejected: {message}");
                        notify::alert(&message);
                    }
                }
            });
        }
    };

    let on_save = move |_| {
        let saved = geofence.with_untracked(|g| fence_file::to_pretty_json(&g.global)).map_err(|e| e.to_string());
        #[cfg(feature = "hydrate")]
        let saved = saved.and_then(|json| crate::util::file_io::download_json(SAVE_FILE_NAME, &json));
        #[cfg(not(feature = "hydrate"))]
        let saved = saved.map(|_| SAVE_FILE_NAME);
        if let Err(message) = saved {
            notify::alert(&message);
        }
    };

    let point_count = move || geofence.with(|g| g.global.len());

    view! {
        <div class="start-page" class:transitioning=move || transitioning.get()>
            <section class="status-panel">
                <div class="status-row">
                    <span class="status-label">"GATE"</span>
                    <span class="status-value" class:ok=gate_open>{gate}</span>
                </div>
                <div class="status-row">
                    <span class="status-label">"TELEMETRY"</span>
                    <span class="status-value">{telemetry}</span>
                </div>
                <div class="status-row">
                    <span class="status-label">"MISSION READY"</span>
                    <span class="status-value" class:ok=mission_ready>
                        {if mission_ready { "YES" } else { "NO" }}
                    </span>
                </div>
            </section>

            <div class="start-actions">
                <button
                    class="enter-btn"
                    class:bypass=move || entry.get() == Entry::Override
                    disabled=move || !entry.get().allowed()
                    on:click=on_enter
                >
                    {move || entry.get().button_label()}
                </button>
                <button
                    class="geofence-toggle"
                    class:active=move || geofencing.get()
                    on:click=move |_| geofencing.update(|g| *g = !*g)
                >
                    "GEOFENCING"
                </button>
            </div>

            <Show when=move || geofencing.get()>
                <section class="geofence-panel">
                    <MapHost
                        casualties=Signal::stored(Vec::<Casualty>::new())
                        uavs=Signal::stored(Vec::<Uav>::new())
                        triage_filter=Signal::stored(TriageFilter::All)
                        focus=Signal::stored(None::<FocusTarget>)
                        editing=geofencing
                    />
                    <div class="geofence-actions">
                        <button class="action-btn" on:click=on_load_click>"LOAD"</button>
                        <button class="action-btn" on:click=on_save>"SAVE"</button>
                        <button class="action-btn danger" on:click=move |_| geofence.update(GeofenceState::clear_global)>
                            "CLEAR"
                        </button>
                    </div>
                    <footer class="geofence-footer">
                        {move || format!("Click on map to add points \u{2022} {} points", point_count())}
                    </footer>
                </section>
            </Show>

            <input node_ref=file_ref type="file" accept=".json" hidden=true on:change=on_file_change/>
        </div>
    }
}
