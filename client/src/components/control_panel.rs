//! Bottom control panel: vehicle overview, flight mode, and geofence loading.
//!
//! DESIGN
//! ======
//! LOAD GEOFENCE arms the pending-target latch before the file dialog opens,
//! and the file handler applies whatever the latch froze. The hidden file
//! input lives outside the mode switch so a selection change while the
//! dialog is open cannot unmount it.

use leptos::prelude::*;

use mapsync::model::Uav;

use crate::state::control::{ControlState, FLIGHT_MODES};
use crate::state::geofence::GeofenceState;

#[cfg(feature = "hydrate")]
use crate::util::notify;
#[cfg(feature = "hydrate")]
use mapsync::latch::Settled;

/// Control panel in global mode (no active vehicle) or vehicle mode.
#[component]
pub fn ControlPanel(
    #[prop(into)] uavs: Signal<Vec<Uav>>,
    #[prop(into)] active_uav: Signal<Option<Uav>>,
    on_clear_selection: Callback<()>,
) -> impl IntoView {
    let geofence = expect_context::<RwSignal<GeofenceState>>();
    let control = RwSignal::new(ControlState::default());
    let file_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        let active = active_uav.get();
        control.update(|c| c.sync_active(active.as_ref()));
    });

    let on_load_click = move |_| {
        let active_id = active_uav.with_untracked(|a| a.as_ref().map(|u| u.id.clone()));
        control.update(|c| c.begin_load(active_id.as_deref()));
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
            if !control.with_untracked(|c| c.latch.is_armed()) {
                input.set_value("");
                log::debug!("file chosen with no pending load; ignored");
                return;
            }
            crate::util::file_io::read_selected_text(&input, move |text| {
                let settled = match text {
                    Ok(text) => control.try_update(|c| c.finish_load(&text)),
                    Err(err) => {
                        log::warn!("could not read geofence file: {err}");
                        control.update(|c| {
                            c.fail_load();
                        });
                        notify::alert(&err);
                        None
                    }
                };
                match settled {
                    Some(Settled::Applied { target, points }) => {
                        log::info!("loaded {} geofence points for {target}", points.len());
                        geofence.update(|g| g.apply(&target, points));
                    }
                    Some(Settled::Rejected { error, .. }) => notify::alert(&error.to_string()),
                    Some(Settled::NotArmed) | None => {}
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = geofence;
    };

    let global_mode = move || {
        view! {
            <div class="control-panel global">
                <div class="uav-group">
                    {move || {
                        uavs.get()
                            .into_iter()
                            .map(|uav| {
                                view! {
                                    <div class="uav-chip">
                                        <span class="uav-dot" style=format!("background: {}", uav.id_color)></span>
                                        <span>{uav.id}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <div class="global-actions">
                    <button class="action-btn primary" on:click=on_load_click>
                        "LOAD GEOFENCE"
                    </button>
                    <button class="action-btn primary">"START MISSION"</button>
                    <button class="action-btn danger">"LAND ALL UAVs"</button>
                </div>
            </div>
        }
    };

    let uav_mode = move |uav: Uav| {
        view! {
            <div class="control-panel active" style=format!("--uav-color: {}", uav.id_color)>
                <div class="uav-indicator">
                    <span class="uav-dot"></span>
                    <span>{uav.id.clone()}</span>
                </div>

                <div class="mode-control">
                    <span class="section-label">"Flight Mode"</span>
                    <select
                        class="mode-select"
                        prop:value=move || control.get().selected_mode
                        on:change=move |ev| control.update(|c| c.select_mode(&event_target_value(&ev)))
                    >
                        {FLIGHT_MODES
                            .iter()
                            .map(|mode| view! { <option value=*mode>{*mode}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <button
                        class="mode-set-btn"
                        class:pending=move || control.get().can_apply()
                        class:applied=move || !control.get().can_apply()
                        disabled=move || !control.get().can_apply()
                        on:click=move |_| {
                            control.update(|c| {
                                c.apply_mode();
                            });
                        }
                    >
                        "SET"
                    </button>
                </div>

                <div class="action-section">
                    <span class="section-label">"Arming"</span>
                    <div class="action-row">
                        <button class="action-btn blue">"ARM"</button>
                        <button class="action-btn orange">"DISARM"</button>
                        <button class="action-btn red">"FORCE ARM"</button>
                    </div>
                </div>

                <div class="action-section">
                    <span class="section-label">"System"</span>
                    <div class="action-row">
                        <button class="action-btn orange">"PRELAUNCH REBOOT"</button>
                        <button class="action-btn orange">"AUTOPILOT REBOOT"</button>
                        <button class="action-btn red">"KILL MOTORS"</button>
                    </div>
                </div>

                <button class="action-btn primary load-geofence" on:click=on_load_click>
                    "LOAD GEOFENCE"
                </button>
                <button class="action-btn ghost" on:click=move |_| on_clear_selection.run(())>
                    "\u{2190} ALL UAVs"
                </button>
            </div>
        }
    };

    view! {
        {move || match active_uav.get() {
            None => global_mode().into_any(),
            Some(uav) => uav_mode(uav).into_any(),
        }}
        <input node_ref=file_ref type="file" accept=".json" hidden=true on:change=on_file_change/>
    }
}
