//! Vehicle list drawer. Hover previews a vehicle in the control panel; click
//! locks it until clicked again or cleared from the panel.

use leptos::prelude::*;

use mapsync::model::Uav;

use crate::state::casualty_view::CasualtyViewState;

#[component]
pub fn UavDrawer(#[prop(into)] uavs: Signal<Vec<Uav>>, view_state: RwSignal<CasualtyViewState>) -> impl IntoView {
    let collapsed = move || view_state.get().uav_drawer_collapsed;

    let items = move || {
        let locked = view_state.get().locked_uav_id;
        uavs.get()
            .into_iter()
            .map(|uav| {
                let is_locked = locked.as_deref() == Some(uav.id.as_str());
                let hover_id = uav.id.clone();
                let lock_id = uav.id.clone();
                view! {
                    <li
                        class="uav-item"
                        class:active=is_locked
                        on:mouseenter=move |_| view_state.update(|s| s.hover_uav(Some(&hover_id)))
                        on:mouseleave=move |_| view_state.update(|s| s.hover_uav(None))
                        on:click=move |_| view_state.update(|s| s.toggle_lock(&lock_id))
                    >
                        <span class="uav-dot" style=format!("background: {}", uav.id_color)></span>
                        <span class="uav-id">{uav.id}</span>
                        <span class="uav-mode">{uav.mode.unwrap_or_default()}</span>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <aside class="uav-drawer" class:collapsed=collapsed>
            <button
                class="drawer-toggle"
                on:click=move |_| view_state.update(|s| s.uav_drawer_collapsed = !s.uav_drawer_collapsed)
            >
                {move || if collapsed() { "\u{25C0}" } else { "\u{25B6}" }}
            </button>
            <Show when=move || !collapsed()>
                <ul class="uav-list">{items}</ul>
            </Show>
        </aside>
    }
}
