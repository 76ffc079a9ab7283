//! Casualty list drawer with triage filter buttons.
//!
//! Hovering a row focuses that casualty on the map; leaving the row clears
//! the focus.

use leptos::prelude::*;

use mapsync::model::{Casualty, TriageFilter};

use crate::state::casualty_view::CasualtyViewState;

#[component]
pub fn CasualtyDrawer(
    #[prop(into)] casualties: Signal<Vec<Casualty>>,
    view_state: RwSignal<CasualtyViewState>,
) -> impl IntoView {
    let collapsed = move || view_state.get().drawer_collapsed;

    let filter_buttons = move || {
        TriageFilter::ALL
            .into_iter()
            .map(|filter| {
                view! {
                    <button
                        class=format!("triage-btn triage-{}", filter.as_str())
                        class:active=move || view_state.get().triage_filter == filter
                        on:click=move |_| view_state.update(|s| s.triage_filter = filter)
                    >
                        {filter.as_str().to_uppercase()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let rows = move || {
        let state = view_state.get();
        casualties.with(|all| {
            state
                .visible(all)
                .into_iter()
                .map(|casualty| {
                    let hover_id = casualty.id.clone();
                    let focused = state.focused_id.as_deref() == Some(casualty.id.as_str());
                    view! {
                        <li
                            class=format!("casualty-row triage-{}", casualty.triage.as_str())
                            class:focused=focused
                            on:mouseenter=move |_| view_state.update(|s| s.hover_casualty(&hover_id))
                            on:mouseleave=move |_| view_state.update(CasualtyViewState::leave_casualty)
                        >
                            <span class="casualty-dot" style=format!("background: {}", casualty.id_color)></span>
                            <span class="casualty-id">{casualty.id.clone()}</span>
                            <span class="casualty-triage">{casualty.triage.as_str().to_uppercase()}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <aside class="casualty-drawer" class:collapsed=collapsed>
            <button
                class="drawer-toggle"
                on:click=move |_| view_state.update(|s| s.drawer_collapsed = !s.drawer_collapsed)
            >
                {move || if collapsed() { "\u{25B6}" } else { "\u{25C0}" }}
            </button>
            <Show when=move || !collapsed()>
                <div class="triage-filters">{filter_buttons}</div>
                <ul class="casualty-list">{rows}</ul>
            </Show>
        </aside>
    }
}
