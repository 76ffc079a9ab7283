//! Mission page: casualty map with triage list, vehicle drawer, and controls.

use leptos::prelude::*;

use crate::components::casualty_drawer::CasualtyDrawer;
use crate::components::control_panel::ControlPanel;
use crate::components::map_host::MapHost;
use crate::components::uav_drawer::UavDrawer;
use crate::state::casualty_view::CasualtyViewState;
use crate::util::dataset;

#[component]
pub fn CasualtyPage() -> impl IntoView {
    let casualties = Signal::stored(dataset::or_empty("casualty", dataset::casualties()));
    let uavs = Signal::stored(dataset::or_empty("uav", dataset::uavs()));
    let view_state = RwSignal::new(CasualtyViewState::default());

    let triage_filter = Signal::derive(move || view_state.get().triage_filter);
    let focus = Signal::derive(move || view_state.get().camera_focus());
    let active_uav = Signal::derive(move || {
        let state = view_state.get();
        uavs.with(|all| state.active_uav(all).cloned())
    });
    let on_clear_selection = Callback::new(move |()| view_state.update(CasualtyViewState::clear_uav_selection));

    view! {
        <div class="casualty-page">
            <MapHost
                casualties=casualties
                uavs=uavs
                triage_filter=triage_filter
                focus=focus
                editing=Signal::stored(false)
            />
            <CasualtyDrawer casualties=casualties view_state=view_state/>
            <UavDrawer uavs=uavs view_state=view_state/>
            <ControlPanel uavs=uavs active_uav=active_uav on_clear_selection=on_clear_selection/>
        </div>
    }
}
