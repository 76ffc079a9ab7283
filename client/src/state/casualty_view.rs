//! Mission page view state: triage filter, hover focus, and vehicle selection.

#[cfg(test)]
#[path = "casualty_view_test.rs"]
mod casualty_view_test;

use mapsync::model::{Casualty, FocusTarget, TriageFilter, Uav};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CasualtyViewState {
    pub triage_filter: TriageFilter,
    /// Casualty under the pointer in the list.
    pub focused_id: Option<String>,
    pub hovered_uav_id: Option<String>,
    pub locked_uav_id: Option<String>,
    pub drawer_collapsed: bool,
    pub uav_drawer_collapsed: bool,
}

impl CasualtyViewState {
    /// Casualties the list shows under the current filter.
    #[must_use]
    pub fn visible<'a>(&self, casualties: &'a [Casualty]) -> Vec<&'a Casualty> {
        casualties.iter().filter(|c| self.triage_filter.admits(c.triage)).collect()
    }

    pub fn hover_casualty(&mut self, id: &str) {
        self.focused_id = Some(id.to_owned());
    }

    pub fn leave_casualty(&mut self) {
        self.focused_id = None;
    }

    pub fn hover_uav(&mut self, id: Option<&str>) {
        self.hovered_uav_id = id.map(str::to_owned);
    }

    /// Lock `id`, or release it if it is already locked.
    pub fn toggle_lock(&mut self, id: &str) {
        if self.locked_uav_id.as_deref() == Some(id) {
            self.locked_uav_id = None;
        } else {
            self.locked_uav_id = Some(id.to_owned());
        }
    }

    pub fn clear_uav_selection(&mut self) {
        self.locked_uav_id = None;
        self.hovered_uav_id = None;
    }

    /// The locked vehicle, else the hovered one. Ids with no matching vehicle
    /// are skipped.
    #[must_use]
    pub fn active_uav<'a>(&self, uavs: &'a [Uav]) -> Option<&'a Uav> {
        let find = |id: &Option<String>| id.as_deref().and_then(|id| uavs.iter().find(|u| u.id == id));
        find(&self.locked_uav_id).or_else(|| find(&self.hovered_uav_id))
    }

    /// What the map camera should follow.
    #[must_use]
    pub fn camera_focus(&self) -> Option<FocusTarget> {
        self.focused_id.clone().map(FocusTarget::Casualty)
    }
}
