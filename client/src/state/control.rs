//! Control panel state: flight mode selection and the geofence load latch.
//!
//! Flight mode and arming have no backend; SET only records the selection
//! locally.

#[cfg(test)]
#[path = "control_test.rs"]
mod control_test;

use mapsync::fence_file::FenceFormat;
use mapsync::latch::{PendingTargetLatch, Settled};
use mapsync::model::{RegionId, Uav};

pub const FLIGHT_MODES: [&str; 7] = ["STABILIZE", "ALT_HOLD", "LOITER", "GUIDED", "AUTO", "RTL", "LAND"];

/// Mode assumed for a vehicle that reports none.
pub const DEFAULT_FLIGHT_MODE: &str = "GUIDED";

#[derive(Clone, Debug, Default)]
pub struct ControlState {
    pub selected_mode: String,
    pub applied_mode: String,
    pub latch: PendingTargetLatch,
    synced_uav_id: Option<String>,
}

impl ControlState {
    /// Re-seed the mode selector when the active vehicle changes. Losing the
    /// active vehicle keeps the last modes.
    pub fn sync_active(&mut self, active: Option<&Uav>) {
        let Some(uav) = active else {
            self.synced_uav_id = None;
            return;
        };
        if self.synced_uav_id.as_deref() == Some(uav.id.as_str()) {
            return;
        }
        let mode = uav.mode.as_deref().filter(|m| !m.is_empty()).unwrap_or(DEFAULT_FLIGHT_MODE);
        self.selected_mode = mode.to_owned();
        self.applied_mode = mode.to_owned();
        self.synced_uav_id = Some(uav.id.clone());
    }

    pub fn select_mode(&mut self, mode: &str) {
        self.selected_mode = mode.to_owned();
    }

    /// SET is enabled only while the selection differs from the applied mode.
    #[must_use]
    pub fn can_apply(&self) -> bool {
        self.selected_mode != self.applied_mode
    }

    /// Record the selection as applied. Returns `false` when there was
    /// nothing to apply.
    pub fn apply_mode(&mut self) -> bool {
        if !self.can_apply() {
            return false;
        }
        self.applied_mode.clone_from(&self.selected_mode);
        true
    }

    /// Freeze the load target for the context active right now.
    pub fn begin_load(&mut self, active_vehicle: Option<&str>) {
        self.latch.arm_for_active(active_vehicle);
    }

    /// Release a pending load whose file could not be read. Returns the
    /// target that was abandoned.
    pub fn fail_load(&mut self) -> Option<RegionId> {
        self.latch.take()
    }

    /// Settle a pending load with the chosen file's text.
    pub fn finish_load(&mut self, contents: &str) -> Settled {
        self.latch.settle(contents, FenceFormat::Strict)
    }
}
