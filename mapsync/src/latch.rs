//! Pending-target latch for asynchronous geofence loads.
//!
//! The target region is captured the instant a load is initiated and consumed
//! exactly once when the file resolves. Selection changes in between cannot
//! redirect the load, because the resolution path never consults the live
//! selection, only the latch.

#[cfg(test)]
#[path = "latch_test.rs"]
mod latch_test;

use crate::fence_file::{self, FenceFileError, FenceFormat};
use crate::geo::Point;
use crate::model::RegionId;

/// Latch state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PendingTarget {
    #[default]
    Idle,
    ArmedForGlobal,
    ArmedForVehicle(String),
}

impl PendingTarget {
    fn region(&self) -> Option<RegionId> {
        match self {
            Self::Idle => None,
            Self::ArmedForGlobal => Some(RegionId::Global),
            Self::ArmedForVehicle(id) => Some(RegionId::Vehicle(id.clone())),
        }
    }
}

/// How a resolved load settled. The latch is `Idle` after every variant.
#[derive(Debug)]
pub enum Settled {
    /// Valid points for the frozen target.
    Applied { target: RegionId, points: Vec<Point> },
    /// File rejected; nothing to apply.
    Rejected { target: RegionId, error: FenceFileError },
    /// A file resolved with no load in flight; ignored.
    NotArmed,
}

/// Single-slot, set-once/consume-once latch.
#[derive(Debug, Clone, Default)]
pub struct PendingTargetLatch {
    state: PendingTarget,
}

impl PendingTargetLatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &PendingTarget {
        &self.state
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.state != PendingTarget::Idle
    }

    /// Freeze `target` as the destination of the next resolved load. Arming
    /// again before resolution replaces the earlier target.
    pub fn arm(&mut self, target: RegionId) {
        self.state = match target {
            RegionId::Global => PendingTarget::ArmedForGlobal,
            RegionId::Vehicle(id) => PendingTarget::ArmedForVehicle(id),
        };
        log::debug!("load latch armed: {:?}", self.state);
    }

    /// Arm for whatever context is active right now.
    pub fn arm_for_active(&mut self, active_vehicle: Option<&str>) {
        self.arm(RegionId::for_active(active_vehicle));
    }

    /// Release the latch and return the frozen target, if any.
    pub fn take(&mut self) -> Option<RegionId> {
        let target = self.state.region();
        self.state = PendingTarget::Idle;
        target
    }

    /// Consume the latch with resolved file contents.
    ///
    /// The latch returns to `Idle` on every path, before the contents are
    /// inspected.
    pub fn settle(&mut self, contents: &str, format: FenceFormat) -> Settled {
        let Some(target) = self.take() else {
            return Settled::NotArmed;
        };
        match fence_file::parse(contents, format) {
            Ok(points) => Settled::Applied { target, points },
            Err(error) => {
                log::warn!("rejected geofence file for {target}: {error}");
                Settled::Rejected { target, error }
            }
        }
    }
}
