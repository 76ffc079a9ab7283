//! Pushes geofence geometry into provisioned region sources.
//!
//! Every update ships the region's full point sequence; there are no partial
//! edits. Updates that arrive before the region's source exists are dropped
//! (the host re-runs the update once readiness propagates), and updates whose
//! geometry matches what was last pushed are skipped.

#[cfg(test)]
#[path = "fences_test.rs"]
mod fences_test;

use std::collections::HashMap;

use crate::geo::Point;
use crate::geometry::{self, Geometry};
use crate::model::{RegionId, Uav};
use crate::surface::{MapSurface, SurfaceError};

/// Result of a single region update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceUpdate {
    /// New geometry was written to the source.
    Pushed,
    /// Geometry matched the last push; nothing written.
    Unchanged,
    /// The region has no source yet; update dropped.
    NotProvisioned,
}

/// Remembers the last geometry pushed per region.
#[derive(Debug, Default)]
pub struct FenceSync {
    pushed: HashMap<RegionId, Geometry>,
}

impl FenceSync {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the global region's geometry.
    ///
    /// # Errors
    ///
    /// Propagates a failed source write.
    pub fn update_global<S: MapSurface>(&mut self, surface: &mut S, points: &[Point]) -> Result<FenceUpdate, SurfaceError> {
        self.update(surface, &RegionId::Global, points)
    }

    /// Replace one vehicle region's geometry.
    ///
    /// # Errors
    ///
    /// Propagates a failed source write.
    pub fn update_vehicle<S: MapSurface>(
        &mut self,
        surface: &mut S,
        vehicle_id: &str,
        points: &[Point],
    ) -> Result<FenceUpdate, SurfaceError> {
        self.update(surface, &RegionId::Vehicle(vehicle_id.to_owned()), points)
    }

    /// Update every known vehicle's region from `fences`. Vehicles with no
    /// entry get empty geometry.
    ///
    /// # Errors
    ///
    /// Stops at the first failed source write.
    pub fn update_vehicles<S: MapSurface>(
        &mut self,
        surface: &mut S,
        uavs: &[Uav],
        fences: &HashMap<String, Vec<Point>>,
    ) -> Result<usize, SurfaceError> {
        let mut pushed = 0;
        for uav in uavs {
            let points = fences.get(&uav.id).map_or(&[][..], Vec::as_slice);
            if self.update_vehicle(surface, &uav.id, points)? == FenceUpdate::Pushed {
                pushed += 1;
            }
        }
        Ok(pushed)
    }

    fn update<S: MapSurface>(
        &mut self,
        surface: &mut S,
        region: &RegionId,
        points: &[Point],
    ) -> Result<FenceUpdate, SurfaceError> {
        let source = region.source_id();
        if !surface.has_source(&source) {
            return Ok(FenceUpdate::NotProvisioned);
        }

        let geometry = geometry::build(points);
        if self.pushed.get(region) == Some(&geometry) {
            return Ok(FenceUpdate::Unchanged);
        }

        surface.set_source_data(&source, &geometry)?;
        self.pushed.insert(region.clone(), geometry);
        Ok(FenceUpdate::Pushed)
    }

    /// Geometry last pushed for `region`, if any.
    #[must_use]
    pub fn last_pushed(&self, region: &RegionId) -> Option<&Geometry> {
        self.pushed.get(region)
    }

    pub fn clear(&mut self) {
        self.pushed.clear();
    }
}
