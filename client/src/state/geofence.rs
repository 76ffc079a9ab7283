//! The single owned geofence model.
//!
//! Provided once at the app root and written only through these operations,
//! so the global fence survives navigation between the start page and the
//! mission page.

#[cfg(test)]
#[path = "geofence_test.rs"]
mod geofence_test;

use std::collections::HashMap;

use mapsync::geo::Point;
use mapsync::model::RegionId;

/// Global fence plus one fence per vehicle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeofenceState {
    pub global: Vec<Point>,
    pub vehicles: HashMap<String, Vec<Point>>,
}

impl GeofenceState {
    /// Append a clicked point to the global fence.
    pub fn add_global_point(&mut self, point: Point) {
        self.global.push(point);
    }

    pub fn clear_global(&mut self) {
        self.global.clear();
    }

    pub fn replace_global(&mut self, points: Vec<Point>) {
        self.global = points;
    }

    pub fn replace_vehicle(&mut self, vehicle_id: &str, points: Vec<Point>) {
        self.vehicles.insert(vehicle_id.to_owned(), points);
    }

    /// Replace whichever region `target` names.
    pub fn apply(&mut self, target: &RegionId, points: Vec<Point>) {
        match target {
            RegionId::Global => self.replace_global(points),
            RegionId::Vehicle(id) => self.replace_vehicle(id, points),
        }
    }

    /// Points of one vehicle's fence; empty if none was loaded.
    #[must_use]
    pub fn vehicle(&self, vehicle_id: &str) -> &[Point] {
        self.vehicles.get(vehicle_id).map_or(&[][..], Vec::as_slice)
    }
}
