#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees.
///
/// Field order matches the on-disk geofence format (`{"lat": .., "lng": ..}`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// GeoJSON position order: `[lng, lat]`.
    #[must_use]
    pub fn lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}
