//! Geofence geometry: ordered points in, renderable shape out.
//!
//! [`build`] is pure and total. It performs no deduplication and accepts
//! self-intersecting rings as-is; the point order supplied by the operator is
//! the winding order rendered.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde_json::{Value, json};

use crate::geo::Point;

/// Renderable shape derived from a point sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Nothing to draw (fewer than two points).
    Empty,
    /// Open segment through exactly two points, in input order.
    LineString(Vec<Point>),
    /// Single closed ring; the last point repeats the first.
    Polygon(Vec<Point>),
}

/// Build the geometry for an ordered point sequence.
#[must_use]
pub fn build(points: &[Point]) -> Geometry {
    match points {
        [] | [_] => Geometry::Empty,
        [a, b] => Geometry::LineString(vec![*a, *b]),
        [first, ..] => {
            let mut ring = Vec::with_capacity(points.len() + 1);
            ring.extend_from_slice(points);
            ring.push(*first);
            Geometry::Polygon(ring)
        }
    }
}

impl Geometry {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// GeoJSON document for a `geojson` source.
    ///
    /// Empty geometry is an empty `FeatureCollection`; everything else is a
    /// single `Feature`. Positions are `[lng, lat]`.
    #[must_use]
    pub fn to_geojson(&self) -> Value {
        match self {
            Self::Empty => json!({ "type": "FeatureCollection", "features": [] }),
            Self::LineString(points) => json!({
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "LineString", "coordinates": positions(points) },
            }),
            Self::Polygon(ring) => json!({
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "Polygon", "coordinates": [positions(ring)] },
            }),
        }
    }
}

fn positions(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| p.lng_lat()).collect()
}
