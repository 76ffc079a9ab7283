#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(lat, lng)| Point::new(lat, lng)).collect()
}

// =============================================================
// build
// =============================================================

#[test]
fn no_points_is_empty() {
    assert_eq!(build(&[]), Geometry::Empty);
}

#[test]
fn single_point_is_empty() {
    assert_eq!(build(&pts(&[(1.0, 2.0)])), Geometry::Empty);
}

#[test]
fn two_points_is_line_in_input_order() {
    let input = pts(&[(1.0, 2.0), (3.0, 4.0)]);
    assert_eq!(build(&input), Geometry::LineString(input.clone()));
}

#[test]
fn two_points_reversed_keeps_reversed_order() {
    let input = pts(&[(3.0, 4.0), (1.0, 2.0)]);
    let Geometry::LineString(line) = build(&input) else {
        panic!("expected line");
    };
    assert_eq!(line[0], Point::new(3.0, 4.0));
    assert_eq!(line[1], Point::new(1.0, 2.0));
}

#[test]
fn three_points_close_the_ring() {
    let input = pts(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
    let Geometry::Polygon(ring) = build(&input) else {
        panic!("expected polygon");
    };
    assert_eq!(ring.len(), 4);
    assert_eq!(&ring[..3], input.as_slice());
    assert_eq!(ring[3], ring[0]);
}

#[test]
fn many_points_keep_order_and_close() {
    let input: Vec<Point> = (0..10).map(|i| Point::new(f64::from(i), f64::from(i * 2))).collect();
    let Geometry::Polygon(ring) = build(&input) else {
        panic!("expected polygon");
    };
    assert_eq!(ring.len(), input.len() + 1);
    assert_eq!(&ring[..input.len()], input.as_slice());
    assert_eq!(ring.last(), input.first());
}

#[test]
fn self_intersecting_ring_is_accepted() {
    let bowtie = pts(&[(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)]);
    assert!(matches!(build(&bowtie), Geometry::Polygon(_)));
}

#[test]
fn duplicate_points_are_not_removed() {
    let input = pts(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
    let Geometry::Polygon(ring) = build(&input) else {
        panic!("expected polygon");
    };
    assert_eq!(ring.len(), 4);
}

#[test]
fn build_is_idempotent() {
    let input = pts(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
    assert_eq!(build(&input), build(&input));
    assert_eq!(build(&input).to_geojson(), build(&input).to_geojson());
}

// =============================================================
// to_geojson
// =============================================================

#[test]
fn empty_geojson_is_empty_feature_collection() {
    assert_eq!(Geometry::Empty.to_geojson(), json!({ "type": "FeatureCollection", "features": [] }));
}

#[test]
fn line_geojson_uses_lng_lat_order() {
    let geo = build(&pts(&[(1.0, 2.0), (3.0, 4.0)])).to_geojson();
    assert_eq!(geo["geometry"]["type"], "LineString");
    assert_eq!(geo["geometry"]["coordinates"], json!([[2.0, 1.0], [4.0, 3.0]]));
}

#[test]
fn polygon_geojson_has_single_closed_ring() {
    let geo = build(&pts(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)])).to_geojson();
    assert_eq!(geo["type"], "Feature");
    assert_eq!(geo["geometry"]["type"], "Polygon");
    assert_eq!(
        geo["geometry"]["coordinates"],
        json!([[[2.0, 1.0], [4.0, 3.0], [6.0, 5.0], [2.0, 1.0]]])
    );
}

#[test]
fn is_empty_only_for_empty() {
    assert!(Geometry::Empty.is_empty());
    assert!(!build(&pts(&[(1.0, 2.0), (3.0, 4.0)])).is_empty());
}
