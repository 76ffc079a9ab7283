#![allow(clippy::float_cmp)]

use super::*;
use crate::fake::FakeSurface;
use crate::model::Triage;

fn casualties() -> Vec<Casualty> {
    vec![
        Casualty { id: "C1".to_owned(), lat: 28.75, lng: 77.12, triage: Triage::Red, id_color: "#f00".to_owned() },
        Casualty { id: "C2".to_owned(), lat: 28.76, lng: 77.13, triage: Triage::Green, id_color: "#0f0".to_owned() },
    ]
}

fn casualty_focus(id: &str) -> FocusTarget {
    FocusTarget::Casualty(id.to_owned())
}

// =============================================================
// Flights
// =============================================================

#[test]
fn idle_flight_uses_default_view() {
    let cfg = MapConfig::default();
    let flight = idle_flight(&cfg);
    assert_eq!(flight.center, cfg.default_center);
    assert_eq!(flight.zoom, 16.0);
    assert_eq!(flight.speed, 1.1);
    assert!(flight.curve.is_none());
    assert!(!flight.essential);
}

#[test]
fn focus_flight_is_tighter_slower_and_essential() {
    let cfg = MapConfig::default();
    let flight = focus_flight(&cfg, Point::new(1.0, 2.0));
    assert_eq!(flight.zoom, 19.0);
    assert_eq!(flight.speed, 0.9);
    assert_eq!(flight.curve, Some(1.3));
    assert!(flight.essential);
}

#[test]
fn flight_options_document() {
    let cfg = MapConfig::default();
    let options = focus_flight(&cfg, Point::new(1.0, 2.0)).to_options();
    assert_eq!(options["center"], serde_json::json!([2.0, 1.0]));
    assert_eq!(options["curve"], 1.3);
    assert_eq!(options["essential"], true);

    let idle = idle_flight(&cfg).to_options();
    assert!(idle.get("curve").is_none());
    assert!(idle.get("essential").is_none());
}

// =============================================================
// State machine
// =============================================================

#[test]
fn controller_starts_idle() {
    assert_eq!(CameraController::new().state(), &CameraState::Idle);
}

#[test]
fn focus_on_known_casualty_flies_to_it() {
    let mut surface = FakeSurface::new();
    let mut camera = CameraController::new();
    let cfg = MapConfig::default();

    camera.focus(&mut surface, &cfg, Some(&casualty_focus("C2")), &casualties(), &[]).unwrap();

    assert_eq!(camera.state(), &CameraState::Focused(casualty_focus("C2")));
    assert_eq!(surface.flights.len(), 1);
    assert_eq!(surface.flights[0].center, Point::new(28.76, 77.13));
    assert_eq!(surface.flights[0].zoom, 19.0);
}

#[test]
fn clearing_focus_flies_home() {
    let mut surface = FakeSurface::new();
    let mut camera = CameraController::new();
    let cfg = MapConfig::default();

    camera.focus(&mut surface, &cfg, Some(&casualty_focus("C1")), &casualties(), &[]).unwrap();
    camera.focus(&mut surface, &cfg, None, &casualties(), &[]).unwrap();

    assert_eq!(camera.state(), &CameraState::Idle);
    assert_eq!(surface.flights[1], idle_flight(&cfg));
}

#[test]
fn unknown_focus_falls_back_to_idle() {
    let mut surface = FakeSurface::new();
    let mut camera = CameraController::new();
    let cfg = MapConfig::default();

    camera.focus(&mut surface, &cfg, Some(&casualty_focus("C1")), &casualties(), &[]).unwrap();
    let state = camera.focus(&mut surface, &cfg, Some(&casualty_focus("C404")), &casualties(), &[]).unwrap();

    assert_eq!(state, &CameraState::Idle);
    assert_eq!(surface.flights.last(), Some(&idle_flight(&cfg)));
}

#[test]
fn refocusing_same_entity_reissues_flight() {
    let mut surface = FakeSurface::new();
    let mut camera = CameraController::new();
    let cfg = MapConfig::default();

    camera.focus(&mut surface, &cfg, Some(&casualty_focus("C1")), &casualties(), &[]).unwrap();
    camera.focus(&mut surface, &cfg, Some(&casualty_focus("C1")), &casualties(), &[]).unwrap();

    assert_eq!(surface.flights.len(), 2);
    assert_eq!(surface.flights[0], surface.flights[1]);
}

#[test]
fn vehicle_focus_without_position_is_idle() {
    let mut surface = FakeSurface::new();
    let mut camera = CameraController::new();
    let uavs = vec![Uav { id: "UAV-1".to_owned(), id_color: "#fff".to_owned(), mode: None, lat: None, lng: None }];

    camera
        .focus(&mut surface, &MapConfig::default(), Some(&FocusTarget::Vehicle("UAV-1".to_owned())), &[], &uavs)
        .unwrap();

    assert_eq!(camera.state(), &CameraState::Idle);
}

#[test]
fn reset_returns_to_idle_without_flight() {
    let mut surface = FakeSurface::new();
    let mut camera = CameraController::new();
    camera
        .focus(&mut surface, &MapConfig::default(), Some(&casualty_focus("C1")), &casualties(), &[])
        .unwrap();
    camera.reset();
    assert_eq!(camera.state(), &CameraState::Idle);
    assert_eq!(surface.flights.len(), 1);
}
