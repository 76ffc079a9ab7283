#![allow(clippy::float_cmp)]

use super::*;

fn casualty(id: &str, triage: Triage, lat: f64, lng: f64) -> Casualty {
    Casualty { id: id.to_owned(), lat, lng, triage, id_color: "#fff".to_owned() }
}

fn uav(id: &str, position: Option<(f64, f64)>) -> Uav {
    Uav {
        id: id.to_owned(),
        id_color: "#0ff".to_owned(),
        mode: None,
        lat: position.map(|p| p.0),
        lng: position.map(|p| p.1),
    }
}

// =============================================================
// Triage / TriageFilter
// =============================================================

#[test]
fn filter_all_admits_every_category() {
    for triage in [Triage::Red, Triage::Yellow, Triage::Green, Triage::Black] {
        assert!(TriageFilter::All.admits(triage));
    }
}

#[test]
fn filter_single_category_admits_only_itself() {
    assert!(TriageFilter::Red.admits(Triage::Red));
    assert!(!TriageFilter::Red.admits(Triage::Green));
    assert!(!TriageFilter::Black.admits(Triage::Yellow));
}

#[test]
fn filter_default_is_all() {
    assert_eq!(TriageFilter::default(), TriageFilter::All);
}

#[test]
fn filter_display_order() {
    let names: Vec<_> = TriageFilter::ALL.iter().map(|f| f.as_str()).collect();
    assert_eq!(names, ["red", "yellow", "green", "black", "all"]);
}

#[test]
fn triage_deserializes_lowercase() {
    let t: Triage = serde_json::from_str("\"yellow\"").unwrap();
    assert_eq!(t, Triage::Yellow);
    assert!(serde_json::from_str::<Triage>("\"blue\"").is_err());
}

// =============================================================
// Casualty / Uav serde
// =============================================================

#[test]
fn casualty_reads_dataset_shape() {
    let c: Casualty =
        serde_json::from_str(r##"{"id":"C4","lat":28.1,"lng":77.2,"triage":"red","idColor":"#ff0000"}"##).unwrap();
    assert_eq!(c.id, "C4");
    assert_eq!(c.triage, Triage::Red);
    assert_eq!(c.id_color, "#ff0000");
    assert_eq!(c.position(), Point::new(28.1, 77.2));
}

#[test]
fn uav_mode_and_position_are_optional() {
    let u: Uav = serde_json::from_str(r##"{"id":"UAV-1","idColor":"#00ff00"}"##).unwrap();
    assert!(u.mode.is_none());
    assert!(u.position().is_none());
}

#[test]
fn uav_position_requires_both_coordinates() {
    let mut u = uav("UAV-1", Some((1.0, 2.0)));
    assert_eq!(u.position(), Some(Point::new(1.0, 2.0)));
    u.lng = None;
    assert!(u.position().is_none());
}

// =============================================================
// FocusTarget
// =============================================================

#[test]
fn focus_resolves_known_casualty() {
    let casualties = vec![casualty("C1", Triage::Red, 1.0, 2.0), casualty("C2", Triage::Green, 3.0, 4.0)];
    let target = FocusTarget::Casualty("C2".to_owned());
    assert_eq!(target.resolve(&casualties, &[]), Some(Point::new(3.0, 4.0)));
}

#[test]
fn focus_on_unknown_casualty_resolves_to_none() {
    let casualties = vec![casualty("C1", Triage::Red, 1.0, 2.0)];
    let target = FocusTarget::Casualty("C9".to_owned());
    assert!(target.resolve(&casualties, &[]).is_none());
}

#[test]
fn focus_on_vehicle_without_position_resolves_to_none() {
    let uavs = vec![uav("UAV-1", None)];
    assert!(FocusTarget::Vehicle("UAV-1".to_owned()).resolve(&[], &uavs).is_none());
}

#[test]
fn focus_on_positioned_vehicle_resolves() {
    let uavs = vec![uav("UAV-1", Some((5.0, 6.0)))];
    let target = FocusTarget::Vehicle("UAV-1".to_owned());
    assert_eq!(target.resolve(&[], &uavs), Some(Point::new(5.0, 6.0)));
    assert_eq!(target.id(), "UAV-1");
}

// =============================================================
// RegionId
// =============================================================

#[test]
fn region_parse_global() {
    assert_eq!(RegionId::parse("GLOBAL"), RegionId::Global);
    assert_eq!(RegionId::parse("UAV-3"), RegionId::Vehicle("UAV-3".to_owned()));
}

#[test]
fn region_for_active_context() {
    assert_eq!(RegionId::for_active(None), RegionId::Global);
    assert_eq!(RegionId::for_active(Some("UAV-7")), RegionId::Vehicle("UAV-7".to_owned()));
}

#[test]
fn region_source_and_layer_names() {
    assert_eq!(RegionId::Global.source_id(), "global-geofence");
    assert_eq!(RegionId::Global.fill_layer_id(), "global-geofence-fill");
    let v = RegionId::Vehicle("UAV-2".to_owned());
    assert_eq!(v.source_id(), "uav-geofence-UAV-2");
    assert_eq!(v.line_layer_id(), "uav-geofence-UAV-2-line");
}

#[test]
fn region_display_uses_external_id() {
    assert_eq!(RegionId::Global.to_string(), "GLOBAL");
    assert_eq!(RegionId::Vehicle("UAV-2".to_owned()).to_string(), "UAV-2");
}
