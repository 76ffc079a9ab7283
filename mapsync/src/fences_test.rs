use super::*;
use crate::fake::FakeSurface;
use crate::registry::{FenceStyle, RegionRegistry};

fn style() -> FenceStyle {
    FenceStyle { fill_opacity: 0.25, line_width: 2.0 }
}

fn triangle() -> Vec<Point> {
    vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0), Point::new(5.0, 6.0)]
}

fn uav(id: &str) -> Uav {
    Uav { id: id.to_owned(), id_color: "#0ff".to_owned(), mode: None, lat: None, lng: None }
}

fn provisioned(regions: &[RegionId]) -> FakeSurface {
    let mut surface = FakeSurface::new();
    let mut registry = RegionRegistry::new();
    for region in regions {
        registry.provision(&mut surface, region, "#fff", style()).unwrap();
    }
    surface
}

// =============================================================
// update_global
// =============================================================

#[test]
fn global_update_before_provisioning_is_dropped() {
    let mut surface = FakeSurface::new();
    let mut sync = FenceSync::new();

    let outcome = sync.update_global(&mut surface, &triangle()).unwrap();

    assert_eq!(outcome, FenceUpdate::NotProvisioned);
    assert!(surface.sources.is_empty());
    assert!(sync.last_pushed(&RegionId::Global).is_none());
}

#[test]
fn global_update_pushes_closed_ring() {
    let mut surface = provisioned(&[RegionId::Global]);
    let mut sync = FenceSync::new();

    assert_eq!(sync.update_global(&mut surface, &triangle()).unwrap(), FenceUpdate::Pushed);

    let Some(Geometry::Polygon(ring)) = surface.sources.get("global-geofence") else {
        panic!("expected polygon in global source");
    };
    assert_eq!(ring.len(), 4);
    assert_eq!(ring[3], Point::new(1.0, 2.0));
}

#[test]
fn identical_update_is_not_rewritten() {
    let mut surface = provisioned(&[RegionId::Global]);
    let mut sync = FenceSync::new();

    sync.update_global(&mut surface, &triangle()).unwrap();
    let again = sync.update_global(&mut surface, &triangle()).unwrap();

    assert_eq!(again, FenceUpdate::Unchanged);
    assert_eq!(surface.source_writes, 1);
}

#[test]
fn whole_sequence_replaces_previous_geometry() {
    let mut surface = provisioned(&[RegionId::Global]);
    let mut sync = FenceSync::new();

    sync.update_global(&mut surface, &triangle()).unwrap();
    sync.update_global(&mut surface, &triangle()[..2]).unwrap();

    assert!(matches!(surface.sources.get("global-geofence"), Some(Geometry::LineString(_))));
}

#[test]
fn clearing_points_pushes_empty_geometry() {
    let mut surface = provisioned(&[RegionId::Global]);
    let mut sync = FenceSync::new();

    sync.update_global(&mut surface, &triangle()).unwrap();
    sync.update_global(&mut surface, &[]).unwrap();

    assert_eq!(surface.sources.get("global-geofence"), Some(&Geometry::Empty));
}

// =============================================================
// update_vehicle / update_vehicles
// =============================================================

#[test]
fn vehicle_update_targets_its_own_source() {
    let vehicle = RegionId::Vehicle("UAV-3".to_owned());
    let mut surface = provisioned(&[RegionId::Global, vehicle.clone()]);
    let mut sync = FenceSync::new();

    sync.update_vehicle(&mut surface, "UAV-3", &triangle()).unwrap();

    assert!(matches!(surface.sources.get("uav-geofence-UAV-3"), Some(Geometry::Polygon(_))));
    assert_eq!(surface.sources.get("global-geofence"), Some(&Geometry::Empty));
    assert!(sync.last_pushed(&vehicle).is_some());
}

#[test]
fn unknown_vehicle_update_is_dropped() {
    let mut surface = provisioned(&[RegionId::Global]);
    let mut sync = FenceSync::new();
    let outcome = sync.update_vehicle(&mut surface, "UAV-9", &triangle()).unwrap();
    assert_eq!(outcome, FenceUpdate::NotProvisioned);
}

#[test]
fn update_vehicles_uses_empty_geometry_for_missing_entries() {
    let mut surface = provisioned(&[RegionId::Vehicle("UAV-1".to_owned()), RegionId::Vehicle("UAV-2".to_owned())]);
    let mut sync = FenceSync::new();
    let mut fences = HashMap::new();
    fences.insert("UAV-1".to_owned(), triangle());

    let pushed = sync.update_vehicles(&mut surface, &[uav("UAV-1"), uav("UAV-2")], &fences).unwrap();

    assert_eq!(pushed, 2);
    assert!(matches!(surface.sources.get("uav-geofence-UAV-1"), Some(Geometry::Polygon(_))));
    assert_eq!(surface.sources.get("uav-geofence-UAV-2"), Some(&Geometry::Empty));
}

#[test]
fn update_vehicles_repeated_pushes_nothing_new() {
    let mut surface = provisioned(&[RegionId::Vehicle("UAV-1".to_owned())]);
    let mut sync = FenceSync::new();
    let mut fences = HashMap::new();
    fences.insert("UAV-1".to_owned(), triangle());

    sync.update_vehicles(&mut surface, &[uav("UAV-1")], &fences).unwrap();
    let pushed = sync.update_vehicles(&mut surface, &[uav("UAV-1")], &fences).unwrap();

    assert_eq!(pushed, 0);
    assert_eq!(surface.source_writes, 1);
}

#[test]
fn clear_forgets_pushed_geometry() {
    let mut surface = provisioned(&[RegionId::Global]);
    let mut sync = FenceSync::new();
    sync.update_global(&mut surface, &triangle()).unwrap();
    sync.clear();
    assert_eq!(sync.update_global(&mut surface, &triangle()).unwrap(), FenceUpdate::Pushed);
}
