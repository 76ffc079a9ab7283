use std::collections::HashMap;
use std::rc::Rc;

use web_sys::HtmlElement;

use crate::camera::{CameraController, CameraState};
use crate::click::{AddPointHandler, ClickCapture};
use crate::config::MapConfig;
use crate::fences::{FenceSync, FenceUpdate};
use crate::geo::Point;
use crate::mapbox::MapboxSurface;
use crate::markers::MarkerManager;
use crate::model::{Casualty, FocusTarget, RegionId, TriageFilter, Uav};
use crate::registry::{FenceStyle, RegionRegistry};
use crate::surface::{MapSurface, SurfaceError};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Full declarative input for one reconcile pass.
#[derive(Clone, Copy)]
pub struct Scene<'a> {
    pub uavs: &'a [Uav],
    pub casualties: &'a [Casualty],
    pub triage_filter: TriageFilter,
    pub focus: Option<&'a FocusTarget>,
    pub global_fence: &'a [Point],
    pub vehicle_fences: &'a HashMap<String, Vec<Point>>,
    /// Edit mode is engaged while this is `Some`.
    pub on_add_point: Option<&'a AddPointHandler>,
}

impl Scene<'_> {
    /// Casualty id used for marker focus styling.
    #[must_use]
    pub fn focused_casualty(&self) -> Option<&str> {
        match self.focus {
            Some(FocusTarget::Casualty(id)) => Some(id),
            _ => None,
        }
    }
}

/// Core engine state: everything that does not depend on a live browser map.
///
/// Separated from `Engine` so it can be driven against an in-memory surface in
/// tests. Every operation is a silent no-op before [`EngineCore::mark_ready`]
/// and after [`EngineCore::teardown`].
pub struct EngineCore<S: MapSurface> {
    surface: S,
    config: MapConfig,
    ready: bool,
    torn_down: bool,
    regions: RegionRegistry,
    fences: FenceSync,
    markers: MarkerManager<S::Marker>,
    camera: CameraController,
    click: ClickCapture,
    /// Focus signal and its resolved coordinate at the last camera move;
    /// `None` until the first one.
    last_focus: Option<(Option<FocusTarget>, Option<Point>)>,
    /// Handler installed by the last reconcile, compared by identity.
    last_handler: Option<AddPointHandler>,
}

impl<S: MapSurface> EngineCore<S> {
    #[must_use]
    pub fn new(surface: S, config: MapConfig) -> Self {
        Self {
            surface,
            config,
            ready: false,
            torn_down: false,
            regions: RegionRegistry::new(),
            fences: FenceSync::new(),
            markers: MarkerManager::new(),
            camera: CameraController::new(),
            click: ClickCapture::new(),
            last_focus: None,
            last_handler: None,
        }
    }

    fn live(&self) -> bool {
        self.ready && !self.torn_down
    }

    // --- Lifecycle ---

    /// Record that the surface finished loading and provision the global
    /// region plus one region per vehicle.
    ///
    /// # Errors
    ///
    /// Propagates the first provisioning failure. The engine stays ready so
    /// a later call can finish the job.
    pub fn mark_ready(&mut self, uavs: &[Uav]) -> Result<(), SurfaceError> {
        if self.torn_down {
            return Ok(());
        }
        if !self.ready {
            log::info!("map surface ready");
        }
        self.ready = true;
        let style = self.fence_style();
        let color = self.config.global_fence_color.clone();
        self.regions.provision(&mut self.surface, &RegionId::Global, &color, style)?;
        self.provision_vehicles(uavs)
    }

    /// Provision a region for every vehicle not yet provisioned.
    ///
    /// # Errors
    ///
    /// Propagates the first provisioning failure.
    pub fn provision_vehicles(&mut self, uavs: &[Uav]) -> Result<(), SurfaceError> {
        if !self.live() {
            return Ok(());
        }
        let style = self.fence_style();
        for uav in uavs {
            let region = RegionId::Vehicle(uav.id.clone());
            if self.regions.is_provisioned(&region) {
                continue;
            }
            self.regions.provision(&mut self.surface, &region, &uav.id_color, style)?;
        }
        Ok(())
    }

    /// Release everything the engine holds on the surface, then the surface
    /// itself. Failures are logged and skipped; later calls do nothing.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        if let Err(err) = self.click.disengage(&mut self.surface) {
            log::warn!("teardown: failed to detach click handler: {err}");
        }
        self.markers.remove_all(&mut self.surface);
        if let Err(err) = self.surface.remove() {
            log::warn!("teardown: failed to remove map surface: {err}");
        }
        self.regions.clear();
        self.fences.clear();
        self.camera.reset();
        self.last_focus = None;
        self.last_handler = None;
        log::info!("map engine torn down");
    }

    // --- Geofences ---

    /// # Errors
    ///
    /// Propagates a failed source write.
    pub fn sync_global_fence(&mut self, points: &[Point]) -> Result<FenceUpdate, SurfaceError> {
        if !self.live() {
            return Ok(FenceUpdate::NotProvisioned);
        }
        self.fences.update_global(&mut self.surface, points)
    }

    /// # Errors
    ///
    /// Propagates a failed source write.
    pub fn sync_vehicle_fence(&mut self, vehicle_id: &str, points: &[Point]) -> Result<FenceUpdate, SurfaceError> {
        if !self.live() {
            return Ok(FenceUpdate::NotProvisioned);
        }
        self.fences.update_vehicle(&mut self.surface, vehicle_id, points)
    }

    /// Push every vehicle's fence. Returns the number of sources written.
    ///
    /// # Errors
    ///
    /// Stops at the first failed source write.
    pub fn sync_vehicle_fences(
        &mut self,
        uavs: &[Uav],
        fences: &HashMap<String, Vec<Point>>,
    ) -> Result<usize, SurfaceError> {
        if !self.live() {
            return Ok(0);
        }
        self.fences.update_vehicles(&mut self.surface, uavs, fences)
    }

    // --- Markers ---

    /// Create markers for unseen casualties. Returns the number created.
    ///
    /// # Errors
    ///
    /// Stops at the first marker the surface fails to create.
    pub fn sync_markers(&mut self, casualties: &[Casualty]) -> Result<usize, SurfaceError> {
        if !self.live() {
            return Ok(0);
        }
        self.markers.sync(&mut self.surface, casualties)
    }

    /// # Errors
    ///
    /// Propagates the first failed style write.
    pub fn apply_marker_state(
        &mut self,
        filter: TriageFilter,
        focused_id: Option<&str>,
        casualties: &[Casualty],
    ) -> Result<(), SurfaceError> {
        if !self.live() {
            return Ok(());
        }
        self.markers.apply_visual_state(&mut self.surface, filter, focused_id, casualties)
    }

    // --- Camera ---

    /// Fly to `target`, or back to the default view when it is absent or
    /// unknown. Always issues a flight.
    ///
    /// # Errors
    ///
    /// Propagates a failed flight.
    pub fn focus_camera(
        &mut self,
        target: Option<&FocusTarget>,
        casualties: &[Casualty],
        uavs: &[Uav],
    ) -> Result<(), SurfaceError> {
        if !self.live() {
            return Ok(());
        }
        let at = target.and_then(|t| t.resolve(casualties, uavs));
        self.last_focus = Some((target.cloned(), at));
        self.camera.focus(&mut self.surface, &self.config, target, casualties, uavs)?;
        Ok(())
    }

    // --- Click capture ---

    /// Engage edit mode with `handler`, or disengage it with `None`.
    ///
    /// # Errors
    ///
    /// Propagates the first surface failure.
    pub fn set_add_point_handler(&mut self, handler: Option<AddPointHandler>) -> Result<(), SurfaceError> {
        if !self.live() {
            return Ok(());
        }
        self.last_handler = None;
        self.click.set_handler(&mut self.surface, handler.clone())?;
        self.last_handler = handler;
        Ok(())
    }

    // --- Reconcile ---

    /// Bring the surface in line with `scene` in one idempotent pass: click
    /// capture (only when the handler changed), provisioning, fence geometry,
    /// markers and their styling, then the camera (only when the focus signal
    /// or the coordinate it resolves to changed).
    ///
    /// Click capture runs first and the rest of the pass runs even if it
    /// fails, so a mode change never waits on an unrelated surface failure.
    ///
    /// # Errors
    ///
    /// Returns the click capture failure if there was one, else the first
    /// failure of the remaining steps.
    pub fn reconcile(&mut self, scene: &Scene<'_>) -> Result<(), SurfaceError> {
        if !self.live() {
            return Ok(());
        }
        let same_handler = match (&self.last_handler, scene.on_add_point) {
            (None, None) => true,
            (Some(old), Some(new)) => Rc::ptr_eq(old, new),
            _ => false,
        };
        let click = if same_handler { Ok(()) } else { self.set_add_point_handler(scene.on_add_point.cloned()) };
        let rest = self.reconcile_content(scene);
        click.and(rest)
    }

    fn reconcile_content(&mut self, scene: &Scene<'_>) -> Result<(), SurfaceError> {
        self.provision_vehicles(scene.uavs)?;
        self.sync_global_fence(scene.global_fence)?;
        self.sync_vehicle_fences(scene.uavs, scene.vehicle_fences)?;
        self.sync_markers(scene.casualties)?;
        self.apply_marker_state(scene.triage_filter, scene.focused_casualty(), scene.casualties)?;

        let focus = scene.focus.cloned();
        let at = scene.focus.and_then(|t| t.resolve(scene.casualties, scene.uavs));
        if self.last_focus.as_ref() != Some(&(focus.clone(), at)) {
            self.focus_camera(focus.as_ref(), scene.casualties, scene.uavs)?;
        }
        Ok(())
    }

    // --- Queries ---

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[must_use]
    pub fn camera(&self) -> &CameraState {
        self.camera.state()
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.click.is_active()
    }

    #[must_use]
    pub fn regions(&self) -> &RegionRegistry {
        &self.regions
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn fence_style(&self) -> FenceStyle {
        FenceStyle {
            fill_opacity: self.config.fence_fill_opacity,
            line_width: self.config.fence_line_width,
        }
    }
}

/// The browser map engine. Wraps `EngineCore` around a Mapbox GL surface and
/// logs surface failures instead of returning them, since its callers are
/// reactive effects with nowhere to send an error.
pub struct Engine {
    pub core: EngineCore<MapboxSurface>,
}

impl Engine {
    /// Mount a map into `container`. `on_load` fires once when the map has
    /// loaded its style; the host should then call [`Engine::mark_ready`].
    ///
    /// # Errors
    ///
    /// Fails if the Mapbox library is missing or rejects the options.
    pub fn new(container: &HtmlElement, config: MapConfig, on_load: impl FnMut() + 'static) -> Result<Self, SurfaceError> {
        let surface = MapboxSurface::new(container, &config, on_load)?;
        log::info!("map engine mounted");
        Ok(Self { core: EngineCore::new(surface, config) })
    }

    pub fn mark_ready(&mut self, uavs: &[Uav]) {
        if let Err(err) = self.core.mark_ready(uavs) {
            log::warn!("provisioning failed: {err}");
        }
    }

    pub fn reconcile(&mut self, scene: &Scene<'_>) {
        if let Err(err) = self.core.reconcile(scene) {
            log::warn!("map reconcile failed: {err}");
        }
    }

    pub fn teardown(&mut self) {
        self.core.teardown();
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.core.teardown();
    }
}
