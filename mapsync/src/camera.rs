#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::config::MapConfig;
use crate::geo::Point;
use crate::model::{Casualty, FocusTarget, Uav};
use crate::surface::{FlyTo, MapSurface, SurfaceError};

/// Where the camera is pointed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CameraState {
    /// Default mission view.
    #[default]
    Idle,
    /// Centered on one entity.
    Focused(FocusTarget),
}

/// Drives viewport flights from the externally supplied focus signal.
#[derive(Debug, Clone, Default)]
pub struct CameraController {
    state: CameraState,
}

impl CameraController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Apply a focus signal. A target that cannot be resolved to a coordinate
    /// is treated as no focus. Every call issues a flight, including a repeat
    /// focus on the current target.
    ///
    /// # Errors
    ///
    /// Propagates a failed flight; the state is still updated.
    pub fn focus<S: MapSurface>(
        &mut self,
        surface: &mut S,
        config: &MapConfig,
        target: Option<&FocusTarget>,
        casualties: &[Casualty],
        uavs: &[Uav],
    ) -> Result<&CameraState, SurfaceError> {
        let resolved = target.and_then(|t| t.resolve(casualties, uavs).map(|at| (t, at)));
        let flight = match resolved {
            Some((target, at)) => {
                self.state = CameraState::Focused(target.clone());
                focus_flight(config, at)
            }
            None => {
                self.state = CameraState::Idle;
                idle_flight(config)
            }
        };
        surface.fly_to(&flight)?;
        Ok(&self.state)
    }

    /// Forget the current focus without animating.
    pub fn reset(&mut self) {
        self.state = CameraState::Idle;
    }
}

/// Flight back to the default mission view.
#[must_use]
pub fn idle_flight(config: &MapConfig) -> FlyTo {
    FlyTo {
        center: config.default_center,
        zoom: config.default_zoom,
        speed: config.idle_speed,
        curve: None,
        essential: false,
    }
}

/// Slow, curved, non-interruptible flight onto an entity.
#[must_use]
pub fn focus_flight(config: &MapConfig, at: Point) -> FlyTo {
    FlyTo {
        center: at,
        zoom: config.focus_zoom,
        speed: config.focus_speed,
        curve: Some(config.focus_curve),
        essential: true,
    }
}
