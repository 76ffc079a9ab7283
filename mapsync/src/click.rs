//! Click capture: turns primary clicks on the surface into point-add events
//! while an edit mode is engaged.
//!
//! Every mode change detaches the previous listener and resets the cursor
//! before anything else happens, so a disengaged editor can never receive
//! another point.

#[cfg(test)]
#[path = "click_test.rs"]
mod click_test;

use std::rc::Rc;

use crate::geo::Point;
use crate::surface::{Button, ClickEvent, ClickHandler, Cursor, MapSurface, SurfaceError};

/// Callback receiving each added point.
pub type AddPointHandler = Rc<dyn Fn(Point)>;

/// Tracks whether a click listener is installed.
#[derive(Debug, Default)]
pub struct ClickCapture {
    active: bool,
}

impl ClickCapture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Engage (`Some`) or disengage (`None`) edit mode.
    ///
    /// # Errors
    ///
    /// Propagates the first surface failure. A failed detach still marks the
    /// capture inactive.
    pub fn set_handler<S: MapSurface>(
        &mut self,
        surface: &mut S,
        on_add_point: Option<AddPointHandler>,
    ) -> Result<(), SurfaceError> {
        self.disengage(surface)?;

        let Some(on_add_point) = on_add_point else {
            return Ok(());
        };
        let listener: ClickHandler = Rc::new(move |event: ClickEvent| {
            if event.button == Button::Primary {
                on_add_point(event.lng_lat);
            }
        });
        surface.attach_click(listener)?;
        self.active = true;
        surface.set_cursor(Cursor::Crosshair)?;
        log::debug!("click capture engaged");
        Ok(())
    }

    /// Detach the listener and reset the cursor. No-op when inactive.
    ///
    /// # Errors
    ///
    /// Propagates the first surface failure.
    pub fn disengage<S: MapSurface>(&mut self, surface: &mut S) -> Result<(), SurfaceError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        surface.detach_click()?;
        surface.set_cursor(Cursor::Default)?;
        log::debug!("click capture disengaged");
        Ok(())
    }
}
