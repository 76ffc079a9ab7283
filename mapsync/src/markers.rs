//! Casualty markers: created once per id, restyled on every update, never moved.
//!
//! Filtering and focus are purely presentational. A marker whose casualty
//! disappears from the input keeps its last visual state until teardown.

#[cfg(test)]
#[path = "markers_test.rs"]
mod markers_test;

use std::collections::HashMap;

use crate::model::{Casualty, TriageFilter};
use crate::surface::{MapSurface, MarkerSpec, MarkerVisual, SurfaceError};

/// Visual state for one casualty under the current filter and focus.
///
/// A set focus id hides every non-matching marker; the filter hides excluded
/// categories. The focused marker is never hidden, even when the filter
/// excludes its category.
#[must_use]
pub fn visual_for(casualty: &Casualty, filter: TriageFilter, focused_id: Option<&str>) -> MarkerVisual {
    let focused = focused_id == Some(casualty.id.as_str());
    let filtered_out = !filter.admits(casualty.triage);
    let unfocused = focused_id.is_some() && !focused;
    MarkerVisual { hidden: !focused && (filtered_out || unfocused), focused }
}

/// Marker label: the casualty id without its leading `C`.
#[must_use]
pub fn marker_label(id: &str) -> String {
    id.replacen('C', "", 1)
}

/// Registry of live markers keyed by casualty id.
pub struct MarkerManager<M> {
    markers: HashMap<String, M>,
}

impl<M> Default for MarkerManager<M> {
    fn default() -> Self {
        Self { markers: HashMap::new() }
    }
}

impl<M> MarkerManager<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create markers for casualties not seen before. Existing markers are left
    /// untouched. Returns the number created.
    ///
    /// # Errors
    ///
    /// Stops at the first marker the surface fails to create; markers created
    /// before the failure stay registered.
    pub fn sync<S>(&mut self, surface: &mut S, casualties: &[Casualty]) -> Result<usize, SurfaceError>
    where
        S: MapSurface<Marker = M>,
    {
        let mut created = 0;
        for casualty in casualties {
            if self.markers.contains_key(&casualty.id) {
                continue;
            }
            let spec = MarkerSpec {
                id: casualty.id.clone(),
                position: casualty.position(),
                label: marker_label(&casualty.id),
                triage: casualty.triage,
                id_color: casualty.id_color.clone(),
            };
            let handle = surface.add_marker(&spec)?;
            log::debug!("created marker for casualty {}", casualty.id);
            self.markers.insert(casualty.id.clone(), handle);
            created += 1;
        }
        Ok(created)
    }

    /// Restyle every registered marker. Markers with no matching casualty are
    /// reset to the neutral state and otherwise skipped.
    ///
    /// # Errors
    ///
    /// Propagates the first failed style write.
    pub fn apply_visual_state<S>(
        &self,
        surface: &mut S,
        filter: TriageFilter,
        focused_id: Option<&str>,
        casualties: &[Casualty],
    ) -> Result<(), SurfaceError>
    where
        S: MapSurface<Marker = M>,
    {
        for (id, handle) in &self.markers {
            let visual = casualties
                .iter()
                .find(|c| &c.id == id)
                .map_or_else(MarkerVisual::default, |c| visual_for(c, filter, focused_id));
            surface.set_marker_visual(handle, visual)?;
        }
        Ok(())
    }

    /// Remove every marker from the surface and forget it. Failures are logged
    /// and skipped so no handle survives in the registry.
    pub fn remove_all<S>(&mut self, surface: &mut S)
    where
        S: MapSurface<Marker = M>,
    {
        for (id, handle) in self.markers.drain() {
            if let Err(err) = surface.remove_marker(handle) {
                log::warn!("failed to remove marker {id}: {err}");
            }
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.markers.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
