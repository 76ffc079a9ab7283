//! Exactly-once provisioning of geofence sources and layers.
//!
//! The surface is the source of truth for what exists: provisioning asks it
//! before creating anything, so running the routine again (a re-run effect, a
//! vehicle list that grew) never duplicates a source or a layer. The registry
//! additionally remembers which regions it has provisioned so callers can skip
//! the surface round-trips on the hot path.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::BTreeSet;

use crate::geometry::Geometry;
use crate::model::RegionId;
use crate::surface::{LayerKind, LayerSpec, MapSurface, SurfaceError};

/// Styling applied to every provisioned region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FenceStyle {
    pub fill_opacity: f64,
    pub line_width: f64,
}

/// Tracks which regions have their source and layers in place.
#[derive(Debug, Default)]
pub struct RegionRegistry {
    provisioned: BTreeSet<RegionId>,
}

impl RegionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `region` has a source plus fill and outline layers tinted `color`.
    ///
    /// Returns `true` if the source was created by this call.
    ///
    /// # Errors
    ///
    /// Propagates the first surface failure; the region is not recorded.
    pub fn provision<S: MapSurface>(
        &mut self,
        surface: &mut S,
        region: &RegionId,
        color: &str,
        style: FenceStyle,
    ) -> Result<bool, SurfaceError> {
        let source = region.source_id();
        let created = if surface.has_source(&source) {
            false
        } else {
            surface.add_source(&source, &Geometry::Empty)?;
            true
        };

        let layers = [
            LayerSpec {
                id: region.fill_layer_id(),
                source: source.clone(),
                kind: LayerKind::Fill,
                color: color.to_owned(),
                weight: style.fill_opacity,
            },
            LayerSpec {
                id: region.line_layer_id(),
                source: source.clone(),
                kind: LayerKind::Line,
                color: color.to_owned(),
                weight: style.line_width,
            },
        ];
        for layer in &layers {
            if !surface.has_layer(&layer.id) {
                surface.add_layer(layer)?;
            }
        }

        if created {
            log::debug!("provisioned geofence region {region} as `{source}`");
        }
        self.provisioned.insert(region.clone());
        Ok(created)
    }

    #[must_use]
    pub fn is_provisioned(&self, region: &RegionId) -> bool {
        self.provisioned.contains(region)
    }

    /// Provisioned regions in id order.
    pub fn regions(&self) -> impl Iterator<Item = &RegionId> {
        self.provisioned.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.provisioned.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.provisioned.is_empty()
    }

    /// Forget every region. Used at teardown, after the surface is gone.
    pub fn clear(&mut self) {
        self.provisioned.clear();
    }
}
