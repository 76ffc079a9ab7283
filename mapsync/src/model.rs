//! Mission entities fed into the engine: casualties, vehicles, and the ids
//! that tie geofence regions and focus signals back to them.
//!
//! These types are owned by the host application and handed to the engine by
//! reference on every update. The engine never stores them; it only keeps the
//! rendering handles it derived from them (see [`crate::markers`] and
//! [`crate::registry`]).

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::Point;

/// Id string used for the global geofence region.
pub const GLOBAL_REGION_ID: &str = "GLOBAL";

/// Triage category of a casualty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Triage {
    Red,
    Yellow,
    Green,
    Black,
}

impl Triage {
    /// Lowercase name, also used as the marker class suffix.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Black => "black",
        }
    }
}

/// Which triage categories are visible on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriageFilter {
    Red,
    Yellow,
    Green,
    Black,
    #[default]
    All,
}

impl TriageFilter {
    /// Every filter in display order.
    pub const ALL: [TriageFilter; 5] = [Self::Red, Self::Yellow, Self::Green, Self::Black, Self::All];

    /// Whether a casualty of `triage` passes this filter.
    #[must_use]
    pub fn admits(self, triage: Triage) -> bool {
        match self {
            Self::All => true,
            Self::Red => triage == Triage::Red,
            Self::Yellow => triage == Triage::Yellow,
            Self::Green => triage == Triage::Green,
            Self::Black => triage == Triage::Black,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Black => "black",
            Self::All => "all",
        }
    }
}

/// A casualty as supplied by the mission dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Casualty {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub triage: Triage,
    #[serde(rename = "idColor")]
    pub id_color: String,
}

impl Casualty {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.lat, self.lng)
    }
}

/// An uncrewed aerial vehicle. Position is optional; most datasets only carry
/// identity and color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Uav {
    pub id: String,
    #[serde(rename = "idColor")]
    pub id_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl Uav {
    /// Known position, if the dataset carries both coordinates.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        Some(Point::new(self.lat?, self.lng?))
    }
}

/// Entity the camera should center on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    Casualty(String),
    Vehicle(String),
}

impl FocusTarget {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Casualty(id) | Self::Vehicle(id) => id,
        }
    }

    /// Resolve the target to a coordinate. Unknown ids and vehicles without a
    /// position resolve to `None`.
    #[must_use]
    pub fn resolve(&self, casualties: &[Casualty], uavs: &[Uav]) -> Option<Point> {
        match self {
            Self::Casualty(id) => casualties.iter().find(|c| &c.id == id).map(Casualty::position),
            Self::Vehicle(id) => uavs.iter().find(|u| &u.id == id).and_then(Uav::position),
        }
    }
}

/// Geofence region identity: the single global fence or one per vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionId {
    Global,
    Vehicle(String),
}

impl RegionId {
    /// Parse the external id form: `"GLOBAL"` or a vehicle id.
    #[must_use]
    pub fn parse(id: &str) -> Self {
        if id == GLOBAL_REGION_ID {
            Self::Global
        } else {
            Self::Vehicle(id.to_owned())
        }
    }

    /// Region for the currently active context: a selected vehicle, or global.
    #[must_use]
    pub fn for_active(active_vehicle: Option<&str>) -> Self {
        active_vehicle.map_or(Self::Global, |id| Self::Vehicle(id.to_owned()))
    }

    /// Name of the rendering source that holds this region's geometry.
    #[must_use]
    pub fn source_id(&self) -> String {
        match self {
            Self::Global => "global-geofence".to_owned(),
            Self::Vehicle(id) => format!("uav-geofence-{id}"),
        }
    }

    #[must_use]
    pub fn fill_layer_id(&self) -> String {
        format!("{}-fill", self.source_id())
    }

    #[must_use]
    pub fn line_layer_id(&self) -> String {
        format!("{}-line", self.source_id())
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str(GLOBAL_REGION_ID),
            Self::Vehicle(id) => f.write_str(id),
        }
    }
}
