//! Mission gate status and the start page's entry rules.

#[cfg(test)]
#[path = "mission_test.rs"]
mod mission_test;

use serde::Deserialize;
use serde_json::Value;

/// Delay between pressing ENTER and navigating to the mission page.
pub const ENTER_TRANSITION_MS: u32 = 650;

const BUNDLED_STATUS: &str = include_str!("../data/status.json");

/// Gate telemetry as shipped in `status.json`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MissionStatus {
    pub gate: String,
    #[serde(default)]
    pub telemetry_connected: Value,
    #[serde(default)]
    pub mission_ready: bool,
}

impl MissionStatus {
    /// Parse a status document.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `raw` is not a status object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The status bundled with the build.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the bundled file is malformed.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED_STATUS)
    }

    /// A closed, not-ready status used when no status is available.
    #[must_use]
    pub fn closed() -> Self {
        Self { gate: "CLOSED".to_owned(), telemetry_connected: Value::Null, mission_ready: false }
    }

    #[must_use]
    pub fn gate_open(&self) -> bool {
        self.gate == "1" || self.gate == "OPEN"
    }

    /// Telemetry value as shown on the status panel.
    #[must_use]
    pub fn telemetry_label(&self) -> String {
        match &self.telemetry_connected {
            Value::String(s) => s.clone(),
            Value::Bool(true) => "YES".to_owned(),
            Value::Bool(false) => "NO".to_owned(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    /// Which entry, if any, is allowed with the override key in `shift_held`.
    #[must_use]
    pub fn entry(&self, shift_held: bool) -> Entry {
        match (self.gate_open(), self.mission_ready, shift_held) {
            (true, true, _) => Entry::Normal,
            (true, false, true) => Entry::Override,
            _ => Entry::Blocked,
        }
    }
}

/// Mission entry decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry {
    Blocked,
    Normal,
    Override,
}

impl Entry {
    #[must_use]
    pub fn allowed(self) -> bool {
        self != Self::Blocked
    }

    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Override => "OVERRIDE",
            Self::Blocked | Self::Normal => "ENTER MISSION",
        }
    }
}
