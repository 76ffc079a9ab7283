//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and the map surface while
//! reading/writing shared state from Leptos context providers or the
//! page-owned signals passed to them.

pub mod casualty_drawer;
pub mod control_panel;
pub mod map_host;
pub mod uav_drawer;
