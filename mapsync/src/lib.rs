//! Map synchronization engine for the mission dashboard.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It keeps a
//! retained-mode Mapbox GL map consistent with the dashboard's declarative
//! state: geofence regions are provisioned once and updated by wholesale
//! geometry replacement, casualty markers are created once and restyled in
//! place, the camera follows an external focus signal, and map clicks become
//! point-add events while edit mode is engaged. The host UI owns all state and
//! calls [`engine::Engine::reconcile`] whenever it changes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`surface`] | The [`surface::MapSurface`] seam and its value types |
//! | [`mapbox`] | Mapbox GL JS implementation of the surface |
//! | [`model`] | Casualties, vehicles, triage, focus and region identity |
//! | [`geo`] | Geographic point |
//! | [`geometry`] | Point sequence to line / closed polygon |
//! | [`registry`] | Exactly-once provisioning of region sources and layers |
//! | [`fences`] | Geofence geometry pushes |
//! | [`markers`] | Casualty marker lifecycle and visual state |
//! | [`camera`] | Idle / focused camera flights |
//! | [`click`] | Click capture for edit mode |
//! | [`latch`] | Pending-target latch for asynchronous file loads |
//! | [`fence_file`] | Geofence file parsing and serialization |
//! | [`config`] | Map tunables with defaults |

pub mod camera;
pub mod click;
pub mod config;
pub mod engine;
pub mod fence_file;
pub mod fences;
pub mod geo;
pub mod geometry;
pub mod latch;
pub mod mapbox;
pub mod markers;
pub mod model;
pub mod registry;
pub mod surface;

#[cfg(test)]
#[path = "fake_test.rs"]
mod fake;
