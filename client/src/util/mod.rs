//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (file pickers,
//! downloads, modal alerts, bundled datasets) from page and component logic
//! to improve reuse and testability.

pub mod dataset;
#[cfg(feature = "hydrate")]
pub mod file_io;
pub mod notify;
