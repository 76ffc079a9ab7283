//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`geofence`, `mission`, `casualty_view`,
//! `control`) so individual components depend on small focused models. Only
//! `geofence` is app-wide; the rest are owned by the page that shows them.

pub mod casualty_view;
pub mod control;
pub mod geofence;
pub mod mission;
