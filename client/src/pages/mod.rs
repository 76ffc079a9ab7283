//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Geofence geometry is the only state shared between them.

pub mod casualty;
pub mod start;
