//! Static mission datasets bundled into the build.

#[cfg(test)]
#[path = "dataset_test.rs"]
mod dataset_test;

use mapsync::model::{Casualty, Uav};

const CASUALTIES: &str = include_str!("../data/casualty.json");
const UAVS: &str = include_str!("../data/uavs.json");

/// # Errors
///
/// Returns the parse error if the bundled casualty list is malformed.
pub fn casualties() -> Result<Vec<Casualty>, serde_json::Error> {
    serde_json::from_str(CASUALTIES)
}

/// # Errors
///
/// Returns the parse error if the bundled vehicle list is malformed.
pub fn uavs() -> Result<Vec<Uav>, serde_json::Error> {
    serde_json::from_str(UAVS)
}

/// Unwrap a dataset, logging and substituting an empty list on failure.
pub fn or_empty<T>(what: &str, loaded: Result<Vec<T>, serde_json::Error>) -> Vec<T> {
    match loaded {
        Ok(items) => items,
        Err(err) => {
            #[cfg(feature = "hydrate")]
            log::error!("bundled {what} dataset is malformed: {err}");
            #[cfg(not(feature = "hydrate"))]
            let _ = (what, err);
            Vec::new()
        }
    }
}
