//! Geofence files: parsing loaded point lists and serializing saved ones.
//!
//! A file is a JSON array of `{lat, lng}` objects. The start page's loader is
//! more lenient and also accepts an object wrapping the array in a `points` or
//! `global` field. Every element must carry numeric `lat` and `lng`; extra
//! fields are ignored.

#[cfg(test)]
#[path = "fence_file_test.rs"]
mod fence_file_test;

use serde_json::Value;
use thiserror::Error;

use crate::geo::Point;

/// File name offered when saving the global geofence.
pub const SAVE_FILE_NAME: &str = "global_geofence.json";

/// Which wrapper shapes a loader accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceFormat {
    /// Bare array only.
    Strict,
    /// Bare array, `{"points": [...]}`, or `{"global": [...]}`.
    Lenient,
}

/// Why a geofence file was rejected. `Display` is the operator-facing message.
#[derive(Debug, Error)]
pub enum FenceFileError {
    #[error("Invalid JSON")]
    InvalidJson(#[source] serde_json::Error),
    #[error("Expected format: [{{ lat, lng }}, ...]")]
    NotPointList,
    #[error("Invalid geofence format")]
    UnrecognizedShape,
    #[error("could not serialize geofence: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Parse file contents into an ordered point list.
///
/// # Errors
///
/// [`FenceFileError::InvalidJson`] when the text is not JSON;
/// [`FenceFileError::NotPointList`] or [`FenceFileError::UnrecognizedShape`]
/// when it parses but has the wrong shape.
pub fn parse(contents: &str, format: FenceFormat) -> Result<Vec<Point>, FenceFileError> {
    let value: Value = serde_json::from_str(contents).map_err(FenceFileError::InvalidJson)?;

    let items = match (format, value) {
        (_, Value::Array(items)) => items,
        (FenceFormat::Lenient, Value::Object(mut fields)) => ["points", "global"]
            .iter()
            .find_map(|key| match fields.remove(*key) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            })
            .ok_or_else(|| shape_error(format))?,
        _ => return Err(shape_error(format)),
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value::<Point>(item).map_err(|_| shape_error(format)))
        .collect()
}

fn shape_error(format: FenceFormat) -> FenceFileError {
    match format {
        FenceFormat::Strict => FenceFileError::NotPointList,
        FenceFormat::Lenient => FenceFileError::UnrecognizedShape,
    }
}

/// Serialize a point list as pretty-printed JSON for download.
///
/// # Errors
///
/// [`FenceFileError::Serialize`] if a coordinate cannot be represented
/// (non-finite values).
pub fn to_pretty_json(points: &[Point]) -> Result<String, FenceFileError> {
    if points.iter().any(|p| !p.lat.is_finite() || !p.lng.is_finite()) {
        return Err(FenceFileError::Serialize(<serde_json::Error as serde::ser::Error>::custom(
            "non-finite coordinate",
        )));
    }
    serde_json::to_string_pretty(points).map_err(FenceFileError::Serialize)
}
