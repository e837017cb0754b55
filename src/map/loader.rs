//! Map file loading.

use super::MapDocument;
use crate::error::{RebuildError, Result};
use std::path::Path;

/// The top-level sections every map file must carry.
const REQUIRED_KEYS: [&str; 3] = ["nadeoBlocks", "freeModeBlocks", "anchoredObjects"];

/// Load a map document from a JSON file.
///
/// Fails with [`RebuildError::MapRead`] if the file cannot be opened or is
/// not well-formed JSON, and with [`RebuildError::MapFormat`] if a required
/// section is missing or a record does not match the schema.
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<MapDocument> {
    let path = path.as_ref();

    let contents = std::fs::read_to_string(path).map_err(|e| RebuildError::MapRead {
        path: path.to_path_buf(),
        source: Box::new(e.into()),
    })?;

    match load_map_from_str(&contents) {
        // Syntax-level failures are read errors; keep the path in them.
        Err(e @ RebuildError::Json(_)) => Err(RebuildError::MapRead {
            path: path.to_path_buf(),
            source: Box::new(e),
        }),
        other => other,
    }
}

/// Parse a map document from a JSON string.
pub fn load_map_from_str(contents: &str) -> Result<MapDocument> {
    let value: serde_json::Value = serde_json::from_str(contents)?;

    let object = value
        .as_object()
        .ok_or_else(|| RebuildError::MapFormat("top level is not an object".to_string()))?;

    // Check all required sections up front so the error names the first
    // missing key rather than whatever serde trips over.
    for key in REQUIRED_KEYS {
        if !object.contains_key(key) {
            return Err(RebuildError::MapFormat(format!(
                "missing required key: {}",
                key
            )));
        }
    }

    serde_json::from_value(value)
        .map_err(|e| RebuildError::MapFormat(format!("malformed block record: {}", e)))
}
