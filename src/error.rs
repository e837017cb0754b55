//! Error types for the map rebuilder.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RebuildError.
pub type Result<T> = std::result::Result<T, RebuildError>;

/// Main error type for map rebuilding operations.
#[derive(Error, Debug)]
pub enum RebuildError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse JSON data.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Map file could not be opened or parsed as JSON.
    #[error("failed to read map {path}: {source}")]
    MapRead {
        path: PathBuf,
        #[source]
        source: Box<RebuildError>,
    },

    /// Map JSON is missing a required section or a record has the wrong shape.
    #[error("bad map format: {0}")]
    MapFormat(String),

    /// A block record violates the schema's semantic constraints.
    #[error("invalid block record: {0}")]
    InvalidRecord(String),

    /// Block name has no matching mesh asset. Non-fatal: logged and skipped.
    #[error("no mesh asset for block: {0}")]
    UnresolvedAsset(String),

    /// Importing a resolved mesh asset failed. Non-fatal: logged and skipped.
    #[error("failed to import mesh for {name}: {source}")]
    AssetImportFailure {
        name: String,
        #[source]
        source: Box<RebuildError>,
    },

    /// Failed to export a scene object.
    #[error("export error: {0}")]
    Export(String),
}
