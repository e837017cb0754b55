//! Map document loading and parsing.
//!
//! A map file is a single JSON document with three block sections. The
//! loader is all-or-nothing: a malformed file yields an error, never a
//! partial document.

pub mod loader;

pub use loader::{load_map, load_map_from_str};

use crate::types::{AnchoredObject, FreeBlock, GridBlock};
use serde::Deserialize;

/// A parsed map: three ordered, disjoint block sequences.
///
/// Sequence order is insertion order from the source file. Constructed once
/// per load and immutable thereafter; a new load replaces the whole
/// document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapDocument {
    /// Grid-anchored blocks.
    #[serde(rename = "nadeoBlocks")]
    pub grid_blocks: Vec<GridBlock>,

    /// Free-placed blocks.
    #[serde(rename = "freeModeBlocks")]
    pub free_blocks: Vec<FreeBlock>,

    /// Anchored objects (parsed, never placed).
    #[serde(rename = "anchoredObjects")]
    pub anchored_objects: Vec<AnchoredObject>,
}

impl MapDocument {
    /// Total number of block records across all three sections.
    pub fn block_count(&self) -> usize {
        self.grid_blocks.len() + self.free_blocks.len() + self.anchored_objects.len()
    }

    /// Iterate over every block name in the document, in section order.
    pub fn block_names(&self) -> impl Iterator<Item = &str> {
        self.grid_blocks
            .iter()
            .map(|b| b.name.as_str())
            .chain(self.free_blocks.iter().map(|b| b.name.as_str()))
            .chain(self.anchored_objects.iter().map(|b| b.name.as_str()))
    }
}
