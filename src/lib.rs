//! # Map Rebuilder
//!
//! A Rust library for rebuilding racing-game maps from JSON block
//! placements.
//!
//! ## Overview
//!
//! This library takes a map description (grid-anchored blocks, free-placed
//! blocks, and anchored objects) plus a folder of mesh assets, and
//! reconstructs the scene by instancing each block's mesh at its computed
//! world placement.
//!
//! ## Quick Start
//!
//! ```ignore
//! use map_rebuilder::{load_map, ManifestHost, MapBuilder, MeshIndex};
//!
//! // Parse the map file
//! let doc = load_map("path/to/map.json")?;
//!
//! // Index the mesh assets
//! let meshes = MeshIndex::scan("path/to/obj_folder")?;
//!
//! // Rebuild into a host scene (here: a JSON manifest)
//! let builder = MapBuilder::new(meshes);
//! let mut host = ManifestHost::new();
//! let report = builder.build(&doc, &mut host)?;
//! host.write("scene.json")?;
//! ```
//!
//! ## Host Integration
//!
//! Placement into an actual 3D content tool goes through the
//! [`SceneHost`] trait: implement `import_mesh`, `instance`,
//! `remove_matching`, and `export_object` against the tool's API and pass
//! the host to [`MapBuilder::build`].

pub mod error;
pub mod types;
pub mod transform;
pub mod map;
pub mod assets;
pub mod scene;
pub mod export;

// Re-export main types for convenience
pub use error::{RebuildError, Result};
pub use types::{AnchoredObject, Euler, EulerOrder, Facing, FreeBlock, GridBlock, Placement, BLOCK_SIZE};
pub use transform::{free_placement, grid_placement, place_free_block, place_grid_block};
pub use map::{load_map, load_map_from_str, MapDocument};
pub use assets::{MeshIndex, TextureIndex};
pub use scene::{BuildReport, ManifestHost, MapBuilder, SceneHost};
pub use export::{export_all_blocks, export_block, rewrite_mtl_texture_paths};
