//! Asset directory indices.
//!
//! Mesh and texture folders are scanned once per build invocation; the
//! resulting indices are read-only for the rest of the build.

pub mod meshes;
pub mod textures;

pub use meshes::MeshIndex;
pub use textures::TextureIndex;
