//! Scene host boundary and the placement driver.
//!
//! The 3D content tool is abstracted behind [`SceneHost`]; the driver only
//! asks it to import meshes, instance them at placements, and remove
//! objects by name predicate. [`ManifestHost`] is a file-backed host so
//! the full pipeline runs without a GUI tool.

pub mod manifest;

pub use manifest::ManifestHost;

use crate::assets::{MeshIndex, TextureIndex};
use crate::error::{RebuildError, Result};
use crate::map::MapDocument;
use crate::transform::{place_free_block, place_grid_block};
use crate::types::Placement;
use std::collections::HashMap;
use std::path::Path;

/// Operations the destination scene must provide.
///
/// One invocation pattern: import each referenced mesh once, instance it
/// any number of times, then remove the imported templates.
pub trait SceneHost {
    /// Handle the host uses to refer to an imported mesh template.
    type Mesh;

    /// Import a mesh file into the scene and return a handle to it.
    fn import_mesh(&mut self, path: &Path) -> Result<Self::Mesh>;

    /// Place an instance of an imported mesh.
    fn instance(&mut self, mesh: &Self::Mesh, name: &str, placement: &Placement) -> Result<()>;

    /// Remove all scene objects whose name matches the predicate.
    /// Returns the number of removed objects.
    fn remove_matching(&mut self, predicate: &dyn Fn(&str) -> bool) -> usize;

    /// Export a scene object to a mesh file.
    fn export_object(&mut self, name: &str, path: &Path) -> Result<()>;
}

/// Counters for one rebuild pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Grid-anchored block instances placed.
    pub grid_placed: usize,
    /// Free-placed block instances placed.
    pub free_placed: usize,
    /// Blocks skipped because no mesh asset matched their name, or the
    /// mesh failed to import.
    pub unresolved: usize,
    /// Blocks skipped because their record was invalid.
    pub invalid: usize,
    /// Anchored objects skipped (reconstruction disabled).
    pub anchored_skipped: usize,
    /// Template and collision objects removed in the cleanup passes.
    pub removed: usize,
}

impl BuildReport {
    /// Total instances placed.
    pub fn placed(&self) -> usize {
        self.grid_placed + self.free_placed
    }
}

/// Drives a full map rebuild against a [`SceneHost`].
///
/// Owns the asset indices for one build invocation; they are scanned once
/// and read-only from then on.
pub struct MapBuilder {
    meshes: MeshIndex,
    textures: Option<TextureIndex>,
}

impl MapBuilder {
    pub fn new(meshes: MeshIndex) -> Self {
        Self {
            meshes,
            textures: None,
        }
    }

    pub fn with_textures(mut self, textures: TextureIndex) -> Self {
        self.textures = Some(textures);
        self
    }

    pub fn mesh_index(&self) -> &MeshIndex {
        &self.meshes
    }

    pub fn texture_index(&self) -> Option<&TextureIndex> {
        self.textures.as_ref()
    }

    /// Rebuild a map document into the host scene.
    ///
    /// Per-block failures (unresolved name, failed import, invalid record)
    /// are logged and skipped; only host instancing errors abort the build.
    pub fn build<S: SceneHost>(&self, doc: &MapDocument, host: &mut S) -> Result<BuildReport> {
        let mut report = BuildReport::default();

        // Import each referenced mesh once, in first-reference order.
        let mut templates: HashMap<String, S::Mesh> = HashMap::new();
        for name in doc.block_names() {
            if templates.contains_key(name) {
                continue;
            }
            match self.import_template(name, host) {
                Ok(mesh) => {
                    templates.insert(name.to_string(), mesh);
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        for block in &doc.grid_blocks {
            let Some(mesh) = templates.get(&block.name) else {
                report.unresolved += 1;
                continue;
            };
            match place_grid_block(block) {
                Ok(placement) => {
                    host.instance(mesh, &block.name, &placement)?;
                    report.grid_placed += 1;
                }
                Err(e) => {
                    log::warn!("skipping {}: {}", block.name, e);
                    report.invalid += 1;
                }
            }
        }

        for block in &doc.free_blocks {
            let Some(mesh) = templates.get(&block.name) else {
                report.unresolved += 1;
                continue;
            };
            host.instance(mesh, &block.name, &place_free_block(block))?;
            report.free_placed += 1;
        }

        // Anchored-object placement is disabled: the rotation convention
        // for this section is unsettled, so the records are only counted.
        report.anchored_skipped = doc.anchored_objects.len();

        // Drop the imported template meshes and any collision shells,
        // keeping only the placed instances.
        report.removed += host.remove_matching(&|name| name.contains("Geometry"));
        report.removed += host.remove_matching(&|name| name.contains("(Collisions)"));

        log::info!(
            "placed {} blocks ({} unresolved, {} invalid, {} anchored skipped)",
            report.placed(),
            report.unresolved,
            report.invalid,
            report.anchored_skipped
        );

        Ok(report)
    }

    fn import_template<S: SceneHost>(&self, name: &str, host: &mut S) -> Result<S::Mesh> {
        let path = self
            .meshes
            .resolve(name)
            .ok_or_else(|| RebuildError::UnresolvedAsset(name.to_string()))?;
        host.import_mesh(path)
            .map_err(|e| RebuildError::AssetImportFailure {
                name: name.to_string(),
                source: Box::new(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::load_map_from_str;
    use glam::Vec3;
    use std::fs;
    use std::path::PathBuf;

    /// Host that records every call for assertions.
    #[derive(Default)]
    struct RecordingHost {
        imported: Vec<PathBuf>,
        instances: Vec<(String, Placement)>,
        fail_import_for: Option<String>,
    }

    impl SceneHost for RecordingHost {
        type Mesh = PathBuf;

        fn import_mesh(&mut self, path: &Path) -> Result<PathBuf> {
            if let Some(bad) = &self.fail_import_for {
                if path.to_string_lossy().contains(bad.as_str()) {
                    return Err(RebuildError::Export("import refused".to_string()));
                }
            }
            self.imported.push(path.to_path_buf());
            Ok(path.to_path_buf())
        }

        fn instance(&mut self, _mesh: &PathBuf, name: &str, placement: &Placement) -> Result<()> {
            self.instances.push((name.to_string(), *placement));
            Ok(())
        }

        fn remove_matching(&mut self, _predicate: &dyn Fn(&str) -> bool) -> usize {
            0
        }

        fn export_object(&mut self, _name: &str, _path: &Path) -> Result<()> {
            Ok(())
        }
    }

    const MAP: &str = r#"{
        "nadeoBlocks": [
            {"name": "RoadTechStraight", "pos": [64.0, 8.0, 32.0], "dir": 1,
             "blockOffsets": [[0, 0, 0], [1, 0, 0]]},
            {"name": "Missing", "pos": [0.0, 8.0, 0.0], "dir": 0,
             "blockOffsets": [[0, 0, 0]]},
            {"name": "RoadTechStraight", "pos": [0.0, 8.0, 0.0], "dir": 0,
             "blockOffsets": []}
        ],
        "freeModeBlocks": [
            {"name": "DecoCliff", "pos": [1.0, 2.0, 3.0], "rot": [0.0, 0.0, 0.0]}
        ],
        "anchoredObjects": [
            {"name": "CheckpointFlag", "pos": [0.0, 0.0, 0.0],
             "pitch": 0.0, "yaw": 0.0, "roll": 0.0}
        ]
    }"#;

    fn mesh_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("RoadTechStraight.obj"), "o road").unwrap();
        fs::write(dir.path().join("DecoCliff.obj"), "o cliff").unwrap();
        dir
    }

    #[test]
    fn test_build_places_resolved_blocks() {
        let dir = mesh_dir();
        let doc = load_map_from_str(MAP).unwrap();
        let builder = MapBuilder::new(MeshIndex::scan(dir.path()).unwrap());
        let mut host = RecordingHost::default();

        let report = builder.build(&doc, &mut host).unwrap();

        assert_eq!(report.grid_placed, 1);
        assert_eq!(report.free_placed, 1);
        assert_eq!(report.unresolved, 1);
        assert_eq!(report.invalid, 1);
        assert_eq!(report.anchored_skipped, 1);
        assert_eq!(report.placed(), 2);

        // Each mesh imported once despite repeated references.
        assert_eq!(host.imported.len(), 2);

        // Worked placement flows through to the host untouched.
        let (name, placement) = &host.instances[0];
        assert_eq!(name, "RoadTechStraight");
        assert_eq!(placement.position, Vec3::new(112.0, 4.0, 16.0));
    }

    #[test]
    fn test_failed_import_skips_all_instances_of_name() {
        let dir = mesh_dir();
        let doc = load_map_from_str(MAP).unwrap();
        let builder = MapBuilder::new(MeshIndex::scan(dir.path()).unwrap());
        let mut host = RecordingHost {
            fail_import_for: Some("DecoCliff".to_string()),
            ..Default::default()
        };

        let report = builder.build(&doc, &mut host).unwrap();
        assert_eq!(report.free_placed, 0);
        assert_eq!(report.unresolved, 2);
        assert!(host.instances.iter().all(|(n, _)| n != "DecoCliff"));
    }

    #[test]
    fn test_empty_document_builds_empty_report() {
        let dir = mesh_dir();
        let doc = MapDocument::default();
        let builder = MapBuilder::new(MeshIndex::scan(dir.path()).unwrap());
        let mut host = RecordingHost::default();

        let report = builder.build(&doc, &mut host).unwrap();
        assert_eq!(report, BuildReport::default());
    }
}
