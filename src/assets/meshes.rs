//! Mesh asset index: block name to mesh file path.

use crate::error::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Index of mesh assets found under a root folder.
///
/// Built by a single recursive scan for `.obj` files; the file stem is the
/// block name. When the same stem appears in several folders the last one
/// scanned wins.
#[derive(Debug, Default, Clone)]
pub struct MeshIndex {
    paths: HashMap<String, PathBuf>,
}

impl MeshIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a folder tree for mesh files.
    pub fn scan<P: AsRef<Path>>(root: P) -> Result<Self> {
        let mut index = Self::new();
        index.scan_folder(root.as_ref())?;
        log::info!(
            "found {} block meshes under {}",
            index.len(),
            root.as_ref().display()
        );
        Ok(index)
    }

    fn scan_folder(&mut self, dir: &Path) -> Result<()> {
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_dir() {
                self.scan_folder(&path)?;
            } else if path.extension().map(|e| e == "obj").unwrap_or(false) {
                // The stem may still contain dots; the block name is the
                // part before the first one.
                let stem = path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .split('.')
                    .next()
                    .unwrap_or_default()
                    .to_string();
                if !stem.is_empty() {
                    self.paths.insert(stem, path);
                }
            }
        }
        Ok(())
    }

    /// Look up the mesh path for a block name.
    pub fn resolve(&self, name: &str) -> Option<&Path> {
        self.paths.get(name).map(PathBuf::as_path)
    }

    /// Number of indexed meshes.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over (name, path) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.paths.iter().map(|(k, v)| (k.as_str(), v.as_path()))
    }
}
