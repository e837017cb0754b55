//! Texture index: material base name to texture files.

use crate::error::Result;
use std::collections::HashMap;
use std::path::Path;

/// Index of texture files in a folder, grouped by base name.
///
/// The base name is the part of the file name before the first `_`, or
/// before the first `.` when there is no underscore. A base maps to every
/// matching file in scan order (e.g. `Road_D.dds`, `Road_N.dds` both file
/// under `Road`); material lookup uses the first.
#[derive(Debug, Default, Clone)]
pub struct TextureIndex {
    files: HashMap<String, Vec<String>>,
}

impl TextureIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a folder (non-recursive) for `.dds` and `.png` textures.
    pub fn scan<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let mut index = Self::new();

        for entry in std::fs::read_dir(dir.as_ref())? {
            let entry = entry?;
            let path = entry.path();
            let is_texture = path
                .extension()
                .map(|e| e == "dds" || e == "png")
                .unwrap_or(false);
            if !is_texture {
                continue;
            }

            let file_name = path.file_name().unwrap_or_default().to_string_lossy();
            if let Some(base) = base_name(&file_name) {
                index
                    .files
                    .entry(base.to_string())
                    .or_default()
                    .push(file_name.to_string());
            }
        }

        log::info!(
            "found {} texture groups under {}",
            index.len(),
            dir.as_ref().display()
        );
        Ok(index)
    }

    /// All files registered for a base name.
    pub fn files_for(&self, base: &str) -> Option<&[String]> {
        self.files.get(base).map(Vec::as_slice)
    }

    /// Resolve a material name to its primary texture file.
    ///
    /// Material names coming out of mesh imports may carry a backslashed
    /// path prefix and an extension; both are stripped before lookup.
    pub fn resolve_material(&self, material_name: &str) -> Option<&str> {
        let base = material_base(material_name);
        self.files
            .get(base)
            .and_then(|files| files.first())
            .map(String::as_str)
    }

    /// Number of distinct base names.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Base name of a texture file: before the first `_`, else before the
/// first `.`. Returns None for names that reduce to nothing.
fn base_name(file_name: &str) -> Option<&str> {
    let base = if file_name.contains('_') {
        file_name.split('_').next().unwrap_or("")
    } else {
        file_name.split('.').next().unwrap_or("")
    };
    if base.is_empty() {
        None
    } else {
        Some(base)
    }
}

/// Base name of a material: last backslash-separated component, without
/// extension.
fn material_base(material_name: &str) -> &str {
    let name = material_name.rsplit('\\').next().unwrap_or(material_name);
    name.split('.').next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_base_name_rules() {
        assert_eq!(base_name("Road_D.dds"), Some("Road"));
        assert_eq!(base_name("DecoHill2.png"), Some("DecoHill2"));
        assert_eq!(base_name("_D.dds"), None);
    }

    #[test]
    fn test_material_base_strips_path_and_extension() {
        assert_eq!(material_base("D:\\Textures\\Road.001"), "Road");
        assert_eq!(material_base("Road"), "Road");
    }

    #[test]
    fn test_scan_groups_by_base() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Road_D.dds"), [0u8; 4]).unwrap();
        fs::write(dir.path().join("Road_N.dds"), [0u8; 4]).unwrap();
        fs::write(dir.path().join("DecoHill2.png"), [0u8; 4]).unwrap();
        fs::write(dir.path().join("readme.md"), "skip").unwrap();

        let index = TextureIndex::scan(dir.path()).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.files_for("Road").unwrap().len(), 2);
        assert_eq!(index.files_for("DecoHill2").unwrap().len(), 1);
        assert!(index.files_for("readme").is_none());
    }

    #[test]
    fn test_resolve_material() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Road_D.dds"), [0u8; 4]).unwrap();

        let index = TextureIndex::scan(dir.path()).unwrap();
        assert_eq!(
            index.resolve_material("C:\\Export\\Road.002"),
            Some("Road_D.dds")
        );
        assert_eq!(index.resolve_material("Grass"), None);
    }
}
