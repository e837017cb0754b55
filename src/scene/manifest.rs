//! A scene host that writes a JSON manifest instead of driving a GUI tool.

use super::SceneHost;
use crate::error::{RebuildError, Result};
use crate::types::Placement;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One placed instance in the manifest.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry {
    pub name: String,
    pub mesh: PathBuf,
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    /// Euler application order tag ("XYZ" or "XZY").
    pub rotation_order: &'static str,
}

/// Collects resolved placements and serializes them to JSON.
///
/// Imported meshes are tracked by path; `remove_matching` drops recorded
/// entries by name, mirroring the cleanup passes a real scene host runs.
#[derive(Debug, Default)]
pub struct ManifestHost {
    entries: Vec<ManifestEntry>,
}

impl ManifestHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placed entries, in placement order.
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Serialize the manifest to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Write the manifest to a file.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl SceneHost for ManifestHost {
    type Mesh = PathBuf;

    fn import_mesh(&mut self, path: &Path) -> Result<PathBuf> {
        if !path.is_file() {
            return Err(RebuildError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("mesh file not found: {}", path.display()),
            )));
        }
        Ok(path.to_path_buf())
    }

    fn instance(&mut self, mesh: &PathBuf, name: &str, placement: &Placement) -> Result<()> {
        self.entries.push(ManifestEntry {
            name: name.to_string(),
            mesh: mesh.clone(),
            position: placement.position.to_array(),
            rotation: placement.rotation.angles.to_array(),
            rotation_order: placement.rotation.order.as_str(),
        });
        Ok(())
    }

    fn remove_matching(&mut self, predicate: &dyn Fn(&str) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !predicate(&e.name));
        before - self.entries.len()
    }

    fn export_object(&mut self, name: &str, _path: &Path) -> Result<()> {
        Err(RebuildError::Export(format!(
            "manifest host cannot export scene objects ({})",
            name
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Euler, EulerOrder};
    use glam::Vec3;
    use std::fs;

    #[test]
    fn test_instance_records_placement() {
        let dir = tempfile::tempdir().unwrap();
        let mesh_path = dir.path().join("RoadTechStraight.obj");
        fs::write(&mesh_path, "o road").unwrap();

        let mut host = ManifestHost::new();
        let mesh = host.import_mesh(&mesh_path).unwrap();
        let placement = Placement::new(
            Vec3::new(112.0, 4.0, 16.0),
            Euler::new(Vec3::new(0.2, 0.1, 0.3), EulerOrder::Xzy),
        );
        host.instance(&mesh, "RoadTechStraight", &placement).unwrap();

        let entries = host.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].position, [112.0, 4.0, 16.0]);
        assert_eq!(entries[0].rotation, [0.2, 0.1, 0.3]);
        assert_eq!(entries[0].rotation_order, "XZY");
    }

    #[test]
    fn test_import_missing_mesh_fails() {
        let mut host = ManifestHost::new();
        assert!(host.import_mesh(Path::new("/nonexistent/road.obj")).is_err());
    }

    #[test]
    fn test_remove_matching_drops_entries() {
        let mut host = ManifestHost::new();
        let placement = Placement::new(Vec3::ZERO, Euler::default());
        let mesh = PathBuf::from("road.obj");
        host.instance(&mesh, "Road Geometry", &placement).unwrap();
        host.instance(&mesh, "Road", &placement).unwrap();

        let removed = host.remove_matching(&|n| n.contains("Geometry"));
        assert_eq!(removed, 1);
        assert_eq!(host.entries().len(), 1);
        assert_eq!(host.entries()[0].name, "Road");
    }

    #[test]
    fn test_manifest_round_trips_as_json() {
        let mut host = ManifestHost::new();
        let placement = Placement::new(Vec3::new(1.0, 2.0, 3.0), Euler::yaw(0.5));
        host.instance(&PathBuf::from("road.obj"), "Road", &placement)
            .unwrap();

        let json = host.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "Road");
        assert_eq!(parsed[0]["rotation_order"], "XYZ");
    }
}
