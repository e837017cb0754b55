//! Block re-export helpers.
//!
//! Exports scene objects back to mesh files through the host and rewrites
//! the texture references embedded in the sibling material library to the
//! `textures/<filename>` relative convention.

use crate::error::Result;
use crate::scene::{MapBuilder, SceneHost};
use std::path::Path;

/// Rewrite `map_Kd` texture references in a Wavefront material library to
/// relative `textures/<filename>` paths.
///
/// Exported material libraries carry absolute paths from whatever machine
/// produced the source textures; only the file name is kept. Other lines
/// pass through untouched.
pub fn rewrite_mtl_texture_paths(mtl: &str) -> String {
    let mut out = String::with_capacity(mtl.len());
    for line in mtl.lines() {
        if let Some(value) = line.strip_prefix("map_Kd") {
            let file_name = value
                .trim()
                .rsplit(['\\', '/'])
                .next()
                .unwrap_or("")
                .trim();
            out.push_str("map_Kd textures/");
            out.push_str(file_name);
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

/// Export one scene object to `<output_dir>/<name>.obj` and rewrite its
/// sibling `.mtl`.
pub fn export_block<S: SceneHost>(host: &mut S, name: &str, output_dir: &Path) -> Result<()> {
    let obj_path = output_dir.join(format!("{}.obj", name));
    log::info!("exporting block {} to {}", name, obj_path.display());
    host.export_object(name, &obj_path)?;

    let mtl_path = obj_path.with_extension("mtl");
    let mtl = std::fs::read_to_string(&mtl_path)?;
    std::fs::write(&mtl_path, rewrite_mtl_texture_paths(&mtl))?;
    Ok(())
}

/// Export every mesh in the builder's index: import each into the scene,
/// export it, and continue past per-block failures.
///
/// Returns the number of blocks exported.
pub fn export_all_blocks<S: SceneHost>(
    builder: &MapBuilder,
    host: &mut S,
    output_dir: &Path,
) -> Result<usize> {
    let mut exported = 0;
    for (name, path) in builder.mesh_index().iter() {
        if let Err(e) = host.import_mesh(path) {
            log::warn!("failed to import {}: {}", name, e);
            continue;
        }
        match export_block(host, name, output_dir) {
            Ok(()) => exported += 1,
            Err(e) => log::warn!("failed to export {}: {}", name, e),
        }
    }
    Ok(exported)
}
