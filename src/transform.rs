//! Block placement coordinate transform.
//!
//! Maps block records from the map file's grid coordinate space to world
//! placements. Pure functions, no host involvement.
//!
//! Grid-anchored blocks rotate about the anchor corner of their footprint,
//! not its center, so rotating a multi-cell footprint shifts its occupied
//! volume off the original cell. The transform compensates by adding the
//! footprint's full extent back along the shifted axes.

use crate::error::{RebuildError, Result};
use crate::types::{Euler, EulerOrder, Facing, FreeBlock, GridBlock, Placement, BLOCK_SIZE};
use glam::Vec3;

/// Compute the world placement for a grid-anchored block.
///
/// `pos` is the raw grid position from the record (its vertical component
/// carries the source format's fixed one-cell-height offset, which is
/// subtracted here). `footprint` must be non-empty. Only `dir` modulo 4 is
/// meaningful; any integer is accepted.
pub fn grid_placement(
    pos: [f32; 3],
    footprint: &[[i32; 3]],
    dir: i64,
    cell: Vec3,
) -> Result<Placement> {
    if footprint.is_empty() {
        return Err(RebuildError::InvalidRecord(
            "grid block has an empty footprint".to_string(),
        ));
    }

    let facing = Facing::from_index(dir);

    // Undo the source format's vertical pre-offset, then center the anchor
    // cell's footprint on its origin corner.
    let mesh_coord = Vec3::new(pos[0], pos[1] - cell.y, pos[2]);
    let anchor = mesh_coord + Vec3::new(-cell.x / 2.0, cell.y / 2.0, -cell.z / 2.0);

    // Full span of the footprint along X and Z, in world units. Offsets are
    // cell-relative, so a lone [0,0,0] footprint spans exactly one cell.
    let max_x = footprint.iter().map(|o| o[0]).max().unwrap() as f32 * cell.x + cell.x;
    let max_z = footprint.iter().map(|o| o[2]).max().unwrap() as f32 * cell.z + cell.z;

    let corrected = anchor
        + Vec3::new(
            if facing.corrects_x() { max_x } else { 0.0 },
            0.0,
            if facing.corrects_z() { max_z } else { 0.0 },
        );

    Ok(Placement::new(corrected, Euler::yaw(facing.yaw_radians())))
}

/// Compute the world placement for a free-placed block.
///
/// Position is used verbatim. The rotation reproduces the map format's
/// convention exactly: the record's first two angle components are swapped
/// into (X, Y) and the rotation applies X first, then Z, then Y. Changing
/// either the swap or the order changes composed orientations.
pub fn free_placement(pos: [f32; 3], rot: [f32; 3]) -> Placement {
    Placement::new(
        Vec3::from_array(pos),
        Euler::new(Vec3::new(rot[1], rot[0], rot[2]), EulerOrder::Xzy),
    )
}

/// [`grid_placement`] against the fixed map grid.
pub fn place_grid_block(block: &GridBlock) -> Result<Placement> {
    grid_placement(block.pos, &block.block_offsets, block.dir, BLOCK_SIZE)
}

/// [`free_placement`] for a free-block record.
pub fn place_free_block(block: &FreeBlock) -> Placement {
    free_placement(block.pos, block.rot)
}
