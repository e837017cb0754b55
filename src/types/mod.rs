//! Shared types used throughout the library.

mod facing;
mod placement;

pub use facing::Facing;
pub use placement::{Euler, EulerOrder, Placement};

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Dimensions of one grid cell (width, height, depth), in world units.
///
/// Fixed for the map format: every grid-anchored block snaps to cells of
/// this size.
pub const BLOCK_SIZE: Vec3 = Vec3::new(32.0, 8.0, 32.0);

/// A grid-anchored block: position snaps to the cell grid, orientation is
/// one of four cardinal rotations about the vertical axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridBlock {
    /// Block name, used to resolve a mesh asset.
    pub name: String,
    /// Raw grid position. The vertical component carries the source
    /// format's fixed one-cell-height offset.
    pub pos: [f32; 3],
    /// Raw direction value. Only its value modulo 4 is meaningful.
    pub dir: i64,
    /// Grid cells the block spans, as offsets from its anchor cell.
    #[serde(rename = "blockOffsets")]
    pub block_offsets: Vec<[i32; 3]>,
}

impl GridBlock {
    /// The cardinal facing derived from the raw direction value.
    pub fn facing(&self) -> Facing {
        Facing::from_index(self.dir)
    }
}

/// A free-placed block: arbitrary continuous position and rotation,
/// not grid-snapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeBlock {
    pub name: String,
    /// World position, used verbatim.
    pub pos: [f32; 3],
    /// Explicit rotation angles in radians, as stored in the map file.
    pub rot: [f32; 3],
}

/// An anchored object: third placement kind in the map format. Parsed and
/// counted, but reconstruction is disabled pending a settled rotation
/// convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchoredObject {
    pub name: String,
    pub pos: [f32; 3],
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_block_facing_wraps() {
        let block = GridBlock {
            name: "RoadTechStraight".to_string(),
            pos: [0.0, 8.0, 0.0],
            dir: 6,
            block_offsets: vec![[0, 0, 0]],
        };
        assert_eq!(block.facing(), Facing::from_index(2));
    }

    #[test]
    fn test_record_deserialization() {
        let json = r#"{
            "name": "RoadTechCurve2",
            "pos": [64.0, 8.0, 32.0],
            "dir": 1,
            "blockOffsets": [[0, 0, 0], [1, 0, 0]]
        }"#;
        let block: GridBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block.name, "RoadTechCurve2");
        assert_eq!(block.block_offsets.len(), 2);
        assert_eq!(block.dir, 1);
    }
}
