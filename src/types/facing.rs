//! Cardinal facing for grid-anchored blocks.

use std::f32::consts::FRAC_PI_2;

/// One of the four 90-degree rotations a grid-anchored block can take
/// about the vertical axis.
///
/// The map format encodes this as an integer where only the value modulo 4
/// is meaningful; [`Facing::from_index`] accepts any integer and wraps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    /// All four facings in index order.
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// Build a facing from a raw direction value, wrapping modulo 4.
    pub fn from_index(dir: i64) -> Facing {
        match dir.rem_euclid(4) {
            0 => Facing::North,
            1 => Facing::East,
            2 => Facing::South,
            _ => Facing::West,
        }
    }

    /// The direction index (0-3) this facing corresponds to.
    pub fn index(&self) -> i64 {
        match self {
            Facing::North => 0,
            Facing::East => 1,
            Facing::South => 2,
            Facing::West => 3,
        }
    }

    /// Rotation about the vertical axis, in radians: `(pi/2) * (4 - index)`.
    pub fn yaw_radians(&self) -> f32 {
        FRAC_PI_2 * (4 - self.index()) as f32
    }

    /// Whether rotating a footprint to this facing shifts its occupied
    /// volume along X, requiring the full X extent to be added back.
    pub fn corrects_x(&self) -> bool {
        matches!(self, Facing::East | Facing::South)
    }

    /// Whether rotating a footprint to this facing shifts its occupied
    /// volume along Z, requiring the full Z extent to be added back.
    pub fn corrects_z(&self) -> bool {
        matches!(self, Facing::South | Facing::West)
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Facing::North => write!(f, "north"),
            Facing::East => write!(f, "east"),
            Facing::South => write!(f, "south"),
            Facing::West => write!(f, "west"),
        }
    }
}
