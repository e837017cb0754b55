//! Placement types: world position plus an ordered Euler rotation.

use glam::Vec3;

/// Axis application order for an Euler rotation.
///
/// Composed rotations do not commute, so the order is part of the value.
/// `Xzy` means: apply the X rotation first, then Z, then Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EulerOrder {
    #[default]
    Xyz,
    Xzy,
}

impl EulerOrder {
    /// Short tag for logs and manifests ("XYZ" / "XZY").
    pub fn as_str(&self) -> &'static str {
        match self {
            EulerOrder::Xyz => "XYZ",
            EulerOrder::Xzy => "XZY",
        }
    }
}

/// An Euler rotation: per-axis angles in radians plus their application
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Euler {
    /// Angles about the X, Y, and Z axes, in radians.
    pub angles: Vec3,
    pub order: EulerOrder,
}

impl Euler {
    pub fn new(angles: Vec3, order: EulerOrder) -> Self {
        Self { angles, order }
    }

    /// A rotation about the vertical (Y) axis only.
    pub fn yaw(angle: f32) -> Self {
        Self {
            angles: Vec3::new(0.0, angle, 0.0),
            order: EulerOrder::Xyz,
        }
    }

    /// Check if this is an identity rotation (all angles zero).
    pub fn is_identity(&self) -> bool {
        self.angles == Vec3::ZERO
    }
}

/// A resolved world placement for one block instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Euler,
}

impl Placement {
    pub fn new(position: Vec3, rotation: Euler) -> Self {
        Self { position, rotation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaw_rotation() {
        let rot = Euler::yaw(1.5);
        assert_eq!(rot.angles, Vec3::new(0.0, 1.5, 0.0));
        assert_eq!(rot.order, EulerOrder::Xyz);
        assert!(!rot.is_identity());
        assert!(Euler::yaw(0.0).is_identity());
    }
}
