//! Camera pose (position + orientation)

use orbitview_math::{Quat, Vec3};

/// A position and orientation pair
///
/// The orientation's rotated Z axis is the viewing direction; see
/// [`Quat::look_rotation`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Position in world space
    pub position: Vec3,
    /// Orientation as a unit quaternion
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Pose {
    /// Create a pose from position and orientation
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// The identity pose at the origin
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }

    /// Create a pose at `position` looking toward `target` with `up` as
    /// the approximate up direction
    pub fn looking_at(position: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::look_rotation(target - position, up),
        }
    }

    /// The viewing direction
    pub fn forward(&self) -> Vec3 {
        self.rotation.rotate(Vec3::Z)
    }

    /// The camera-local right axis
    pub fn right(&self) -> Vec3 {
        self.rotation.rotate(Vec3::X)
    }

    /// The camera-local up axis
    pub fn up(&self) -> Vec3 {
        self.rotation.rotate(Vec3::Y)
    }
}
