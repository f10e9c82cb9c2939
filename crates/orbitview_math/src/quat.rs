//! Unit quaternion for 3D rotations
//!
//! Quaternions are stored as scalar + vector parts:
//! q = w + x*i + y*j + z*k
//!
//! All constructors produce unit quaternions; operations that can drift
//! (composition chains, interpolation) renormalize.

use bytemuck::{Pod, Zeroable};
use crate::Vec3;

/// Unit quaternion representing a 3D rotation
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Quat {
    /// Scalar component
    pub w: f32,
    /// Vector component along i
    pub x: f32,
    /// Vector component along j
    pub y: f32,
    /// Vector component along k
    pub z: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self { w: 1.0, x: 0.0, y: 0.0, z: 0.0 };

    /// Create a quaternion rotating by `angle` radians around `axis`
    ///
    /// The axis is normalized; a degenerate axis yields the identity.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let axis = axis.normalized();
        if axis == Vec3::ZERO {
            return Self::IDENTITY;
        }
        let half = angle * 0.5;
        let sin_h = half.sin();
        Self {
            w: half.cos(),
            x: axis.x * sin_h,
            y: axis.y * sin_h,
            z: axis.z * sin_h,
        }
    }

    /// Build the orbit orientation from yaw and pitch, both in degrees
    ///
    /// Pitch rotates about X first, then yaw rotates about world Y:
    /// `q = yaw_about_Y ∘ pitch_about_X`. This is the combined rotation of
    /// Euler angles `(pitch, yaw, 0)` with zero roll, and it is the one
    /// composition order used everywhere in this workspace - pose
    /// derivation and pan-axis derivation both go through here.
    pub fn from_yaw_pitch(yaw_degrees: f32, pitch_degrees: f32) -> Self {
        let yaw = Self::from_axis_angle(Vec3::Y, yaw_degrees.to_radians());
        let pitch = Self::from_axis_angle(Vec3::X, pitch_degrees.to_radians());
        yaw.compose(&pitch)
    }

    /// Compute the squared magnitude
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Compute the magnitude
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Normalize to unit magnitude
    ///
    /// A zero quaternion normalizes to the identity.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            let inv = 1.0 / mag;
            Self {
                w: self.w * inv,
                x: self.x * inv,
                y: self.y * inv,
                z: self.z * inv,
            }
        } else {
            Self::IDENTITY
        }
    }

    /// Compute the conjugate
    ///
    /// For unit quaternions, this is the inverse rotation.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Dot product of the four components
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Compose two rotations: result = self * other
    ///
    /// The composed rotation applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        let a = self;
        let b = other;
        Self {
            w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            x: a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            y: a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            z: a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        }
    }

    /// Rotate a vector: v' = q * v * q†
    ///
    /// Uses the expanded sandwich product
    /// `v' = v + 2w·(qv × v) + 2·(qv × (qv × v))`
    /// which avoids constructing intermediate quaternions.
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let qv = Vec3::new(self.x, self.y, self.z);
        let t = qv.cross(v) * 2.0;
        v + t * self.w + qv.cross(t)
    }

    /// Spherical linear interpolation from self toward `other`
    ///
    /// Takes the shorter arc. Near-parallel rotations fall back to
    /// normalized linear interpolation to avoid dividing by a tiny sine.
    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        let mut dot = self.dot(other);
        let mut end = *other;

        // The two hemispheres represent the same rotation; pick the
        // shorter arc
        if dot < 0.0 {
            end = -end;
            dot = -dot;
        }

        if dot > 0.9995 {
            return Self {
                w: self.w + (end.w - self.w) * t,
                x: self.x + (end.x - self.x) * t,
                y: self.y + (end.y - self.y) * t,
                z: self.z + (end.z - self.z) * t,
            }
            .normalize();
        }

        let theta = dot.clamp(-1.0, 1.0).acos();
        let sin_theta = theta.sin();
        let wa = ((1.0 - t) * theta).sin() / sin_theta;
        let wb = (t * theta).sin() / sin_theta;

        Self {
            w: self.w * wa + end.w * wb,
            x: self.x * wa + end.x * wb,
            y: self.y * wa + end.y * wb,
            z: self.z * wa + end.z * wb,
        }
        .normalize()
    }

    /// Build the rotation that looks along `forward` with `up` as the
    /// approximate up direction
    ///
    /// The rotated Z axis points along `forward`. When `forward` is
    /// (anti)parallel to `up`, the right axis degenerates and world X is
    /// used instead, so looking straight up or down stays well-defined.
    pub fn look_rotation(forward: Vec3, up: Vec3) -> Self {
        let f = forward.normalize_or(Vec3::Z);
        let r = up.cross(f).normalize_or(Vec3::X);
        let u = f.cross(r);
        Self::from_basis(r, u, f)
    }

    /// Build a quaternion from an orthonormal basis (right, up, forward)
    ///
    /// The basis vectors become the images of X, Y, Z under the rotation.
    fn from_basis(r: Vec3, u: Vec3, f: Vec3) -> Self {
        // Rotation matrix columns are the basis vectors; standard
        // matrix-to-quaternion extraction branching on the largest
        // diagonal term for numerical stability
        let (m00, m01, m02) = (r.x, u.x, f.x);
        let (m10, m11, m12) = (r.y, u.y, f.y);
        let (m20, m21, m22) = (r.z, u.z, f.z);

        let trace = m00 + m11 + m22;
        let q = if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self {
                w: 0.25 * s,
                x: (m21 - m12) / s,
                y: (m02 - m20) / s,
                z: (m10 - m01) / s,
            }
        } else if m00 > m11 && m00 > m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
            Self {
                w: (m21 - m12) / s,
                x: 0.25 * s,
                y: (m01 + m10) / s,
                z: (m02 + m20) / s,
            }
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
            Self {
                w: (m02 - m20) / s,
                x: (m01 + m10) / s,
                y: 0.25 * s,
                z: (m12 + m21) / s,
            }
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
            Self {
                w: (m10 - m01) / s,
                x: (m02 + m20) / s,
                y: (m12 + m21) / s,
                z: 0.25 * s,
            }
        };
        q.normalize()
    }
}

impl std::ops::Neg for Quat {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            w: -self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
