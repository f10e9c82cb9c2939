//! 3D math for the orbitview camera core
//!
//! This crate provides the vector, rotation, and angle types the viewer
//! components are written against.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Quat`] - unit quaternion for 3D rotations
//!
//! ## Angle Utilities
//!
//! - [`wrap_degrees`] - normalize an angle into `[0, 360)`
//! - [`FULL_TURN_DEGREES`] - one complete revolution

mod vec3;
mod quat;
mod angle;

pub use vec3::Vec3;
pub use quat::Quat;
pub use angle::{wrap_degrees, FULL_TURN_DEGREES};
