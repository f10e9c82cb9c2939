//! Obstruction queries for the orbitview camera
//!
//! This crate answers one question for the camera: "what is the nearest
//! obstruction along this swept sphere?" It provides:
//! - Collision shapes (spheres, AABBs, planes)
//! - Layer masks for filtering which colliders block the camera
//! - Swept-sphere cast tests per shape
//! - A collider container with generational keys
//! - The [`SceneQuery`] trait the camera consumes

pub mod cast;
pub mod layers;
pub mod query;
pub mod shapes;
pub mod world;

// Re-export commonly used types
pub use cast::{sweep_sphere_vs_aabb, sweep_sphere_vs_plane, sweep_sphere_vs_sphere};
pub use layers::CollisionLayer;
pub use query::SceneQuery;
pub use shapes::{Aabb, Collider, Plane, Sphere};
pub use world::{CastHit, ColliderKey, ColliderWorld, SceneCollider};
