//! The obstruction-query seam between the camera and a concrete scene
//!
//! The camera controller is written against this trait, never against a
//! concrete collider container, so hosts can route the query to their own
//! spatial structures.

use orbitview_math::Vec3;

use crate::layers::CollisionLayer;
use crate::world::ColliderWorld;

/// Synchronous obstruction queries answered within the frame
pub trait SceneQuery {
    /// Distance to the nearest obstruction along a swept sphere
    ///
    /// Sweeps a sphere of `radius` from `origin` along the `direction`
    /// for at most `max_distance`, considering only colliders whose layer
    /// intersects `mask`. Returns `None` when nothing obstructs.
    fn nearest_obstruction(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
        mask: CollisionLayer,
    ) -> Option<f32>;
}

impl SceneQuery for ColliderWorld {
    fn nearest_obstruction(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
        mask: CollisionLayer,
    ) -> Option<f32> {
        self.sphere_cast(origin, radius, direction, max_distance, mask)
            .map(|hit| hit.distance)
    }
}

/// The empty scene: nothing ever obstructs
///
/// Lets collision-free viewers and tests pass `&()` instead of building a
/// world.
impl SceneQuery for () {
    fn nearest_obstruction(
        &self,
        _origin: Vec3,
        _radius: f32,
        _direction: Vec3,
        _max_distance: f32,
        _mask: CollisionLayer,
    ) -> Option<f32> {
        None
    }
}
