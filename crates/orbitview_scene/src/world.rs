//! Collider container and nearest-hit sphere casts

use slotmap::{new_key_type, SlotMap};

use orbitview_math::Vec3;

use crate::cast::{sweep_sphere_vs_aabb, sweep_sphere_vs_plane, sweep_sphere_vs_sphere};
use crate::layers::CollisionLayer;
use crate::shapes::Collider;

new_key_type! {
    /// Generational key to a collider in a [`ColliderWorld`]
    pub struct ColliderKey;
}

/// A collider plus the layer it belongs to
#[derive(Clone, Copy, Debug)]
pub struct SceneCollider {
    /// Collision shape
    pub collider: Collider,
    /// Layer used for cast filtering
    pub layer: CollisionLayer,
}

impl SceneCollider {
    /// Create a scene collider on the given layer
    pub fn new(collider: Collider, layer: CollisionLayer) -> Self {
        Self { collider, layer }
    }
}

/// Result of a sphere cast: the nearest obstruction
#[derive(Clone, Copy, Debug)]
pub struct CastHit {
    /// Key of the collider that was hit
    pub key: ColliderKey,
    /// Travel distance along the cast at first contact
    pub distance: f32,
}

/// Container for all obstruction colliders in a scene
pub struct ColliderWorld {
    /// All colliders (using generational keys)
    colliders: SlotMap<ColliderKey, SceneCollider>,
}

impl Default for ColliderWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl ColliderWorld {
    /// Create an empty collider world
    pub fn new() -> Self {
        Self {
            colliders: SlotMap::with_key(),
        }
    }

    /// Add a collider on the given layer and return its key
    pub fn insert(&mut self, collider: Collider, layer: CollisionLayer) -> ColliderKey {
        self.colliders.insert(SceneCollider::new(collider, layer))
    }

    /// Remove a collider and return it
    pub fn remove(&mut self, key: ColliderKey) -> Option<SceneCollider> {
        self.colliders.remove(key)
    }

    /// Get an immutable reference to a collider by key
    pub fn get(&self, key: ColliderKey) -> Option<&SceneCollider> {
        self.colliders.get(key)
    }

    /// Get a mutable reference to a collider by key
    pub fn get_mut(&mut self, key: ColliderKey) -> Option<&mut SceneCollider> {
        self.colliders.get_mut(key)
    }

    /// Translate a collider by a delta
    ///
    /// Returns false if the key is stale.
    pub fn translate(&mut self, key: ColliderKey, delta: Vec3) -> bool {
        match self.colliders.get_mut(key) {
            Some(c) => {
                c.collider = c.collider.translated(delta);
                true
            }
            None => false,
        }
    }

    /// Get the number of colliders
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Check whether the world holds no colliders
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Iterate over all collider keys
    pub fn keys(&self) -> impl Iterator<Item = ColliderKey> + '_ {
        self.colliders.keys()
    }

    /// Sweep a sphere through the scene and return the nearest obstruction
    ///
    /// Only colliders whose layer intersects `mask` are considered.
    /// `direction` is normalized internally; a degenerate direction yields
    /// no hit.
    pub fn sphere_cast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
        mask: CollisionLayer,
    ) -> Option<CastHit> {
        let direction = direction.normalize_or(Vec3::ZERO);
        if direction == Vec3::ZERO || max_distance <= 0.0 {
            return None;
        }

        let mut nearest: Option<CastHit> = None;
        for (key, scene_collider) in &self.colliders {
            if !scene_collider.layer.intersects(mask) {
                continue;
            }

            let hit = match &scene_collider.collider {
                Collider::Sphere(s) => {
                    sweep_sphere_vs_sphere(origin, radius, direction, max_distance, s)
                }
                Collider::Aabb(b) => {
                    sweep_sphere_vs_aabb(origin, radius, direction, max_distance, b)
                }
                Collider::Plane(p) => {
                    sweep_sphere_vs_plane(origin, radius, direction, max_distance, p)
                }
            };

            if let Some(distance) = hit {
                let closer = nearest.map_or(true, |n| distance < n.distance);
                if closer {
                    nearest = Some(CastHit { key, distance });
                }
            }
        }

        nearest
    }
}
