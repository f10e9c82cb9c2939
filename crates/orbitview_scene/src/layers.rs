//! Layer masks for obstruction filtering
//!
//! Each collider carries a layer; a cast carries a mask and only considers
//! colliders whose layer intersects it. This lets a scene mark geometry
//! (glass cases, hotspot triggers) that the camera should swing through.

use bitflags::bitflags;

bitflags! {
    /// Obstruction layers for filtering which colliders block the camera
    ///
    /// Each layer is a bit in a 32-bit mask. Colliders can belong to
    /// multiple layers.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CollisionLayer: u32 {
        /// Default layer for most colliders
        const DEFAULT = 1 << 0;
        /// Static scene geometry (floors, walls, pedestals)
        const STATIC = 1 << 1;
        /// Movable props placed around the subject
        const PROP = 1 << 2;
        /// See-through geometry (display glass) the camera may pass
        const GLASS = 1 << 3;
        /// Hotspot trigger volumes; never block the camera
        const TRIGGER = 1 << 4;
        /// Everything that should pull the camera in
        const BLOCKERS = Self::DEFAULT.bits() | Self::STATIC.bits() | Self::PROP.bits();
        /// All layers
        const ALL = 0xFFFFFFFF;
    }
}

impl Default for CollisionLayer {
    fn default() -> Self {
        CollisionLayer::DEFAULT
    }
}
