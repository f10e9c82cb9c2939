//! orbitview - the engine-agnostic core of a 360° product viewer
//!
//! An orbit camera (yaw/pitch/distance/pan with smoothing and obstruction
//! pull-in), a UI fade-out accumulator, and a sprite turntable scrubber,
//! all driven by one explicit `update(dt, input)` call per frame.
//! Rendering, windowing, and input devices stay on the host's side of the
//! fence: the host feeds [`InputSnapshot`]s in and takes poses, alphas,
//! and frame indices out.

pub mod config;
pub mod viewer;

pub use config::{AppConfig, ConfigError, DebugConfig};
pub use viewer::{Viewer, ViewerFrame};

// Re-export the component crates' common types at the root
pub use orbitview_core::{
    FadeConfig, FadePanel, FadeState, InputSnapshot, OrbitCamera, OrbitConfig, Pose,
    ScrubberConfig, TurntableScrubber,
};
pub use orbitview_math::{Quat, Vec3};
pub use orbitview_scene::{Collider, ColliderWorld, CollisionLayer, SceneQuery};
