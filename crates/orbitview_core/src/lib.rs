//! Viewer components for orbitview
//!
//! This crate provides the per-frame state machines of the viewer:
//!
//! - [`OrbitCamera`] - yaw/pitch/distance orbit controller with panning,
//!   scheduled full turns, smoothing, and obstruction pull-in
//! - [`FadePanel`] - UI fade-out progress accumulator
//! - [`TurntableScrubber`] - sprite-sequence 360° rotation scrubber
//! - [`Pose`] - a position + orientation pair
//! - [`InputSnapshot`] - the per-frame input contract
//!
//! Every component follows the same shape: state owned by the component,
//! mutated exactly once per rendered frame by a single
//! `update(dt, ...)` call from the host loop. No component talks to an
//! engine; they consume snapshots and produce plain values.

mod fade;
mod input;
mod orbit;
mod pose;
mod scrubber;

pub use fade::{FadeConfig, FadePanel, FadeState};
pub use input::InputSnapshot;
pub use orbit::{OrbitCamera, OrbitConfig};
pub use pose::Pose;
pub use scrubber::{ScrubberConfig, TurntableScrubber};

// Re-export commonly used types from the math and scene crates for
// convenience
pub use orbitview_math::{wrap_degrees, Quat, Vec3, FULL_TURN_DEGREES};
pub use orbitview_scene::{CollisionLayer, SceneQuery};
