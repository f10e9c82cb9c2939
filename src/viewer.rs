//! Per-frame viewer composition
//!
//! Ties the three components and the collider world together behind one
//! `update(dt, input)` call. Everything runs single-threaded inside the
//! host's frame: each component's state is mutated exactly once, in a
//! fixed order, and the obstruction query completes synchronously.

use orbitview_core::{FadePanel, InputSnapshot, OrbitCamera, Pose, TurntableScrubber};
use orbitview_scene::ColliderWorld;

use crate::config::AppConfig;

/// Result of one viewer frame
#[derive(Clone, Copy, Debug)]
pub struct ViewerFrame {
    /// Applied camera pose; `None` while the camera has no target
    pub pose: Option<Pose>,
    /// Alpha for the UI overlay panel
    pub overlay_alpha: f32,
    /// Turntable sprite frame to display
    pub turntable_frame: usize,
}

/// The viewer core: camera, fade panel, scrubber, and obstruction scene
///
/// Fields are public on purpose - hosts point the camera, populate the
/// scene, and trigger fades directly; the viewer only owns the per-frame
/// ordering.
pub struct Viewer {
    /// Orbit camera controller
    pub camera: OrbitCamera,
    /// UI fade-out panel
    pub fade: FadePanel,
    /// Sprite turntable scrubber
    pub scrubber: TurntableScrubber,
    /// Obstruction colliders the camera pulls in against
    pub scene: ColliderWorld,
}

impl Viewer {
    /// Build a viewer from configuration
    ///
    /// The camera starts without a target; point it with
    /// [`OrbitCamera::set_center`] before expecting poses.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            camera: OrbitCamera::new(config.camera.clone()),
            fade: FadePanel::new(config.fade.clone()),
            scrubber: TurntableScrubber::new(config.scrubber.clone()),
            scene: ColliderWorld::new(),
        }
    }

    /// Advance all components one frame
    ///
    /// `dt` is unscaled elapsed time in seconds. The same snapshot is
    /// handed to the camera and the scrubber; a host that wants exclusive
    /// routing passes a zeroed snapshot to the component it is not
    /// driving.
    pub fn update(&mut self, dt: f32, input: &InputSnapshot) -> ViewerFrame {
        let pose = self.camera.update(dt, input, &self.scene);
        let overlay_alpha = self.fade.update(dt);
        let turntable_frame = self.scrubber.update(dt, input);

        ViewerFrame {
            pose,
            overlay_alpha,
            turntable_frame,
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbitview_math::Vec3;

    #[test]
    fn test_no_pose_until_centered() {
        let mut viewer = Viewer::default();
        let frame = viewer.update(0.016, &InputSnapshot::IDLE);
        assert!(frame.pose.is_none());

        viewer.camera.set_center(Vec3::ZERO, true);
        let frame = viewer.update(0.016, &InputSnapshot::IDLE);
        assert!(frame.pose.is_some());
    }

    #[test]
    fn test_frame_carries_fade_and_scrubber_output() {
        let mut viewer = Viewer::default();
        viewer.camera.set_center(Vec3::ZERO, true);

        let frame = viewer.update(0.016, &InputSnapshot::IDLE);
        assert_eq!(frame.overlay_alpha, 1.0);
        assert_eq!(frame.turntable_frame, 0);

        viewer.fade.start();
        let frame = viewer.update(0.3, &InputSnapshot::scrolled(1.0));
        assert!(frame.overlay_alpha < 1.0);
        // Default scrubber steps 10° per scroll unit with 10° frames
        assert_eq!(frame.turntable_frame, 1);
    }
}
