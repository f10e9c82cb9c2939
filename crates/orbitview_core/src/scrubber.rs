//! Sprite-sequence rotation scrubber
//!
//! Simulates 360° rotation of an object from a ring of pre-rendered
//! frames: drag and scroll input advance a turntable angle, and the
//! angle selects which frame to display. The angle obeys the same
//! `[0, 360)` wrap invariant as the camera's yaw.

use serde::{Deserialize, Serialize};

use orbitview_math::{wrap_degrees, FULL_TURN_DEGREES};

use crate::input::InputSnapshot;

/// Configuration for the turntable scrubber
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubberConfig {
    /// Number of pre-rendered frames in the ring (floored to 1)
    pub frame_count: usize,
    /// Drag speed in degrees per second per pointer unit
    pub drag_sensitivity: f32,
    /// Degrees stepped per scroll unit
    pub scroll_step_degrees: f32,
    /// Invert the drag/scroll direction
    pub invert: bool,
    /// Spin continuously without input
    pub auto_spin: bool,
    /// Continuous spin speed in degrees per second
    pub spin_speed: f32,
}

impl Default for ScrubberConfig {
    fn default() -> Self {
        Self {
            frame_count: 36,
            drag_sensitivity: 60.0,
            scroll_step_degrees: 10.0,
            invert: false,
            auto_spin: false,
            spin_speed: 45.0,
        }
    }
}

/// Turntable scrubber selecting one of N pre-rendered frames
pub struct TurntableScrubber {
    config: ScrubberConfig,
    angle: f32,
}

impl Default for TurntableScrubber {
    fn default() -> Self {
        Self::new(ScrubberConfig::default())
    }
}

impl TurntableScrubber {
    /// Create a scrubber at angle 0
    ///
    /// A zero frame count is floored to 1 so the frame index is always
    /// well-defined.
    pub fn new(config: ScrubberConfig) -> Self {
        let mut config = config;
        config.frame_count = config.frame_count.max(1);
        config.drag_sensitivity = config.drag_sensitivity.max(0.0);
        config.scroll_step_degrees = config.scroll_step_degrees.max(0.0);
        config.spin_speed = config.spin_speed.max(0.0);
        Self { config, angle: 0.0 }
    }

    /// Current turntable angle in degrees, always in `[0, 360)`
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Jump directly to an angle (wrapped into range)
    pub fn set_angle(&mut self, degrees: f32) {
        self.angle = wrap_degrees(degrees);
    }

    /// The active configuration
    pub fn config(&self) -> &ScrubberConfig {
        &self.config
    }

    /// Frame to display for the current angle, in `[0, frame_count)`
    pub fn frame_index(&self) -> usize {
        let per_frame = FULL_TURN_DEGREES / self.config.frame_count as f32;
        // The wrap invariant keeps angle < 360, but guard the boundary
        // against float rounding in the division
        ((self.angle / per_frame) as usize).min(self.config.frame_count - 1)
    }

    /// Advance the scrubber one frame and return the frame to display
    ///
    /// Drag uses the orbit trigger's pointer delta; scroll steps by a
    /// fixed number of degrees per unit regardless of dt.
    pub fn update(&mut self, dt: f32, input: &InputSnapshot) -> usize {
        let dt = dt.max(0.0);
        let sign = if self.config.invert { -1.0 } else { 1.0 };

        let mut angle = self.angle;
        if input.orbit_held {
            angle += sign * input.pointer_dx * self.config.drag_sensitivity * dt;
        }
        angle += sign * input.scroll * self.config.scroll_step_degrees;
        if self.config.auto_spin {
            angle += self.config.spin_speed * dt;
        }

        self.angle = wrap_degrees(angle);
        self.frame_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrubber(frame_count: usize) -> TurntableScrubber {
        TurntableScrubber::new(ScrubberConfig {
            frame_count,
            ..ScrubberConfig::default()
        })
    }

    #[test]
    fn test_starts_at_frame_zero() {
        let s = scrubber(36);
        assert_eq!(s.angle(), 0.0);
        assert_eq!(s.frame_index(), 0);
    }

    #[test]
    fn test_frame_index_tracks_angle() {
        let mut s = scrubber(36);
        // 10° per frame with 36 frames
        s.set_angle(5.0);
        assert_eq!(s.frame_index(), 0);
        s.set_angle(10.0);
        assert_eq!(s.frame_index(), 1);
        s.set_angle(355.0);
        assert_eq!(s.frame_index(), 35);
    }

    #[test]
    fn test_frame_index_always_in_range() {
        let mut s = scrubber(24);
        for i in 0..1000 {
            s.set_angle(i as f32 * 3.7);
            assert!(s.frame_index() < 24);
        }
    }

    #[test]
    fn test_full_drag_returns_to_frame_zero() {
        let mut s = scrubber(36);
        // drag_sensitivity 60 °/s per unit: 15° per update, 24 updates
        // accumulate exactly 360° (every partial sum is float-exact)
        for _ in 0..24 {
            s.update(0.25, &InputSnapshot::orbit_drag(1.0, 0.0));
        }
        assert_eq!(s.angle(), 0.0);
        assert_eq!(s.frame_index(), 0);
    }

    #[test]
    fn test_scroll_steps_wrap_both_directions() {
        let mut s = scrubber(36);
        // scroll_step 10°: one notch back from zero wraps to 350
        s.update(0.016, &InputSnapshot::scrolled(-1.0));
        assert!((s.angle() - 350.0).abs() < 0.001);
        assert_eq!(s.frame_index(), 35);

        s.update(0.016, &InputSnapshot::scrolled(1.0));
        assert!(s.angle() < 0.001);
        assert_eq!(s.frame_index(), 0);
    }

    #[test]
    fn test_scroll_independent_of_dt() {
        let mut a = scrubber(36);
        let mut b = scrubber(36);
        a.update(0.016, &InputSnapshot::scrolled(2.0));
        b.update(0.1, &InputSnapshot::scrolled(2.0));
        assert_eq!(a.angle(), b.angle());
    }

    #[test]
    fn test_invert_flips_direction() {
        let mut s = TurntableScrubber::new(ScrubberConfig {
            invert: true,
            ..ScrubberConfig::default()
        });
        s.update(0.016, &InputSnapshot::scrolled(1.0));
        assert!((s.angle() - 350.0).abs() < 0.001);
    }

    #[test]
    fn test_auto_spin() {
        let mut s = TurntableScrubber::new(ScrubberConfig {
            auto_spin: true,
            spin_speed: 90.0,
            ..ScrubberConfig::default()
        });
        s.update(0.5, &InputSnapshot::IDLE);
        assert!((s.angle() - 45.0).abs() < 0.001);
    }

    #[test]
    fn test_drag_ignored_without_trigger() {
        let mut s = scrubber(36);
        s.update(
            0.1,
            &InputSnapshot {
                pointer_dx: 50.0,
                ..InputSnapshot::IDLE
            },
        );
        assert_eq!(s.angle(), 0.0);
    }

    #[test]
    fn test_zero_frame_count_floored() {
        let s = scrubber(0);
        assert_eq!(s.frame_index(), 0);
    }

    #[test]
    fn test_single_frame_ring() {
        let mut s = scrubber(1);
        s.set_angle(270.0);
        assert_eq!(s.frame_index(), 0);
        assert_eq!(s.update(0.1, &InputSnapshot::scrolled(3.0)), 0);
    }
}
