//! Per-frame input contract
//!
//! Hosts collect whatever raw events their windowing layer produces and
//! hand the components one flattened snapshot per frame. The components
//! never see devices or event queues.

/// Input state for one frame
///
/// Pointer deltas are in the host's pointer units (typically pixels);
/// scroll is a signed scalar where positive means "scroll up / zoom in"
/// before any invert option is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    /// Orbit trigger (typically the primary mouse button) is held
    pub orbit_held: bool,
    /// Pan trigger (typically the secondary or middle button) is held
    pub pan_held: bool,
    /// Horizontal pointer movement since the previous frame
    pub pointer_dx: f32,
    /// Vertical pointer movement since the previous frame
    pub pointer_dy: f32,
    /// Signed scroll amount for this frame
    pub scroll: f32,
}

impl InputSnapshot {
    /// A frame with no input at all
    pub const IDLE: Self = Self {
        orbit_held: false,
        pan_held: false,
        pointer_dx: 0.0,
        pointer_dy: 0.0,
        scroll: 0.0,
    };

    /// A frame dragging with the orbit trigger held
    pub fn orbit_drag(dx: f32, dy: f32) -> Self {
        Self {
            orbit_held: true,
            pointer_dx: dx,
            pointer_dy: dy,
            ..Self::IDLE
        }
    }

    /// A frame dragging with the pan trigger held
    pub fn pan_drag(dx: f32, dy: f32) -> Self {
        Self {
            pan_held: true,
            pointer_dx: dx,
            pointer_dy: dy,
            ..Self::IDLE
        }
    }

    /// A frame with only scroll input
    pub fn scrolled(amount: f32) -> Self {
        Self {
            scroll: amount,
            ..Self::IDLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_is_default() {
        assert_eq!(InputSnapshot::IDLE, InputSnapshot::default());
    }

    #[test]
    fn test_constructors_set_triggers() {
        assert!(InputSnapshot::orbit_drag(1.0, 2.0).orbit_held);
        assert!(!InputSnapshot::orbit_drag(1.0, 2.0).pan_held);
        assert!(InputSnapshot::pan_drag(1.0, 2.0).pan_held);
        assert_eq!(InputSnapshot::scrolled(3.0).scroll, 3.0);
    }
}
