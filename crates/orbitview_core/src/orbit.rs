//! Orbit camera controller
//!
//! A per-frame state machine that converts pointer/scroll input plus a
//! time delta into a camera pose orbiting a movable pivot, with optional
//! smoothing and obstruction pull-in. The controller owns four scalars
//! (yaw, pitch, distance, pending turn degrees) and an accumulated pan
//! offset; everything else is derived fresh every frame.
//!
//! Invariants held after every mutation:
//! - yaw is in `[0, 360)`
//! - pitch is in `[min_pitch, max_pitch]`
//! - distance is in `[min_distance, max_distance]`
//! - pending turn degrees is never negative

use serde::{Deserialize, Serialize};

use orbitview_math::{wrap_degrees, Quat, Vec3, FULL_TURN_DEGREES};
use orbitview_scene::{CollisionLayer, SceneQuery};

use crate::input::InputSnapshot;
use crate::pose::Pose;

/// Scroll magnitudes below this are treated as no zoom input
const SCROLL_EPSILON: f32 = 1e-3;

/// Shortest full-turn duration accepted by [`OrbitCamera::start_full_turn`]
const MIN_TURN_DURATION: f32 = 0.01;

/// Tunable parameters for the orbit camera
///
/// Sanitized once at construction (see [`OrbitCamera::new`]): speeds,
/// sensitivities, radii, and durations are floored at zero and the
/// initial state is clamped into the configured ranges. Inverted ranges
/// (`min_distance > max_distance`, `min_pitch > max_pitch`) are NOT
/// reordered; clamping applies the min bound first and the max bound
/// second, so every value resolves to the `max` bound. That is the
/// documented behavior for the misconfiguration, not an error.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Starting yaw in degrees
    pub yaw: f32,
    /// Starting pitch in degrees
    pub pitch: f32,
    /// Starting orbit distance
    pub distance: f32,
    /// Lowest allowed pitch in degrees
    pub min_pitch: f32,
    /// Highest allowed pitch in degrees
    pub max_pitch: f32,
    /// Closest allowed orbit distance
    pub min_distance: f32,
    /// Farthest allowed orbit distance
    pub max_distance: f32,
    /// Orbit rotation speed in degrees per second per pointer unit
    pub orbit_sensitivity: f32,
    /// Invert the vertical orbit axis
    pub invert_y: bool,
    /// Distance change per scroll unit
    pub zoom_speed: f32,
    /// Invert the scroll direction
    pub invert_zoom: bool,
    /// Enable pivot panning
    pub pan_enabled: bool,
    /// Pan speed in world units per second per pointer unit
    pub pan_speed: f32,
    /// Keep panning in the horizontal plane so it never drifts vertically
    pub pan_in_ground_plane: bool,
    /// Rotate continuously without input
    pub auto_rotate: bool,
    /// Continuous rotation speed in degrees per second
    pub auto_rotate_speed: f32,
    /// Rotation direction for auto-rotate and full turns
    pub rotate_clockwise: bool,
    /// Default duration of a scheduled 360° turn in seconds
    pub turn_duration: f32,
    /// Smooth the applied pose toward the desired pose
    pub smoothing: bool,
    /// Position smoothing rate (higher = snappier)
    pub position_damp: f32,
    /// Rotation smoothing rate (higher = snappier)
    pub rotation_damp: f32,
    /// Pull the camera in front of scene obstructions
    pub collision: bool,
    /// Radius of the obstruction probe sphere
    pub collision_radius: f32,
    /// Gap kept between the camera and the obstruction
    pub collision_padding: f32,
    /// Static offset added to the target position
    pub pivot_offset: Vec3,
    /// Layers that obstruct the camera; not read from config files
    #[serde(skip, default = "default_collision_mask")]
    pub collision_mask: CollisionLayer,
}

fn default_collision_mask() -> CollisionLayer {
    CollisionLayer::BLOCKERS
}

/// Clamp with the min bound applied first
///
/// Unlike `f32::clamp` this does not panic on an inverted range; the
/// value resolves to `max`.
#[inline]
fn clamp_range(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 20.0,
            distance: 8.0,
            min_pitch: -89.0,
            max_pitch: 89.0,
            min_distance: 1.0,
            max_distance: 40.0,
            orbit_sensitivity: 120.0,
            invert_y: false,
            zoom_speed: 1.0,
            invert_zoom: false,
            pan_enabled: true,
            pan_speed: 1.0,
            pan_in_ground_plane: true,
            auto_rotate: false,
            auto_rotate_speed: 30.0,
            rotate_clockwise: true,
            turn_duration: 4.0,
            smoothing: false,
            position_damp: 10.0,
            rotation_damp: 12.0,
            collision: false,
            collision_radius: 0.2,
            collision_padding: 0.25,
            pivot_offset: Vec3::ZERO,
            collision_mask: default_collision_mask(),
        }
    }
}

impl OrbitConfig {
    /// Floor all magnitudes at zero
    ///
    /// Range bounds are left exactly as given.
    fn sanitized(mut self) -> Self {
        self.orbit_sensitivity = self.orbit_sensitivity.max(0.0);
        self.zoom_speed = self.zoom_speed.max(0.0);
        self.pan_speed = self.pan_speed.max(0.0);
        self.auto_rotate_speed = self.auto_rotate_speed.max(0.0);
        self.turn_duration = self.turn_duration.max(0.0);
        self.position_damp = self.position_damp.max(0.0);
        self.rotation_damp = self.rotation_damp.max(0.0);
        self.collision_radius = self.collision_radius.max(0.0);
        self.collision_padding = self.collision_padding.max(0.0);
        self
    }

    /// Builder: set the distance range
    pub fn with_distance_range(mut self, min: f32, max: f32) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    /// Builder: set the pitch range in degrees
    pub fn with_pitch_range(mut self, min: f32, max: f32) -> Self {
        self.min_pitch = min;
        self.max_pitch = max;
        self
    }

    /// Builder: set the starting yaw/pitch/distance
    pub fn with_start(mut self, yaw: f32, pitch: f32, distance: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self.distance = distance;
        self
    }

    /// Builder: enable smoothing with the given damp rates
    pub fn with_smoothing(mut self, position_damp: f32, rotation_damp: f32) -> Self {
        self.smoothing = true;
        self.position_damp = position_damp;
        self.rotation_damp = rotation_damp;
        self
    }

    /// Builder: enable obstruction pull-in with the given probe radius
    /// and padding
    pub fn with_collision(mut self, radius: f32, padding: f32) -> Self {
        self.collision = true;
        self.collision_radius = radius;
        self.collision_padding = padding;
        self
    }

    /// Builder: enable continuous auto-rotation
    pub fn with_auto_rotate(mut self, degrees_per_second: f32, clockwise: bool) -> Self {
        self.auto_rotate = true;
        self.auto_rotate_speed = degrees_per_second;
        self.rotate_clockwise = clockwise;
        self
    }
}

/// Orbit camera controller
///
/// Drive it once per frame with [`update`](Self::update). Without a
/// target (see [`set_center`](Self::set_center)) the update is a silent
/// no-op.
pub struct OrbitCamera {
    config: OrbitConfig,
    target: Option<Vec3>,
    yaw: f32,
    pitch: f32,
    distance: f32,
    pan_offset: Vec3,
    pending_turn_degrees: f32,
    turn_clockwise: bool,
    turn_duration: f32,
    current_pose: Option<Pose>,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(OrbitConfig::default())
    }
}

impl OrbitCamera {
    /// Create a controller from a configuration
    ///
    /// The configuration is sanitized and the starting state clamped into
    /// the configured ranges.
    pub fn new(config: OrbitConfig) -> Self {
        let config = config.sanitized();
        let yaw = wrap_degrees(config.yaw);
        let pitch = clamp_range(config.pitch, config.min_pitch, config.max_pitch);
        let distance = clamp_range(config.distance, config.min_distance, config.max_distance);
        let turn_clockwise = config.rotate_clockwise;
        let turn_duration = config.turn_duration;
        Self {
            config,
            target: None,
            yaw,
            pitch,
            distance,
            pan_offset: Vec3::ZERO,
            pending_turn_degrees: 0.0,
            turn_clockwise,
            turn_duration,
            current_pose: None,
        }
    }

    /// Current yaw in degrees, always in `[0, 360)`
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current orbit distance (before obstruction pull-in)
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Accumulated pan displacement of the pivot
    pub fn pan_offset(&self) -> Vec3 {
        self.pan_offset
    }

    /// Remaining degrees of a scheduled full turn; 0 when idle
    pub fn pending_turn_degrees(&self) -> f32 {
        self.pending_turn_degrees
    }

    /// Current orbit target, if any
    pub fn target(&self) -> Option<Vec3> {
        self.target
    }

    /// Pose applied on the most recent update
    pub fn current_pose(&self) -> Option<Pose> {
        self.current_pose
    }

    /// The active configuration
    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    /// Restore yaw, pitch, distance, and pan offset to their configured
    /// starting values
    pub fn reset(&mut self) {
        self.yaw = wrap_degrees(self.config.yaw);
        self.pitch = clamp_range(self.config.pitch, self.config.min_pitch, self.config.max_pitch);
        self.distance = clamp_range(
            self.config.distance,
            self.config.min_distance,
            self.config.max_distance,
        );
        self.pan_offset = Vec3::ZERO;
        self.pending_turn_degrees = 0.0;
    }

    /// Schedule an exact 360° turn
    ///
    /// Sets the rotation direction and, when given, overrides the turn
    /// duration (floored to a small positive minimum). Calling this while
    /// a turn is in progress restarts the full 360° budget.
    pub fn start_full_turn(&mut self, clockwise: bool, duration_seconds: Option<f32>) {
        self.turn_clockwise = clockwise;
        if let Some(duration) = duration_seconds {
            self.turn_duration = duration.max(MIN_TURN_DURATION);
        }
        self.pending_turn_degrees = FULL_TURN_DEGREES;
        log::debug!(
            "full turn scheduled: clockwise={} duration={}s",
            clockwise,
            self.turn_duration
        );
    }

    /// Cancel any in-progress scheduled turn
    ///
    /// Continuous auto-rotate is unaffected.
    pub fn stop_full_turn(&mut self) {
        self.pending_turn_degrees = 0.0;
    }

    /// Repoint the pivot at a new target
    ///
    /// With `reset_pan_offset` (the recommended default) the accumulated
    /// pan is zeroed so a stale offset is not applied to an unrelated
    /// target.
    pub fn set_center(&mut self, target: Vec3, reset_pan_offset: bool) {
        self.target = Some(target);
        if reset_pan_offset {
            self.pan_offset = Vec3::ZERO;
        }
    }

    /// Remove the target; updates become no-ops until one is set again
    pub fn clear_center(&mut self) {
        self.target = None;
    }

    /// Advance the camera one frame
    ///
    /// `dt` is unscaled elapsed time in seconds (negative values are
    /// treated as zero). Returns the applied pose, or `None` when no
    /// target is set, in which case no state changes.
    pub fn update<S: SceneQuery>(
        &mut self,
        dt: f32,
        input: &InputSnapshot,
        scene: &S,
    ) -> Option<Pose> {
        let target = self.target?;
        let dt = dt.max(0.0);
        let cfg = &self.config;

        // 1. Orbit input
        if input.orbit_held {
            self.yaw = wrap_degrees(self.yaw + input.pointer_dx * cfg.orbit_sensitivity * dt);
            let dy = if cfg.invert_y {
                input.pointer_dy
            } else {
                -input.pointer_dy
            };
            self.pitch = clamp_range(
                self.pitch + dy * cfg.orbit_sensitivity * dt,
                cfg.min_pitch,
                cfg.max_pitch,
            );
        }

        // 2. Zoom input
        if input.scroll.abs() > SCROLL_EPSILON {
            let sign = if cfg.invert_zoom { -1.0 } else { 1.0 };
            self.distance = clamp_range(
                self.distance - sign * input.scroll * cfg.zoom_speed,
                cfg.min_distance,
                cfg.max_distance,
            );
        }

        // 3. Pan input
        if cfg.pan_enabled && input.pan_held {
            let orientation = Quat::from_yaw_pitch(self.yaw, self.pitch);
            let right = orientation.rotate(Vec3::X);
            let mut forward = orientation.rotate(Vec3::Z);
            if cfg.pan_in_ground_plane {
                // Drop the vertical component so panning stays in the
                // ground plane; straight-down view degenerates to
                // world-forward
                forward = forward.horizontal().normalize_or(Vec3::Z);
            }
            self.pan_offset += (right * -input.pointer_dx + forward * -input.pointer_dy)
                * (cfg.pan_speed * dt);
        }

        // 4. Continuous auto-rotate
        if cfg.auto_rotate {
            let sign = if cfg.rotate_clockwise { 1.0 } else { -1.0 };
            self.yaw = wrap_degrees(self.yaw + sign * cfg.auto_rotate_speed * dt);
        }

        // 5. Scheduled exact turn
        if self.pending_turn_degrees > 0.0 {
            let rate = if self.turn_duration > f32::EPSILON {
                FULL_TURN_DEGREES / self.turn_duration
            } else {
                cfg.auto_rotate_speed
            };
            let step = (rate * dt).min(self.pending_turn_degrees);
            let sign = if self.turn_clockwise { 1.0 } else { -1.0 };
            self.yaw = wrap_degrees(self.yaw + sign * step);
            self.pending_turn_degrees = (self.pending_turn_degrees - step).max(0.0);
        }

        // 6. Pose derivation
        let pivot = target + cfg.pivot_offset + self.pan_offset;
        let orientation = Quat::from_yaw_pitch(self.yaw, self.pitch);
        let back = orientation.rotate(Vec3::new(0.0, 0.0, -1.0));
        let mut effective_distance = self.distance;

        // 7. Obstruction pull-in: shorten this frame's distance, never
        // the stored zoom level
        if cfg.collision {
            if let Some(hit) = scene.nearest_obstruction(
                pivot,
                cfg.collision_radius,
                back,
                effective_distance,
                cfg.collision_mask,
            ) {
                effective_distance = (hit - cfg.collision_padding).max(cfg.min_distance);
            }
        }

        let position = pivot + back * effective_distance;
        let desired = Pose::looking_at(position, pivot, Vec3::Y);

        // 8. Pose application
        let pose = match self.current_pose {
            Some(current) if cfg.smoothing => {
                let pos_t = 1.0 - (-cfg.position_damp * dt).exp();
                let rot_t = 1.0 - (-cfg.rotation_damp * dt).exp();
                Pose::new(
                    current.position.lerp(desired.position, pos_t),
                    current.rotation.slerp(&desired.rotation, rot_t),
                )
            }
            _ => desired,
        };

        self.current_pose = Some(pose);
        Some(pose)
    }
}
