//! Angle utilities for orbit state kept in degrees

/// One complete revolution in degrees
pub const FULL_TURN_DEGREES: f32 = 360.0;

/// Wrap an angle in degrees into `[0, 360)`
///
/// Uses euclidean remainder so negative angles wrap upward
/// (`-90 -> 270`). Orbit state is re-wrapped every frame so yaw never
/// accumulates unbounded and loses float precision over long sessions.
#[inline]
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(FULL_TURN_DEGREES);
    // rem_euclid can return exactly 360.0 when the input is a tiny
    // negative value; fold that back to 0
    if wrapped >= FULL_TURN_DEGREES {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_unchanged() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(45.5), 45.5);
        assert_eq!(wrap_degrees(359.9), 359.9);
    }

    #[test]
    fn test_wraps_down() {
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert!((wrap_degrees(405.0) - 45.0).abs() < 0.001);
        assert!((wrap_degrees(720.5) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_wraps_negative_up() {
        assert!((wrap_degrees(-90.0) - 270.0).abs() < 0.001);
        assert!((wrap_degrees(-360.0)).abs() < 0.001);
        assert!((wrap_degrees(-0.25) - 359.75).abs() < 0.001);
    }

    #[test]
    fn test_result_always_in_range() {
        for i in -1000..1000 {
            let a = wrap_degrees(i as f32 * 7.3);
            assert!((0.0..360.0).contains(&a), "{} out of range", a);
        }
    }

    #[test]
    fn test_tiny_negative_does_not_return_360() {
        let a = wrap_degrees(-1e-6);
        assert!((0.0..360.0).contains(&a));
    }
}
