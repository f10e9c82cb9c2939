//! Swept-sphere cast tests per collision shape
//!
//! Each function sweeps a sphere of the given radius from `origin` along
//! the unit `direction` for at most `max_distance`, and returns the travel
//! distance at which the swept sphere first touches the shape. A sweep
//! that starts in contact reports distance 0. `None` means no contact
//! within range.

use orbitview_math::Vec3;

use crate::shapes::{Aabb, Plane, Sphere};

/// Sweep a sphere against another sphere
///
/// Sweeping sphere A against sphere B is a ray test against B inflated by
/// A's radius: solve `|origin + t·direction − center|² = (rA + rB)²` for
/// the smallest non-negative t.
pub fn sweep_sphere_vs_sphere(
    origin: Vec3,
    radius: f32,
    direction: Vec3,
    max_distance: f32,
    target: &Sphere,
) -> Option<f32> {
    let combined = radius + target.radius;
    let m = origin - target.center;
    let c = m.length_squared() - combined * combined;

    // Already overlapping at the start of the sweep
    if c <= 0.0 {
        return Some(0.0);
    }

    let b = m.dot(direction);
    // Outside and moving away
    if b > 0.0 {
        return None;
    }

    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let t = -b - discriminant.sqrt();
    (0.0..=max_distance).contains(&t).then_some(t)
}

/// Sweep a sphere against an infinite plane
///
/// The swept sphere touches the plane when its center's signed distance
/// reaches ±radius; which sign depends on which side the sweep starts on.
pub fn sweep_sphere_vs_plane(
    origin: Vec3,
    radius: f32,
    direction: Vec3,
    max_distance: f32,
    plane: &Plane,
) -> Option<f32> {
    let sd0 = plane.signed_distance(origin);

    // Already touching
    if sd0.abs() <= radius {
        return Some(0.0);
    }

    let denom = plane.normal.dot(direction);
    if denom.abs() < 1e-8 {
        // Moving parallel to the plane
        return None;
    }

    // First contact happens when the signed distance crosses ±radius on
    // the starting side
    let touch = radius * sd0.signum();
    let t = (touch - sd0) / denom;
    (0.0..=max_distance).contains(&t).then_some(t)
}

/// Sweep a sphere against an AABB
///
/// Tests the center ray against the box expanded by the sphere radius
/// (slab method). The expansion squares off the rounded corners of the
/// true swept volume, so hits near corners report slightly early; for
/// camera pull-in that conservative error is on the safe side.
pub fn sweep_sphere_vs_aabb(
    origin: Vec3,
    radius: f32,
    direction: Vec3,
    max_distance: f32,
    aabb: &Aabb,
) -> Option<f32> {
    let expanded = aabb.expanded(radius);

    let o = origin.to_array();
    let d = direction.to_array();
    let lo = expanded.min.to_array();
    let hi = expanded.max.to_array();

    let mut t_enter = 0.0f32;
    let mut t_exit = max_distance;

    for axis in 0..3 {
        if d[axis].abs() < 1e-8 {
            // Parallel to this slab; must already be inside it
            if o[axis] < lo[axis] || o[axis] > hi[axis] {
                return None;
            }
        } else {
            let inv = 1.0 / d[axis];
            let mut t0 = (lo[axis] - o[axis]) * inv;
            let mut t1 = (hi[axis] - o[axis]) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }
    }

    Some(t_enter)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_sphere_sweep_head_on() {
        // Unit sphere at z=10, swept sphere of radius 1 from origin along +Z:
        // centers touch at distance 10 - (1 + 1) = 8
        let target = Sphere::new(Vec3::new(0.0, 0.0, 10.0), 1.0);
        let t = sweep_sphere_vs_sphere(Vec3::ZERO, 1.0, Vec3::Z, 20.0, &target)
            .expect("Should hit");
        assert!((t - 8.0).abs() < EPSILON);
    }

    #[test]
    fn test_sphere_sweep_miss() {
        let target = Sphere::new(Vec3::new(10.0, 0.0, 10.0), 1.0);
        assert!(sweep_sphere_vs_sphere(Vec3::ZERO, 1.0, Vec3::Z, 20.0, &target).is_none());
    }

    #[test]
    fn test_sphere_sweep_moving_away() {
        let target = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0);
        assert!(sweep_sphere_vs_sphere(Vec3::ZERO, 1.0, Vec3::Z, 20.0, &target).is_none());
    }

    #[test]
    fn test_sphere_sweep_out_of_range() {
        let target = Sphere::new(Vec3::new(0.0, 0.0, 10.0), 1.0);
        assert!(sweep_sphere_vs_sphere(Vec3::ZERO, 1.0, Vec3::Z, 5.0, &target).is_none());
    }

    #[test]
    fn test_sphere_sweep_starts_overlapping() {
        let target = Sphere::new(Vec3::new(0.0, 0.0, 1.0), 1.0);
        let t = sweep_sphere_vs_sphere(Vec3::ZERO, 1.0, Vec3::Z, 20.0, &target)
            .expect("Should report contact");
        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_plane_sweep_from_above() {
        // Floor at y=0, swept sphere of radius 0.5 falling from y=5:
        // touches when center reaches y=0.5, i.e. after 4.5
        let floor = Plane::floor(0.0);
        let t = sweep_sphere_vs_plane(Vec3::new(0.0, 5.0, 0.0), 0.5, -Vec3::Y, 10.0, &floor)
            .expect("Should hit");
        assert!((t - 4.5).abs() < EPSILON);
    }

    #[test]
    fn test_plane_sweep_from_below() {
        let floor = Plane::floor(0.0);
        let t = sweep_sphere_vs_plane(Vec3::new(0.0, -3.0, 0.0), 0.5, Vec3::Y, 10.0, &floor)
            .expect("Should hit");
        assert!((t - 2.5).abs() < EPSILON);
    }

    #[test]
    fn test_plane_sweep_moving_away() {
        let floor = Plane::floor(0.0);
        assert!(
            sweep_sphere_vs_plane(Vec3::new(0.0, 5.0, 0.0), 0.5, Vec3::Y, 10.0, &floor).is_none()
        );
    }

    #[test]
    fn test_plane_sweep_parallel() {
        let floor = Plane::floor(0.0);
        assert!(
            sweep_sphere_vs_plane(Vec3::new(0.0, 5.0, 0.0), 0.5, Vec3::X, 10.0, &floor).is_none()
        );
    }

    #[test]
    fn test_plane_sweep_already_touching() {
        let floor = Plane::floor(0.0);
        let t = sweep_sphere_vs_plane(Vec3::new(0.0, 0.3, 0.0), 0.5, -Vec3::Y, 10.0, &floor)
            .expect("Should report contact");
        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_aabb_sweep_head_on() {
        // Unit cube at z=5 (faces at z=4.5 and 5.5), radius 0.5:
        // expanded face at z=4.0
        let aabb = Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.5, 0.5, 0.5));
        let t = sweep_sphere_vs_aabb(Vec3::ZERO, 0.5, Vec3::Z, 10.0, &aabb).expect("Should hit");
        assert!((t - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_aabb_sweep_miss_parallel_slab() {
        let aabb = Aabb::unit();
        assert!(sweep_sphere_vs_aabb(Vec3::new(5.0, 0.0, -5.0), 0.5, Vec3::Z, 20.0, &aabb).is_none());
    }

    #[test]
    fn test_aabb_sweep_out_of_range() {
        let aabb = Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.5, 0.5, 0.5));
        assert!(sweep_sphere_vs_aabb(Vec3::ZERO, 0.5, Vec3::Z, 3.0, &aabb).is_none());
    }

    #[test]
    fn test_aabb_sweep_starts_inside() {
        let aabb = Aabb::unit();
        let t = sweep_sphere_vs_aabb(Vec3::ZERO, 0.25, Vec3::Z, 10.0, &aabb)
            .expect("Should report contact");
        assert_eq!(t, 0.0);
    }
}
