//! Collision shapes for obstruction queries
//!
//! These are lightweight primitives used only for camera obstruction
//! tests; they carry no physical properties.

use orbitview_math::Vec3;

/// A sphere defined by center and radius
#[derive(Clone, Copy, Debug)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere at the given center with the given radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Create a unit sphere at the origin
    pub fn unit() -> Self {
        Self::new(Vec3::ZERO, 1.0)
    }

    /// Check if a point is inside or on the sphere
    pub fn contains(&self, point: Vec3) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }

    /// Get the closest point on the sphere surface to a given point
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let direction = (point - self.center).normalized();
        self.center + direction * self.radius
    }
}

/// An axis-aligned bounding box
#[derive(Clone, Copy, Debug)]
pub struct Aabb {
    /// Minimum corner (all components are minimums)
    pub min: Vec3,
    /// Maximum corner (all components are maximums)
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a position with given half-extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Create a unit cube centered at the origin
    pub fn unit() -> Self {
        Self::from_center_half_extents(Vec3::ZERO, Vec3::new(0.5, 0.5, 0.5))
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the half-extents (half the size in each dimension)
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Check if a point is inside or on the AABB
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Get the closest point inside or on the AABB to a given point
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp_components(self.min, self.max)
    }

    /// Grow the AABB by the same margin on every side
    pub fn expanded(&self, margin: f32) -> Self {
        let m = Vec3::new(margin, margin, margin);
        Self {
            min: self.min - m,
            max: self.max + m,
        }
    }

    /// Translate the AABB by a delta
    pub fn translated(&self, delta: Vec3) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}

/// An infinite plane defined by normal and distance from origin
///
/// The plane equation is: normal · point = distance
/// Points with normal · point > distance are "above" the plane (positive side)
#[derive(Clone, Copy, Debug)]
pub struct Plane {
    /// Unit normal vector pointing to the positive side
    pub normal: Vec3,
    /// Signed distance from origin along the normal
    pub distance: f32,
}

impl Plane {
    /// Create a new plane from a normal and distance
    ///
    /// The normal will be normalized automatically.
    pub fn new(normal: Vec3, distance: f32) -> Self {
        let n = normal.normalized();
        Self {
            normal: n,
            distance,
        }
    }

    /// Create a plane from a point on the plane and a normal
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let n = normal.normalized();
        let d = n.dot(point);
        Self {
            normal: n,
            distance: d,
        }
    }

    /// Create a horizontal floor plane at the given Y height
    pub fn floor(y: f32) -> Self {
        Self::from_point_normal(Vec3::new(0.0, y, 0.0), Vec3::Y)
    }

    /// Calculate the signed distance from a point to the plane
    ///
    /// Positive = above plane (on normal side)
    /// Negative = below plane (opposite side)
    /// Zero = on plane
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }

    /// Project a point onto the plane
    pub fn project_point(&self, point: Vec3) -> Vec3 {
        point - self.normal * self.signed_distance(point)
    }

    /// Check if a point is on the positive side of the plane
    pub fn is_above(&self, point: Vec3) -> bool {
        self.signed_distance(point) > 0.0
    }
}

/// Collider enum for storing different collision shape types
#[derive(Clone, Copy, Debug)]
pub enum Collider {
    Sphere(Sphere),
    Aabb(Aabb),
    Plane(Plane),
}

impl Collider {
    /// Get the center of the collider
    ///
    /// For planes, returns the point on the plane closest to the origin.
    pub fn center(&self) -> Vec3 {
        match self {
            Collider::Sphere(s) => s.center,
            Collider::Aabb(b) => b.center(),
            Collider::Plane(p) => p.normal * p.distance,
        }
    }

    /// Translate the collider by a delta
    ///
    /// For planes, this adjusts the distance from origin.
    pub fn translated(&self, delta: Vec3) -> Self {
        match self {
            Collider::Sphere(s) => Collider::Sphere(Sphere::new(s.center + delta, s.radius)),
            Collider::Aabb(b) => Collider::Aabb(b.translated(delta)),
            Collider::Plane(p) => {
                // Moving a plane by delta means the distance changes by normal · delta
                let new_distance = p.distance + p.normal.dot(delta);
                Collider::Plane(Plane::new(p.normal, new_distance))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_contains() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        assert!(sphere.contains(Vec3::ZERO));
        assert!(sphere.contains(Vec3::new(0.5, 0.0, 0.0)));
        assert!(sphere.contains(Vec3::new(1.0, 0.0, 0.0))); // on surface
        assert!(!sphere.contains(Vec3::new(1.1, 0.0, 0.0)));
    }

    #[test]
    fn test_sphere_closest_point() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        let p = sphere.closest_point(Vec3::new(5.0, 0.0, 0.0));
        assert!((p.x - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_aabb_from_center_half_extents() {
        let aabb =
            Aabb::from_center_half_extents(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.5, 0.5, 0.5));
        assert_eq!(aabb.min, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(aabb.max, Vec3::new(1.5, 2.5, 3.5));
        assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_aabb_contains() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
        assert!(aabb.contains(Vec3::new(0.5, 0.5, 0.5)));
        assert!(aabb.contains(Vec3::ZERO)); // corner
        assert!(!aabb.contains(Vec3::new(-0.1, 0.5, 0.5)));
    }

    #[test]
    fn test_aabb_closest_point() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));

        // Point inside
        let inside = Vec3::new(0.5, 0.5, 0.5);
        assert_eq!(aabb.closest_point(inside), inside);

        // Point outside
        let outside = Vec3::new(2.0, 0.5, 0.5);
        assert_eq!(aabb.closest_point(outside), Vec3::new(1.0, 0.5, 0.5));
    }

    #[test]
    fn test_aabb_expanded() {
        let aabb = Aabb::unit().expanded(0.5);
        assert_eq!(aabb.min, Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_plane_signed_distance() {
        let floor = Plane::floor(0.0);

        assert!((floor.signed_distance(Vec3::ZERO)).abs() < 0.0001);
        assert!((floor.signed_distance(Vec3::new(0.0, 1.0, 0.0)) - 1.0).abs() < 0.0001);
        assert!((floor.signed_distance(Vec3::new(0.0, -1.0, 0.0)) + 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_plane_project_point() {
        let floor = Plane::floor(0.0);
        let point = Vec3::new(3.0, 5.0, 7.0);
        let projected = floor.project_point(point);

        assert_eq!(projected.x, 3.0);
        assert!((projected.y).abs() < 0.0001);
        assert_eq!(projected.z, 7.0);
    }

    #[test]
    fn test_plane_is_above() {
        let floor = Plane::floor(0.0);
        assert!(floor.is_above(Vec3::new(0.0, 1.0, 0.0)));
        assert!(!floor.is_above(Vec3::new(0.0, -1.0, 0.0)));
    }

    #[test]
    fn test_collider_translated() {
        let c = Collider::Sphere(Sphere::unit()).translated(Vec3::new(1.0, 0.0, 0.0));
        match c {
            Collider::Sphere(s) => assert_eq!(s.center, Vec3::new(1.0, 0.0, 0.0)),
            _ => panic!("Expected sphere"),
        }

        let p = Collider::Plane(Plane::floor(0.0)).translated(Vec3::new(0.0, 2.0, 0.0));
        match p {
            Collider::Plane(p) => assert!((p.distance - 2.0).abs() < 0.0001),
            _ => panic!("Expected plane"),
        }
    }
}
