//! Picking rays
//!
//! A viewport point names a whole line of object-space points, one per depth.
//! [`Ray::from_viewport`] recovers that line by unprojecting the point at the
//! near (depth 0) and far (depth 1) planes.

use crate::error::ProjectionError;
use crate::matrix::Mat4;
use crate::projection::unproject;
use crate::vector::{Vec2, Vec3, Vec4};

/// 3D ray for picking
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Ray origin point
    pub origin: Vec3,
    /// Ray direction (normalized unless degenerate)
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with normalized direction
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    /// Create a ray from two points
    #[inline]
    pub fn from_points(start: Vec3, end: Vec3) -> Self {
        Self::new(start, end - start)
    }

    /// Object-space ray under a viewport point, starting on the near plane.
    pub fn from_viewport(
        point: Vec2,
        model_view: &Mat4,
        projection: &Mat4,
        viewport: Vec4,
    ) -> Result<Self, ProjectionError> {
        let near = unproject(Vec3::new(point.x(), point.y(), 0.0), model_view, projection, viewport)?;
        let far = unproject(Vec3::new(point.x(), point.y(), 1.0), model_view, projection, viewport)?;
        Ok(Self::from_points(near, far))
    }

    /// Get a point at distance t along the ray
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Get the closest point on the ray to a given point
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let t = (point - self.origin).dot(self.direction);
        if t <= 0.0 {
            self.origin
        } else {
            self.at(t)
        }
    }

    /// Get the distance from a point to the ray
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        (point - self.closest_point(point)).length()
    }

    /// Transform the ray by a matrix
    ///
    /// The origin is transformed as a point, the direction as a vector.
    pub fn transform(&self, matrix: &Mat4) -> Self {
        let origin = matrix.transform_point(self.origin);
        let direction = matrix.transform_vector(self.direction);
        Self::new(origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::degrees_to_radians;

    #[test]
    fn test_ray_creation() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(ray.origin, Vec3::ZERO);
        assert!((ray.direction - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_ray_at_and_closest_point() {
        let ray = Ray::from_points(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(ray.at(3.0), Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(ray.closest_point(Vec3::new(4.0, 2.0, 0.0)), Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(ray.closest_point(Vec3::new(-4.0, 2.0, 0.0)), Vec3::ZERO);
        assert!((ray.distance_to_point(Vec3::new(4.0, 2.0, 0.0)) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_ray_transform() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let moved = ray.transform(&Mat4::from_translation(Vec3::new(0.0, 5.0, 0.0)));
        assert_eq!(moved.origin, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(moved.direction, Vec3::X);
    }

    #[test]
    fn test_center_of_viewport_looks_down_view_axis() {
        let view = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let projection = Mat4::perspective(degrees_to_radians(60.0), 4.0 / 3.0, 1.0, 100.0);
        let viewport = Vec4::viewport(0.0, 0.0, 800.0, 600.0);

        let ray = Ray::from_viewport(Vec2::new(400.0, 300.0), &view, &projection, viewport).unwrap();
        assert!((ray.origin - Vec3::new(0.0, 0.0, 4.0)).length() < 1e-3);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-4);
        assert!(ray.distance_to_point(Vec3::ZERO) < 1e-3);
    }

    #[test]
    fn test_from_viewport_propagates_singular() {
        let viewport = Vec4::viewport(0.0, 0.0, 800.0, 600.0);
        let result = Ray::from_viewport(Vec2::new(1.0, 1.0), &Mat4::IDENTITY, &Mat4::ZERO, viewport);
        assert_eq!(result, Err(ProjectionError::SingularMatrix));
    }
}
