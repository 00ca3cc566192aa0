use crate::Vec3;
use thiserror::Error;

/// Errors raised when constructing a ray.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RayError {
    #[error("ray direction {0} has no usable length")]
    DegenerateDirection(Vec3),
}

/// A ray in 3D space with an origin and a unit direction.
///
/// The direction is normalized on construction; directions that cannot be
/// normalized (zero length, NaN or infinite components) are rejected so they
/// never reach the tracing pipeline as NaNs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Result<Self, RayError> {
        let direction = direction
            .try_normalize()
            .ok_or(RayError::DegenerateDirection(direction))?;
        Ok(Self { origin, direction })
    }

    /// Create a ray from a direction the caller already knows is unit length.
    #[inline]
    pub fn from_unit(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(direction.is_normalized(), "direction {} is not unit length", direction);
        Self { origin, direction }
    }

    /// Create a ray pointing from `from` towards `to`.
    pub fn between(from: Vec3, to: Vec3) -> Result<Self, RayError> {
        Self::new(from, to - from)
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the unit direction of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 4.0, 0.0)).unwrap();

        assert_eq!(ray.origin(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(ray.direction(), Vec3::Y);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X).unwrap();

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_zero_direction_rejected() {
        let err = Ray::new(Vec3::ONE, Vec3::ZERO).unwrap_err();
        assert_eq!(err, RayError::DegenerateDirection(Vec3::ZERO));
    }

    #[test]
    fn test_non_finite_direction_rejected() {
        assert!(Ray::new(Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 1.0)).is_err());
        assert!(Ray::new(Vec3::ZERO, Vec3::new(f32::INFINITY, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_ray_between() {
        let ray = Ray::between(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 4.0)).unwrap();
        assert_eq!(ray.direction(), Vec3::Z);
        assert!(Ray::between(Vec3::ONE, Vec3::ONE).is_err());
    }
}
