// Transform utilities for Mat4
//
// Extends glam::Mat4 with the helpers the scene builder and vertex
// emitters need. glam::Mat4 already provides transform_point3() and inverse().

use glam::{Mat4, Vec3};

/// Extension trait for Mat4 to provide additional transform utilities
pub trait Mat4Ext {
    /// Transform a batch of local-space points into world space.
    fn transform_points(&self, points: &[Vec3]) -> Vec<Vec3>;

    /// The world-space position of the local origin (the translation column).
    fn origin(&self) -> Vec3;

    /// Largest scale factor along any local axis.
    fn max_scale(&self) -> f32;
}

impl Mat4Ext for Mat4 {
    fn transform_points(&self, points: &[Vec3]) -> Vec<Vec3> {
        points.iter().map(|&p| self.transform_point3(p)).collect()
    }

    fn origin(&self) -> Vec3 {
        self.w_axis.truncate()
    }

    fn max_scale(&self) -> f32 {
        self.x_axis
            .truncate()
            .length()
            .max(self.y_axis.truncate().length())
            .max(self.z_axis.truncate().length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    #[test]
    fn test_transform_points_translation() {
        let mat = Mat4::from_translation(Vec3::new(10.0, 20.0, 30.0));
        let points = mat.transform_points(&[Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0)]);

        assert_eq!(points, vec![Vec3::new(10.0, 20.0, 30.0), Vec3::new(11.0, 22.0, 33.0)]);
    }

    #[test]
    fn test_origin_is_translation() {
        let mat = Mat4::from_scale_rotation_translation(
            Vec3::splat(2.0),
            Quat::from_rotation_y(0.7),
            Vec3::new(1.0, -2.0, 3.0),
        );
        assert!((mat.origin() - Vec3::new(1.0, -2.0, 3.0)).length() < 1e-6);
    }

    #[test]
    fn test_max_scale_ignores_rotation() {
        let mat = Mat4::from_scale_rotation_translation(
            Vec3::new(1.0, 3.0, 2.0),
            Quat::from_rotation_z(std::f32::consts::FRAC_PI_4),
            Vec3::ZERO,
        );
        assert!((mat.max_scale() - 3.0).abs() < 1e-5);
    }
}
