//! Direct Lambertian shading with hard shadows.

use crate::{Color, HitRecord, Hittable};
use warp_core::Light;
use warp_math::Ray;

/// Offset along the normal for shadow ray origins, to avoid self-intersection.
pub const SHADOW_EPSILON: f32 = 0.001;

/// Sum the diffuse contribution of every present light at a hit.
///
/// Absent (`None`) lights are skipped. The result is not clamped.
pub fn shade_lambertian(hit: &HitRecord, lights: &[Option<Light>], world: &dyn Hittable) -> Color {
    lights
        .iter()
        .flatten()
        .map(|light| light_contribution(hit, light, world))
        .sum()
}

/// Diffuse contribution of one light, or black if anything blocks it.
pub fn light_contribution(hit: &HitRecord, light: &Light, world: &dyn Hittable) -> Color {
    let to_light = light.position - hit.p;
    let distance = to_light.length();

    // A light sitting on the hit point has no direction to shade from
    let Ok(shadow_ray) = Ray::new(hit.p + hit.normal * SHADOW_EPSILON, to_light) else {
        return Color::ZERO;
    };

    if world.intersect(&shadow_ray, distance).is_some() {
        return Color::ZERO;
    }

    let n_dot_l = hit.normal.dot(shadow_ray.direction()).max(0.0);
    hit.base_color * light.color * light.intensity * n_dot_l
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HittableList, Sphere, Surface};
    use warp_math::Vec3;

    fn floor_hit(base_color: Color) -> HitRecord {
        HitRecord {
            p: Vec3::ZERO,
            normal: Vec3::Y,
            base_color,
            t: 1.0,
            front_face: true,
        }
    }

    #[test]
    fn test_lambert_cosine() {
        let world = HittableList::new();
        let hit = floor_hit(Color::ONE);

        for degrees in [0.0f32, 30.0, 60.0, 89.0, 120.0] {
            let theta = degrees.to_radians();
            let light = Light::new(
                Vec3::new(theta.sin(), theta.cos(), 0.0) * 4.0,
                Color::ONE,
                1.0,
            );
            let color = light_contribution(&hit, &light, &world);
            let expected = theta.cos().max(0.0);

            assert!((color - Color::splat(expected)).abs().max_element() < 1e-5, "{} deg", degrees);
        }
    }

    #[test]
    fn test_color_modulation() {
        let world = HittableList::new();
        let hit = floor_hit(Color::new(1.0, 0.5, 0.0));
        let light = Light::new(Vec3::new(0.0, 10.0, 0.0), Color::new(0.5, 1.0, 1.0), 2.0);

        let color = light_contribution(&hit, &light, &world);
        assert!((color - Color::new(1.0, 1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_occluder_blocks_light() {
        let hit = floor_hit(Color::ONE);
        let light = Light::new(Vec3::new(0.0, 10.0, 0.0), Color::ONE, 1.0);

        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(Vec3::new(0.0, 5.0, 0.0), 1.0, Surface::default())));
        assert_eq!(light_contribution(&hit, &light, &world), Color::ZERO);

        let empty = HittableList::new();
        assert!(light_contribution(&hit, &light, &empty).min_element() > 0.0);
    }

    #[test]
    fn test_occluder_behind_light_ignored() {
        let hit = floor_hit(Color::ONE);
        let light = Light::new(Vec3::new(0.0, 3.0, 0.0), Color::ONE, 1.0);

        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(Vec3::new(0.0, 6.0, 0.0), 1.0, Surface::default())));
        assert!((light_contribution(&hit, &light, &world) - Color::ONE).length() < 1e-5);
    }

    #[test]
    fn test_absent_lights_skipped_and_summed() {
        let world = HittableList::new();
        let hit = floor_hit(Color::ONE);
        let light = Light::new(Vec3::new(0.0, 5.0, 0.0), Color::ONE, 0.75);
        let lights = vec![Some(light.clone()), None, Some(light)];

        let color = shade_lambertian(&hit, &lights, &world);
        // Two lights at 0.75 each: summed past 1.0, not clamped
        assert!((color - Color::splat(1.5)).length() < 1e-5);
    }

    #[test]
    fn test_no_lights_is_black() {
        let world = HittableList::new();
        assert_eq!(shade_lambertian(&floor_hit(Color::ONE), &[], &world), Color::ZERO);
    }

    #[test]
    fn test_light_on_hit_point_contributes_nothing() {
        let world = HittableList::new();
        let light = Light::new(Vec3::ZERO, Color::ONE, 1.0);
        assert_eq!(light_contribution(&floor_hit(Color::ONE), &light, &world), Color::ZERO);
    }
}
