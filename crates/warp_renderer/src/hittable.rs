//! Hittable trait and HitRecord for ray-object intersection.
//!
//! This is the scene-intersection collaborator the tracing pipeline talks
//! to: given a ray and a maximum distance, report the nearest hit or nothing.

use crate::Color;
use warp_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal at intersection (always points against ray)
    pub normal: Vec3,
    /// Base color of the struck surface
    pub base_color: Color,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl HitRecord {
    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object within the given interval.
    ///
    /// Returns true if hit, and fills in the hit record.
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool;

    /// Nearest hit within `max_distance` of the ray origin.
    fn intersect(&self, ray: &Ray, max_distance: f32) -> Option<HitRecord> {
        let mut rec = HitRecord::default();
        self.hit(ray, Interval::new(0.0, max_distance), &mut rec)
            .then_some(rec)
    }
}

/// A list of hittable objects.
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            let interval = Interval::new(ray_t.min, closest_so_far);
            if object.hit(ray, interval, rec) {
                hit_anything = true;
                closest_so_far = rec.t;
            }
        }

        hit_anything
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sphere, Surface};

    #[test]
    fn test_empty_list_never_hits() {
        let world = HittableList::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();
        assert!(world.is_empty());
        assert!(world.intersect(&ray, f32::INFINITY).is_none());
    }

    #[test]
    fn test_list_returns_nearest() {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, 10.0),
            1.0,
            Surface::colored(Color::Z),
        )));
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, 5.0),
            1.0,
            Surface::colored(Color::X),
        )));

        let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();
        let hit = world.intersect(&ray, 100.0).unwrap();

        assert!((hit.t - 4.0).abs() < 1e-4);
        assert_eq!(hit.base_color, Color::X);
    }

    #[test]
    fn test_intersect_respects_max_distance() {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, 5.0),
            1.0,
            Surface::default(),
        )));

        let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();
        assert!(world.intersect(&ray, 3.9).is_none());
        assert!(world.intersect(&ray, 4.1).is_some());
    }
}
