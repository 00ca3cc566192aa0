//! The per-ray pipeline: choose a path, walk it, shade the first hit.

use crate::curvature::{classify, PathShape};
use crate::intersect::first_hit_along;
use crate::path::QuadraticPath;
use crate::shading::shade_lambertian;
use crate::{Color, HitRecord, Hittable};
use warp_core::{Light, MassiveBody, RenderConfig};
use warp_math::{Ray, Vec3};

/// The route a ray takes through the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayPath {
    /// A single segment of the configured reach.
    Straight { start: Vec3, end: Vec3 },
    /// A curve bent towards the massive body.
    Curved(QuadraticPath),
}

impl RayPath {
    pub fn shape(&self) -> PathShape {
        match self {
            RayPath::Straight { .. } => PathShape::Straight,
            RayPath::Curved(_) => PathShape::Curved,
        }
    }

    pub fn start(&self) -> Vec3 {
        match self {
            RayPath::Straight { start, .. } => *start,
            RayPath::Curved(path) => path.start(),
        }
    }

    /// First hit walking the path segment by segment.
    pub fn first_hit(&self, world: &dyn Hittable) -> Option<HitRecord> {
        match self {
            RayPath::Straight { start, end } => first_hit_along(world, *start, [*end]),
            RayPath::Curved(path) => first_hit_along(world, path.start(), path.points()),
        }
    }

    /// Every point of the path, start included.
    pub fn polyline(&self) -> Vec<Vec3> {
        match self {
            RayPath::Straight { start, end } => vec![*start, *end],
            RayPath::Curved(path) => path.polyline(),
        }
    }
}

/// Resolves camera rays to colors against read-only scene state.
#[derive(Clone, Copy)]
pub struct Tracer<'a> {
    world: &'a dyn Hittable,
    lights: &'a [Option<Light>],
    massive_body: Option<&'a MassiveBody>,
    config: &'a RenderConfig,
}

impl<'a> Tracer<'a> {
    pub fn new(world: &'a dyn Hittable, lights: &'a [Option<Light>], config: &'a RenderConfig) -> Self {
        Self {
            world,
            lights,
            massive_body: None,
            config,
        }
    }

    /// Bend rays towards `body`; `None` keeps every path straight.
    pub fn with_massive_body(mut self, body: Option<&'a MassiveBody>) -> Self {
        self.massive_body = body;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    /// Decide the path a ray follows.
    pub fn plan(&self, ray: &Ray) -> RayPath {
        match (classify(ray.origin(), ray.direction(), self.massive_body), self.massive_body) {
            (PathShape::Curved, Some(body)) => RayPath::Curved(QuadraticPath::new(
                ray.origin(),
                body.position,
                body.sag(),
                self.config.curve_steps,
            )),
            _ => RayPath::Straight {
                start: ray.origin(),
                end: ray.at(self.config.max_distance),
            },
        }
    }

    /// Color seen along a ray: the shaded first hit, or the background.
    pub fn trace(&self, ray: &Ray) -> Color {
        match self.plan(ray).first_hit(self.world) {
            Some(hit) => shade_lambertian(&hit, self.lights, self.world),
            None => self.config.background,
        }
    }
}
