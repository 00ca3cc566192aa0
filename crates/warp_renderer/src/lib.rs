//! Warp renderer - CPU ray casting with gravitational lensing
//!
//! Casts one ray per pixel and shades the first hit with direct Lambertian
//! lighting and hard shadows. Rays aimed close enough at a massive body bend
//! along a quadratic curve towards it and are intersected segment by segment.
//!
//! The same path rules drive the debug ray emitter, which draws rays seeded
//! from mesh vertices as line segments.

mod bucket;
mod camera;
mod curvature;
mod debug;
mod emitter;
mod error;
mod hittable;
mod intersect;
mod material;
mod path;
mod renderer;
mod shading;
mod sphere;
mod tracer;
mod triangle;
mod world;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::Camera;
pub use curvature::{angle_to, classify, PathShape, COINCIDENT_DISTANCE};
pub use debug::{DebugLine, DebugRayEmitter, DebugRayKind, DebugSink, LineRecorder};
pub use emitter::{emit_debug_rays, emit_from, sample_vertex_indices, vertex_rays};
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use intersect::first_hit_along;
pub use material::{Color, Surface, FALLBACK_BASE_COLOR};
pub use path::{PathPoints, QuadraticPath};
pub use renderer::{color_to_rgb, linear_to_gamma, render, render_scene, ImageBuffer};
pub use shading::{light_contribution, shade_lambertian, SHADOW_EPSILON};
pub use sphere::Sphere;
pub use tracer::{RayPath, Tracer};
pub use triangle::Triangle;
pub use world::{build_world, build_world_filtered};

/// Re-export common math types from warp_math
pub use warp_math::{Interval, Ray, Vec3};
