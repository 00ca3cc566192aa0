//! Debug rays seeded from mesh vertices.

use std::collections::HashSet;

use rand::Rng;

use crate::debug::{DebugRayEmitter, DebugRayKind, DebugSink};
use crate::world::build_world_filtered;
use crate::RenderResult;
use warp_core::{RayEmitter, Scene, SceneError};
use warp_math::{Mat4, Mat4Ext, Ray, Vec3};

/// Draw `min(requested, vertex_count)` distinct vertex indices.
///
/// Uniform draws from `0..vertex_count` are repeated until an index not
/// already chosen comes up.
pub fn sample_vertex_indices<R: Rng + ?Sized>(
    vertex_count: usize,
    requested: usize,
    rng: &mut R,
) -> Vec<usize> {
    let count = requested.min(vertex_count);
    if count < requested {
        log::warn!(
            "Requested {} rays but only {} vertices are available",
            requested,
            vertex_count
        );
    }

    let mut chosen = HashSet::with_capacity(count);
    let mut indices = Vec::with_capacity(count);
    while indices.len() < count {
        let index = rng.gen_range(0..vertex_count);
        if chosen.insert(index) {
            indices.push(index);
        }
    }
    indices
}

/// Outward rays from the object origin through sampled world-space vertices.
///
/// A vertex sitting on the object origin has no direction and is skipped.
pub fn vertex_rays<R: Rng + ?Sized>(
    vertices: &[Vec3],
    object_to_world: &Mat4,
    requested: usize,
    rng: &mut R,
) -> Vec<Ray> {
    let origin = object_to_world.origin();

    sample_vertex_indices(vertices.len(), requested, rng)
        .into_iter()
        .filter_map(|index| {
            let world = object_to_world.transform_point3(vertices[index]);
            match Ray::new(world, world - origin) {
                Ok(ray) => Some(ray),
                Err(err) => {
                    log::warn!("Skipping vertex {}: {}", index, err);
                    None
                }
            }
        })
        .collect()
}

/// Emit debug rays for one emitter.
///
/// The emitter's own object is left out of the intersection world, since its
/// rays start on its surface.
pub fn emit_from<R: Rng + ?Sized>(
    scene: &Scene,
    emitter: &RayEmitter,
    rng: &mut R,
    sink: &mut dyn DebugSink,
) -> RenderResult<Vec<DebugRayKind>> {
    let object = scene
        .object(&emitter.object)
        .ok_or_else(|| SceneError::UnknownObject(emitter.object.clone()))?;
    let mesh = object
        .shape
        .mesh()
        .ok_or_else(|| SceneError::NotAMesh(emitter.object.clone()))?;

    let world = build_world_filtered(scene, |o| o.name != object.name);
    let debug = DebugRayEmitter::new(&world, &scene.debug_rays)
        .with_massive_body(scene.massive_body.as_ref());

    let rays = vertex_rays(
        &mesh.positions,
        &object.transform.to_matrix(),
        emitter.ray_count,
        rng,
    );
    let kinds: Vec<DebugRayKind> = rays
        .iter()
        .map(|ray| debug.emit(ray, emitter.straight_ray_length, sink))
        .collect();

    log::debug!("Emitter '{}' drew {} rays", emitter.object, kinds.len());
    Ok(kinds)
}

/// Emit debug rays for every emitter in the scene, in order.
pub fn emit_debug_rays<R: Rng + ?Sized>(
    scene: &Scene,
    rng: &mut R,
    sink: &mut dyn DebugSink,
) -> RenderResult<Vec<DebugRayKind>> {
    let mut kinds = Vec::new();
    for emitter in &scene.emitters {
        kinds.extend(emit_from(scene, emitter, rng, sink)?);
    }
    Ok(kinds)
}
