//! Turns a scene description into intersectable world-space geometry.

use crate::{HittableList, Sphere, Surface, Triangle};
use warp_core::{Mesh, Scene, SceneObject, Shape};
use warp_math::Mat4Ext;

/// Build the intersectable world for every object in the scene.
pub fn build_world(scene: &Scene) -> HittableList {
    build_world_filtered(scene, |_| true)
}

/// Build the intersectable world from the objects accepted by `keep`.
pub fn build_world_filtered<F>(scene: &Scene, keep: F) -> HittableList
where
    F: Fn(&SceneObject) -> bool,
{
    let mut world = HittableList::new();
    let mut skipped = 0;

    for object in scene.objects.iter().filter(|o| keep(o)) {
        let matrix = object.transform.to_matrix();
        let surface = Surface::new(object.base_color);

        if let Shape::Sphere { radius } = object.shape {
            world.add(Box::new(Sphere::new(
                matrix.origin(),
                radius * matrix.max_scale(),
                surface,
            )));
            continue;
        }

        let Some(mesh) = object.shape.mesh() else {
            continue;
        };
        let placed = Mesh::new(matrix.transform_points(&mesh.positions), mesh.indices);

        for [v0, v1, v2] in placed.extract_triangle_vertices() {
            match Triangle::new(v0, v1, v2, surface) {
                Some(triangle) => world.add(Box::new(triangle)),
                None => skipped += 1,
            }
        }
    }

    if skipped > 0 {
        log::debug!("Skipped {} degenerate triangles", skipped);
    }
    log::debug!("Built world with {} primitives", world.len());

    world
}
