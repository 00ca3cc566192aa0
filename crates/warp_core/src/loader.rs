//! Scene file loading.
//!
//! Scene files are JSON documents mirroring [`Scene`]. Every section is
//! optional; a loaded scene is validated before it is handed out so the
//! renderer can assume well-formed geometry and settings.

use std::path::Path;

use thiserror::Error;

use crate::scene::{Scene, Shape};

/// Errors that can occur while loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid object '{name}': {reason}")]
    InvalidObject { name: String, reason: String },

    #[error("Invalid light {index}: {reason}")]
    InvalidLight { index: usize, reason: String },

    #[error("Emitter references unknown object '{0}'")]
    UnknownObject(String),

    #[error("Emitter object '{0}' is not a mesh")]
    NotAMesh(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load and validate a scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let scene = load_scene_from_str(&text)?;

    log::info!(
        "Loaded scene {}: {} objects, {} lights, {} emitters, massive body: {}",
        path.display(),
        scene.objects.len(),
        scene.light_count(),
        scene.emitters.len(),
        scene.massive_body.is_some()
    );

    Ok(scene)
}

/// Parse and validate a scene from JSON text.
pub fn load_scene_from_str(text: &str) -> SceneResult<Scene> {
    let scene: Scene = serde_json::from_str(text)?;
    validate(&scene)?;
    Ok(scene)
}

fn invalid_object(name: &str, reason: impl Into<String>) -> SceneError {
    SceneError::InvalidObject {
        name: name.to_string(),
        reason: reason.into(),
    }
}

/// Check a scene for values the renderer cannot work with.
pub fn validate(scene: &Scene) -> SceneResult<()> {
    let render = &scene.render;
    if render.width == 0 || render.height == 0 {
        return Err(SceneError::InvalidConfig(format!(
            "resolution {}x{} has no pixels",
            render.width, render.height
        )));
    }
    if render.curve_steps == 0 || scene.debug_rays.curve_steps == 0 {
        return Err(SceneError::InvalidConfig("curve_steps must be positive".into()));
    }
    if render.bucket_size == 0 {
        return Err(SceneError::InvalidConfig("bucket_size must be positive".into()));
    }
    if !(render.max_distance > 0.0) {
        return Err(SceneError::InvalidConfig("max_distance must be positive".into()));
    }
    if !(scene.camera.fov_degrees > 0.0 && scene.camera.fov_degrees < 180.0) {
        return Err(SceneError::InvalidConfig(format!(
            "camera fov {} is outside (0, 180)",
            scene.camera.fov_degrees
        )));
    }

    for object in &scene.objects {
        match &object.shape {
            Shape::Sphere { radius } | Shape::UvSphere { radius, .. } if !(*radius > 0.0) => {
                return Err(invalid_object(&object.name, "radius must be positive"));
            }
            Shape::Cube { size } | Shape::Plane { size, .. } if !(*size > 0.0) => {
                return Err(invalid_object(&object.name, "size must be positive"));
            }
            _ => {}
        }
        if let Some(mesh) = object.shape.mesh() {
            mesh.validate()
                .map_err(|reason| invalid_object(&object.name, reason))?;
        }
    }

    for (index, light) in scene.lights.iter().enumerate() {
        if let Some(light) = light {
            if !(light.intensity >= 0.0) {
                return Err(SceneError::InvalidLight {
                    index,
                    reason: format!("intensity {} is negative", light.intensity),
                });
            }
        }
    }

    for emitter in &scene.emitters {
        let object = scene
            .object(&emitter.object)
            .ok_or_else(|| SceneError::UnknownObject(emitter.object.clone()))?;
        if object.shape.mesh().is_none() {
            return Err(SceneError::NotAMesh(emitter.object.clone()));
        }
        if !(emitter.straight_ray_length > 0.0) {
            return Err(SceneError::InvalidConfig(format!(
                "emitter on '{}' needs a positive straight_ray_length",
                emitter.object
            )));
        }
    }

    Ok(())
}
