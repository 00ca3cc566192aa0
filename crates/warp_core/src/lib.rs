//! warp core - Scene description for the lensing ray caster.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `SceneObject`, `Shape`, `Light`, `MassiveBody`, `Mesh`
//! - **Configuration**: `RenderConfig` and `DebugRayConfig` with defaults
//! - **Loading**: JSON scene files with validation
//!
//! # Example
//!
//! ```ignore
//! use warp_core::load_scene;
//!
//! let scene = load_scene("scenes/lensing.json")?;
//! println!("Loaded {} objects, {} lights",
//!     scene.objects.len(),
//!     scene.light_count());
//! ```

pub mod config;
pub mod loader;
pub mod mesh;
pub mod scene;

// Re-export commonly used types
pub use config::{DebugRayConfig, RenderConfig};
pub use loader::{load_scene, load_scene_from_str, validate, SceneError, SceneResult};
pub use mesh::Mesh;
pub use scene::{
    CameraDesc, Light, MassiveBody, RayEmitter, Scene, SceneObject, Shape, Transform,
};
