//! Scene description types for warp.
//!
//! Everything here is plain data resolved up front: the renderer only
//! consumes world-space positions, orientations and colors, never how
//! they were authored.

use serde::{Deserialize, Serialize};
use warp_math::{EulerRot, Mat4, Quat, Vec3};

use crate::config::{DebugRayConfig, RenderConfig};
use crate::mesh::Mesh;

/// Rotation from Euler angles in degrees, applied Z first, then X, then Y.
fn euler_degrees_to_quat(degrees: Vec3) -> Quat {
    let r = degrees * (std::f32::consts::PI / 180.0);
    Quat::from_euler(EulerRot::YXZ, r.y, r.x, r.z)
}

/// Transform components that can be composed into a matrix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    /// Translation
    pub translation: Vec3,

    /// Rotation as Euler angles in degrees
    pub rotation_degrees: Vec3,

    /// Scale
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation_degrees: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform with only translation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Rotation as a quaternion.
    pub fn rotation(&self) -> Quat {
        euler_degrees_to_quat(self.rotation_degrees)
    }

    /// Convert to a 4x4 object-to-world matrix.
    ///
    /// Order: Scale -> Rotate -> Translate (SRT)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation(), self.translation)
    }
}

fn default_plane_subdivisions() -> u32 {
    10
}

fn default_sphere_segments() -> u32 {
    24
}

fn default_sphere_rings() -> u32 {
    16
}

/// Geometry of a scene object, in object-local space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Analytic sphere centered on the object origin.
    Sphere { radius: f32 },
    /// Explicit triangle mesh.
    Mesh {
        positions: Vec<Vec3>,
        indices: Vec<u32>,
    },
    Cube { size: f32 },
    /// Grid in the XZ plane facing +Y.
    Plane {
        size: f32,
        #[serde(default = "default_plane_subdivisions")]
        subdivisions: u32,
    },
    UvSphere {
        radius: f32,
        #[serde(default = "default_sphere_segments")]
        segments: u32,
        #[serde(default = "default_sphere_rings")]
        rings: u32,
    },
}

impl Shape {
    /// Build the triangle mesh for this shape.
    ///
    /// Returns `None` for analytic shapes, which intersect without a mesh.
    pub fn mesh(&self) -> Option<Mesh> {
        match self {
            Shape::Sphere { .. } => None,
            Shape::Mesh { positions, indices } => Some(Mesh::new(positions.clone(), indices.clone())),
            Shape::Cube { size } => Some(Mesh::cube(*size)),
            Shape::Plane { size, subdivisions } => Some(Mesh::plane(*size, *subdivisions)),
            Shape::UvSphere {
                radius,
                segments,
                rings,
            } => Some(Mesh::uv_sphere(*radius, *segments, *rings)),
        }
    }
}

/// A named, placed piece of geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub shape: Shape,
    #[serde(default)]
    pub transform: Transform,
    /// Surface base color; surfaces without one shade with a neutral gray.
    #[serde(default)]
    pub base_color: Option<Vec3>,
}

/// A point light.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Light {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            color: Vec3::ONE,
            intensity: 1.0,
        }
    }
}

impl Light {
    pub fn new(position: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }
}

/// The body that bends nearby rays towards itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MassiveBody {
    pub position: Vec3,
    /// How far the curve midpoint sags downwards
    pub pull_strength: f32,
    /// Rays within this many degrees of the body curve towards it
    pub angle_threshold: f32,
}

impl Default for MassiveBody {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            pull_strength: 1.0,
            angle_threshold: 10.0,
        }
    }
}

impl MassiveBody {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_pull_strength(mut self, pull_strength: f32) -> Self {
        self.pull_strength = pull_strength;
        self
    }

    pub fn with_angle_threshold(mut self, degrees: f32) -> Self {
        self.angle_threshold = degrees;
        self
    }

    /// Offset applied to the curve midpoint: straight down, scaled by pull strength.
    pub fn sag(&self) -> Vec3 {
        Vec3::NEG_Y * self.pull_strength
    }
}

/// Camera placement. The camera looks down its local +Z axis with +Y up.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDesc {
    pub position: Vec3,
    pub rotation_degrees: Vec3,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation_degrees: Vec3::ZERO,
            fov_degrees: 60.0,
        }
    }
}

impl CameraDesc {
    pub fn rotation(&self) -> Quat {
        euler_degrees_to_quat(self.rotation_degrees)
    }
}

/// Seeds debug rays from the vertices of a mesh object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RayEmitter {
    /// Name of the mesh object whose vertices seed rays
    pub object: String,
    pub ray_count: usize,
    /// Length of the straight rays and of the direct hit test
    pub straight_ray_length: f32,
}

impl Default for RayEmitter {
    fn default() -> Self {
        Self {
            object: String::new(),
            ray_count: 5,
            straight_ray_length: 5.0,
        }
    }
}

/// A complete scene as read from a scene file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub camera: CameraDesc,
    pub objects: Vec<SceneObject>,
    /// Ordered light set; `None` entries are valid and skipped when shading.
    pub lights: Vec<Option<Light>>,
    pub massive_body: Option<MassiveBody>,
    pub emitters: Vec<RayEmitter>,
    pub render: RenderConfig,
    pub debug_rays: DebugRayConfig,
}

impl Scene {
    /// Look up an object by name.
    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Number of lights actually present.
    pub fn light_count(&self) -> usize {
        self.lights.iter().flatten().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_matrix() {
        let transform = Transform {
            translation: Vec3::new(1.0, 2.0, 3.0),
            rotation_degrees: Vec3::new(0.0, 90.0, 0.0),
            scale: Vec3::splat(2.0),
        };

        let p = transform.to_matrix().transform_point3(Vec3::Z);
        // +Z rotated 90 degrees about Y lands on +X, then scaled and moved
        assert!((p - Vec3::new(3.0, 2.0, 3.0)).length() < 1e-5, "{}", p);
    }

    #[test]
    fn test_euler_order_applies_z_first() {
        let transform = Transform {
            rotation_degrees: Vec3::new(90.0, 0.0, 90.0),
            ..Default::default()
        };
        // Z turns +X into +Y, then X turns +Y into +Z
        let v = transform.rotation() * Vec3::X;
        assert!((v - Vec3::Z).length() < 1e-5, "{}", v);
    }

    #[test]
    fn test_massive_body_sag_points_down() {
        let body = MassiveBody::new(Vec3::new(0.0, 0.0, 10.0)).with_pull_strength(2.5);
        assert_eq!(body.sag(), Vec3::new(0.0, -2.5, 0.0));
        assert_eq!(body.angle_threshold, 10.0);
    }

    #[test]
    fn test_shape_meshes() {
        assert!(Shape::Sphere { radius: 1.0 }.mesh().is_none());

        let cube = Shape::Cube { size: 1.0 }.mesh().unwrap();
        assert_eq!(cube.vertex_count(), 8);

        let plane = Shape::Plane {
            size: 4.0,
            subdivisions: 2,
        }
        .mesh()
        .unwrap();
        assert_eq!(plane.vertex_count(), 9);
    }

    #[test]
    fn test_light_count_skips_absent() {
        let scene = Scene {
            lights: vec![Some(Light::default()), None, Some(Light::default())],
            ..Default::default()
        };
        assert_eq!(scene.light_count(), 2);
    }
}
