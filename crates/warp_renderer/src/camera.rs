//! Camera for ray generation.
//!
//! The camera looks down its local +Z axis with +Y up. Pixel (0, 0) is the
//! bottom-left pixel of the image.

use warp_core::CameraDesc;
use warp_math::{Quat, Ray, Vec3};

/// Camera for generating one ray through the center of each pixel.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    position: Vec3,
    orientation: Quat,

    // Vertical field of view in degrees
    vfov: f32,

    // Cached computed values (set by initialize())
    aspect: f32,
    tan_half_fov: f32,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        let mut camera = Self {
            image_width: 640,
            image_height: 480,
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            vfov: 60.0,
            aspect: 1.0,
            tan_half_fov: 1.0,
        };
        camera.initialize();
        camera
    }

    /// Create a camera from a scene description at the given resolution.
    pub fn from_desc(desc: &CameraDesc, width: u32, height: u32) -> Self {
        Self::new()
            .with_resolution(width, height)
            .with_position(desc.position, desc.rotation())
            .with_lens(desc.fov_degrees)
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self.initialize();
        self
    }

    /// Set camera position and world orientation.
    pub fn with_position(mut self, position: Vec3, orientation: Quat) -> Self {
        self.position = position;
        self.orientation = orientation.normalize();
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_lens(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self.initialize();
        self
    }

    /// Recompute cached projection values.
    fn initialize(&mut self) {
        self.aspect = self.image_width as f32 / self.image_height.max(1) as f32;
        self.tan_half_fov = (self.vfov.to_radians() * 0.5).tan();
    }

    /// Camera-space direction through the center of pixel (x, y).
    pub fn local_direction(&self, x: u32, y: u32) -> Vec3 {
        let u = (x as f32 + 0.5) / self.image_width as f32;
        let v = (y as f32 + 0.5) / self.image_height as f32;

        let ndc_x = 2.0 * u - 1.0;
        let ndc_y = 2.0 * v - 1.0;

        Vec3::new(
            ndc_x * self.aspect * self.tan_half_fov,
            ndc_y * self.tan_half_fov,
            1.0,
        )
        .normalize()
    }

    /// Generate the world-space ray for pixel (x, y).
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        // z is always 1 before normalizing, so the direction is never degenerate
        let direction = (self.orientation * self.local_direction(x, y)).normalize();
        Ray::from_unit(self.position, direction)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
