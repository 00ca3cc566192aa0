//! Image rendering.
//!
//! One ray per pixel through the pixel center, resolved by the [`Tracer`]:
//! - No anti-aliasing or multi-sampling
//! - Colors stay linear and unclamped until converted to 8-bit
//! - Optional gamma correction at output

use std::path::Path;
use std::time::Instant;

use crate::bucket::render_parallel;
use crate::world::build_world;
use crate::{Camera, Color, RenderResult, Tracer};
use warp_core::Scene;
use warp_math::Interval;

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to 8-bit RGB, clamping to the displayable range.
pub fn color_to_rgb(color: Color, gamma_correct: bool) -> [u8; 3] {
    let encode = |c: f32| {
        let c = if gamma_correct { linear_to_gamma(c) } else { c };
        (255.0 * Interval::UNIT.clamp(c)).round() as u8
    };
    [encode(color.x), encode(color.y), encode(color.z)]
}

/// Image buffer holding one linear color per pixel.
///
/// Rows are stored bottom-up: (0, 0) is the bottom-left pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Wrap pixels already laid out row-major, bottom row first.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "pixel count does not match {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Position of pixel (x, y) in `pixels`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Convert to an 8-bit image, top row first as image files expect.
    pub fn to_rgb_image(&self, gamma_correct: bool) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, row| {
            let y = self.height - 1 - row;
            image::Rgb(color_to_rgb(self.get(x, y), gamma_correct))
        })
    }

    /// Encode and write the image. The format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P, gamma_correct: bool) -> RenderResult<()> {
        self.to_rgb_image(gamma_correct).save(path.as_ref())?;
        log::info!("Saved image to {}", path.as_ref().display());
        Ok(())
    }
}

/// Render the entire image on the calling thread.
///
/// Every pixel is traced and written exactly once, bottom row first.
pub fn render(camera: &Camera, tracer: &Tracer) -> ImageBuffer {
    let (width, height) = (camera.image_width, camera.image_height);
    let pixels = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| tracer.trace(&camera.get_ray(x, y)))
        .collect();

    ImageBuffer::from_pixels(width, height, pixels)
}

/// Render a scene with its own camera, lights, massive body and settings.
pub fn render_scene(scene: &Scene) -> ImageBuffer {
    let config = &scene.render;
    let world = build_world(scene);
    let camera = Camera::from_desc(&scene.camera, config.width, config.height);
    let tracer = Tracer::new(&world, &scene.lights, config)
        .with_massive_body(scene.massive_body.as_ref());

    log::info!(
        "Rendering {}x{} ({})",
        config.width,
        config.height,
        if config.parallel {
            "parallel"
        } else {
            "single-threaded"
        }
    );

    let start = Instant::now();
    let image = if config.parallel {
        render_parallel(&camera, &tracer, config.bucket_size)
    } else {
        render(&camera, &tracer)
    };
    log::info!("Rendered in {:?}", start.elapsed());

    image
}
