//! Surface description used by the shading engine.

use warp_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Base color of surfaces that do not specify one (mid gray).
pub const FALLBACK_BASE_COLOR: Color = Color::new(0.5, 0.5, 0.5);

/// Diffuse surface properties of a primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Surface {
    base_color: Option<Color>,
}

impl Surface {
    /// Create a surface, optionally with an explicit base color.
    pub fn new(base_color: Option<Color>) -> Self {
        Self { base_color }
    }

    /// Create a surface with an explicit base color.
    pub fn colored(base_color: Color) -> Self {
        Self::new(Some(base_color))
    }

    /// The color used for shading, falling back to mid gray.
    pub fn base_color(&self) -> Color {
        self.base_color.unwrap_or(FALLBACK_BASE_COLOR)
    }
}
