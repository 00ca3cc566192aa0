//! Render and debug-ray configuration.
//!
//! Both structs deserialize with every field optional, so a scene file only
//! needs to mention what it changes.

use serde::{Deserialize, Serialize};
use warp_math::Vec3;

/// Image render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Sample points along a curved ray
    pub curve_steps: u32,
    /// Reach of a straight camera ray
    pub max_distance: f32,
    /// Color of pixels whose ray hits nothing
    pub background: Vec3,
    /// Apply gamma 2.0 when converting to 8-bit
    pub gamma_correct: bool,
    /// Render buckets in parallel with rayon
    pub parallel: bool,
    /// Bucket edge length in pixels for parallel rendering
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            curve_steps: 50,
            max_distance: 1000.0,
            background: Vec3::ZERO,
            gamma_correct: false,
            parallel: false,
            bucket_size: 64,
        }
    }
}

/// Debug ray emission configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugRayConfig {
    /// Sample points along a curved debug ray
    pub curve_steps: u32,
    /// Downward sag of the curve midpoint. Debug curves do not use the
    /// body's pull strength.
    pub curve_sag: f32,
    pub hit_color: Vec3,
    pub straight_color: Vec3,
    pub curve_color: Vec3,
}

impl Default for DebugRayConfig {
    fn default() -> Self {
        Self {
            curve_steps: 30,
            curve_sag: 1.0,
            hit_color: Vec3::ONE,
            straight_color: Vec3::ONE,
            curve_color: Vec3::X,
        }
    }
}

impl DebugRayConfig {
    /// Offset applied to the debug curve midpoint.
    pub fn sag(&self) -> Vec3 {
        Vec3::NEG_Y * self.curve_sag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults() {
        let config = RenderConfig::default();
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.curve_steps, 50);
        assert_eq!(config.background, Vec3::ZERO);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: RenderConfig = serde_json::from_str(r#"{ "width": 32, "parallel": true }"#).unwrap();
        assert_eq!(config.width, 32);
        assert_eq!(config.height, 480);
        assert!(config.parallel);
        assert_eq!(config.max_distance, 1000.0);
    }

    #[test]
    fn test_debug_defaults() {
        let config = DebugRayConfig::default();
        assert_eq!(config.curve_steps, 30);
        assert_eq!(config.sag(), Vec3::NEG_Y);
        assert_eq!(config.curve_color, Vec3::new(1.0, 0.0, 0.0));
    }
}
