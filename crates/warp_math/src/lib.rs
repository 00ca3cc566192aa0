// Re-export glam for convenience
pub use glam::*;

// warp math types
mod interval;
mod ray;
mod transform;

pub use interval::Interval;
pub use ray::{Ray, RayError};
pub use transform::Mat4Ext;
