//! Decides whether a ray travels straight or bends towards the massive body.

use warp_core::MassiveBody;
use warp_math::Vec3;

/// How a ray's path is traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathShape {
    Straight,
    Curved,
}

/// Below this distance the ray origin is treated as sitting on the target.
pub const COINCIDENT_DISTANCE: f32 = 1e-6;

/// Angle in degrees, in [0, 180], between `direction` and the line from
/// `origin` to `target`.
///
/// When `origin` coincides with `target` the angle is undefined and 0 is
/// returned, so rays starting inside the body always curve.
pub fn angle_to(origin: Vec3, direction: Vec3, target: Vec3) -> f32 {
    let to_target = target - origin;
    let distance = to_target.length();
    if distance < COINCIDENT_DISTANCE {
        return 0.0;
    }

    let cos = direction.dot(to_target) / (direction.length() * distance);
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Classify a ray against an optional massive body.
///
/// Without a body every path is straight. Otherwise the path curves when the
/// angle to the body is strictly below the body's threshold.
pub fn classify(origin: Vec3, direction: Vec3, body: Option<&MassiveBody>) -> PathShape {
    match body {
        Some(body) if angle_to(origin, direction, body.position) < body.angle_threshold => {
            PathShape::Curved
        }
        _ => PathShape::Straight,
    }
}
