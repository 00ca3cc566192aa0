//! Piecewise intersection along a polyline.

use crate::{HitRecord, Hittable};
use warp_math::{Ray, Vec3};

/// Walk `start` followed by `points` as consecutive segments and return the
/// first hit.
///
/// Segments are tested in path order and the walk stops at the first segment
/// that reports anything. Within a segment the nearest hit wins, but a later
/// segment is never consulted once an earlier one has hit, even if the later
/// one would reach a point closer to `start`. Zero-length segments are skipped.
pub fn first_hit_along<I>(world: &dyn Hittable, start: Vec3, points: I) -> Option<HitRecord>
where
    I: IntoIterator<Item = Vec3>,
{
    let mut prev = start;
    for point in points {
        if let Ok(ray) = Ray::between(prev, point) {
            if let Some(hit) = world.intersect(&ray, prev.distance(point)) {
                return Some(hit);
            }
        }
        prev = point;
    }
    None
}
