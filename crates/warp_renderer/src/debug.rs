//! Debug line output.
//!
//! Draws the path a ray would take as colored line segments so the bending
//! rule can be inspected in an external viewer.

use std::path::Path;

use serde::Serialize;

use crate::curvature::{angle_to, classify, PathShape};
use crate::path::QuadraticPath;
use crate::{Color, Hittable, RenderResult};
use warp_core::{DebugRayConfig, MassiveBody};
use warp_math::{Ray, Vec3};

/// A single colored line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DebugLine {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color,
}

/// Receives line primitives from the debug emitter.
pub trait DebugSink {
    fn draw_line(&mut self, start: Vec3, end: Vec3, color: Color);
}

/// Sink that keeps every line in memory.
#[derive(Debug, Default, Clone)]
pub struct LineRecorder {
    lines: Vec<DebugLine>,
}

impl LineRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[DebugLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn to_json(&self) -> RenderResult<String> {
        Ok(serde_json::to_string_pretty(&self.lines)?)
    }

    /// Write all recorded lines as a JSON array.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        log::info!(
            "Wrote {} debug lines to {}",
            self.lines.len(),
            path.as_ref().display()
        );
        Ok(())
    }
}

impl DebugSink for LineRecorder {
    fn draw_line(&mut self, start: Vec3, end: Vec3, color: Color) {
        self.lines.push(DebugLine { start, end, color });
    }
}

/// Which branch a debug ray took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DebugRayKind {
    /// Direct hit within the straight reach; one line to the hit point.
    Hit,
    /// Nothing hit and no bending; one line of the straight reach.
    Straight,
    /// Bent towards the massive body; the whole curve is drawn.
    Curved,
}

/// Emits debug lines for individual rays.
///
/// Curved paths are drawn in full, without intersection testing, so a curve
/// may pass through geometry that the image render would stop at.
pub struct DebugRayEmitter<'a> {
    world: &'a dyn Hittable,
    massive_body: Option<&'a MassiveBody>,
    config: &'a DebugRayConfig,
}

impl<'a> DebugRayEmitter<'a> {
    pub fn new(world: &'a dyn Hittable, config: &'a DebugRayConfig) -> Self {
        Self {
            world,
            massive_body: None,
            config,
        }
    }

    pub fn with_massive_body(mut self, body: Option<&'a MassiveBody>) -> Self {
        self.massive_body = body;
        self
    }

    /// Draw one ray into `sink` and report the branch taken.
    pub fn emit(&self, ray: &Ray, straight_length: f32, sink: &mut dyn DebugSink) -> DebugRayKind {
        let origin = ray.origin();

        if let Some(hit) = self.world.intersect(ray, straight_length) {
            log::debug!("Debug ray from {} hit at {}", origin, hit.p);
            sink.draw_line(origin, hit.p, self.config.hit_color);
            return DebugRayKind::Hit;
        }

        let body = match self.massive_body {
            Some(body) if classify(origin, ray.direction(), Some(body)) == PathShape::Curved => {
                log::debug!(
                    "Debug ray from {} is {:.2} degrees from the body, below {}; curving",
                    origin,
                    angle_to(origin, ray.direction(), body.position),
                    body.angle_threshold
                );
                body
            }
            _ => {
                log::debug!("Debug ray from {} goes straight", origin);
                sink.draw_line(origin, ray.at(straight_length), self.config.straight_color);
                return DebugRayKind::Straight;
            }
        };

        let path = QuadraticPath::new(origin, body.position, self.config.sag(), self.config.curve_steps);
        let mut prev = origin;
        for point in path.points() {
            sink.draw_line(prev, point, self.config.curve_color);
            prev = point;
        }
        DebugRayKind::Curved
    }
}
