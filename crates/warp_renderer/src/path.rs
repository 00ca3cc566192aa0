//! Quadratic path integration for bent rays.
//!
//! A bent ray follows a single quadratic Bézier curve from its origin to the
//! massive body. The control point is the midpoint of the two, pushed by a
//! sag offset. This is a visual approximation, not a geodesic.

use warp_math::Vec3;

/// A quadratic Bézier curve sampled at a fixed number of steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticPath {
    start: Vec3,
    control: Vec3,
    end: Vec3,
    steps: u32,
}

impl QuadraticPath {
    /// Build the curve from `start` to `end` with the midpoint offset by `sag`.
    ///
    /// `steps` is clamped to at least 1.
    pub fn new(start: Vec3, end: Vec3, sag: Vec3, steps: u32) -> Self {
        Self {
            start,
            control: (start + end) * 0.5 + sag,
            end,
            steps: steps.max(1),
        }
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn control(&self) -> Vec3 {
        self.control
    }

    pub fn end(&self) -> Vec3 {
        self.end
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Point on the curve at parameter `t` in [0, 1].
    #[inline]
    pub fn evaluate(&self, t: f32) -> Vec3 {
        let s = 1.0 - t;
        self.start * (s * s) + self.control * (2.0 * s * t) + self.end * (t * t)
    }

    /// The `steps` sample points after `start`, ending exactly on `end`.
    ///
    /// Each call starts a fresh pass over the curve.
    pub fn points(&self) -> PathPoints {
        PathPoints {
            path: *self,
            next: 1,
        }
    }

    /// The whole polyline, `start` included.
    pub fn polyline(&self) -> Vec<Vec3> {
        std::iter::once(self.start).chain(self.points()).collect()
    }
}

/// Lazy iterator over the sample points of a [`QuadraticPath`].
#[derive(Debug, Clone)]
pub struct PathPoints {
    path: QuadraticPath,
    next: u32,
}

impl Iterator for PathPoints {
    type Item = Vec3;

    fn next(&mut self) -> Option<Vec3> {
        if self.next > self.path.steps {
            return None;
        }
        let t = self.next as f32 / self.path.steps as f32;
        self.next += 1;
        Some(self.path.evaluate(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.path.steps + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PathPoints {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_paths() -> Vec<QuadraticPath> {
        vec![
            QuadraticPath::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Y, 50),
            QuadraticPath::new(
                Vec3::new(-3.5, 2.25, 7.0),
                Vec3::new(12.0, -4.0, 0.5),
                Vec3::new(0.0, -3.0, 0.0),
                30,
            ),
            QuadraticPath::new(Vec3::ONE, Vec3::ONE, Vec3::ZERO, 7),
        ]
    }

    #[test]
    fn test_curve_endpoints() {
        for path in sample_paths() {
            assert_eq!(path.evaluate(0.0), path.start());
            assert_eq!(path.evaluate(1.0), path.end());
        }
    }

    #[test]
    fn test_point_count_and_last_point() {
        for path in sample_paths() {
            let points: Vec<Vec3> = path.points().collect();
            assert_eq!(points.len(), path.steps() as usize);
            assert_eq!(*points.last().unwrap(), path.end());
        }
    }

    #[test]
    fn test_midpoint_sags() {
        let path = QuadraticPath::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Y * 2.0, 10);
        assert_eq!(path.control(), Vec3::new(0.0, -2.0, 5.0));

        // At t = 0.5 the curve sits halfway to the control point's sag
        let mid = path.evaluate(0.5);
        assert!((mid - Vec3::new(0.0, -1.0, 5.0)).length() < 1e-6);
    }

    #[test]
    fn test_points_are_restartable() {
        let path = sample_paths()[1];
        let first: Vec<Vec3> = path.points().collect();
        let second: Vec<Vec3> = path.points().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let path = QuadraticPath::new(Vec3::ZERO, Vec3::X, Vec3::ZERO, 4);
        let mut points = path.points();
        assert_eq!(points.len(), 4);
        points.next();
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_polyline_includes_start() {
        let path = QuadraticPath::new(Vec3::ZERO, Vec3::X, Vec3::ZERO, 4);
        let polyline = path.polyline();
        assert_eq!(polyline.len(), 5);
        assert_eq!(polyline[0], Vec3::ZERO);
        // No sag: samples are evenly spaced along the segment
        assert!((polyline[2] - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_zero_steps_clamped() {
        let path = QuadraticPath::new(Vec3::ZERO, Vec3::X, Vec3::ZERO, 0);
        assert_eq!(path.points().collect::<Vec<_>>(), vec![Vec3::X]);
    }
}
