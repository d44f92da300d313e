//! Circular arc type and fixed-count discretization.

use super::eval::{normalize_sweep, CurveEvaluator};
use crate::error::EvaluationError;
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt;

/// A 2D circular arc defined by center, radius, and angular range.
///
/// Angles are in radians, measured counter-clockwise from the positive
/// x-axis. The arc always runs counter-clockwise from `start_angle`; an
/// `end_angle` smaller than `start_angle` wraps through a full turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc2<F> {
    /// Center of the arc's circle.
    pub center: Point2<F>,
    /// Radius of the arc.
    pub radius: F,
    /// Start angle in radians.
    pub start_angle: F,
    /// End angle in radians.
    pub end_angle: F,
}

impl<F: Float> Arc2<F> {
    /// Creates a new arc.
    #[inline]
    pub fn new(center: Point2<F>, radius: F, start_angle: F, end_angle: F) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    /// Returns the point at the given angle on the arc's circle.
    #[inline]
    pub fn point_at_angle(&self, angle: F) -> Point2<F> {
        self.center.polar_offset(self.radius, angle)
    }

    /// Returns the start point of the arc.
    #[inline]
    pub fn start_point(&self) -> Point2<F> {
        self.point_at_angle(self.start_angle)
    }

    /// Returns the end point of the arc.
    #[inline]
    pub fn end_point(&self) -> Point2<F> {
        self.point_at_angle(self.end_angle)
    }

    /// Returns the counter-clockwise sweep, always non-negative.
    #[inline]
    pub fn sweep_angle(&self) -> F {
        normalize_sweep(self.start_angle, self.end_angle) - self.start_angle
    }

    /// Samples the arc into `segments` equal-angle sub-segments.
    ///
    /// Returns `segments + 1` points, starting at the start point and
    /// ending at the end point.
    ///
    /// # Example
    ///
    /// ```
    /// use plantfill::{Point2, curves::Arc2};
    /// use std::f64::consts::PI;
    ///
    /// let arc = Arc2::new(Point2::new(0.0, 0.0), 1.0, 0.0, PI / 2.0);
    /// let pts = arc.sample(16);
    /// assert_eq!(pts.len(), 17);
    /// ```
    pub fn sample(&self, segments: usize) -> Vec<Point2<F>> {
        let segments = segments.max(1);
        let end = normalize_sweep(self.start_angle, self.end_angle);
        let step = (end - self.start_angle) / F::from(segments).unwrap();

        (0..=segments)
            .map(|i| {
                let angle = if i == segments {
                    end
                } else {
                    self.start_angle + step * F::from(i).unwrap()
                };
                self.point_at_angle(angle)
            })
            .collect()
    }
}

impl<F: Float + Send + Sync + fmt::Debug> CurveEvaluator<F> for Arc2<F> {
    fn point_at(&self, param: F) -> Result<Point2<F>, EvaluationError> {
        Ok(self.point_at_angle(param))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_arc_points() {
        let arc: Arc2<f64> = Arc2::new(Point2::new(0.0, 0.0), 1.0, 0.0, PI / 2.0);

        let start = arc.start_point();
        assert_relative_eq!(start.x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(start.y, 0.0, epsilon = 1e-10);

        let end = arc.end_point();
        assert_relative_eq!(end.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(end.y, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_arc_sweep_angle_wraps() {
        let arc: Arc2<f64> = Arc2::new(Point2::new(0.0, 0.0), 1.0, 0.0, PI);
        assert_relative_eq!(arc.sweep_angle(), PI, epsilon = 1e-10);

        // End before start: counter-clockwise the long way round.
        let wrapped: Arc2<f64> = Arc2::new(Point2::new(0.0, 0.0), 1.0, PI, PI / 2.0);
        assert_relative_eq!(wrapped.sweep_angle(), 1.5 * PI, epsilon = 1e-10);
    }

    #[test]
    fn test_arc_sample_endpoints() {
        let arc: Arc2<f64> = Arc2::new(Point2::new(2.0, 0.0), 2.0, 0.0, PI);
        let pts = arc.sample(16);
        assert_eq!(pts.len(), 17);

        assert_relative_eq!(pts[0].x, 4.0, epsilon = 1e-10);
        assert_relative_eq!(pts[0].y, 0.0, epsilon = 1e-10);
        assert_relative_eq!(pts[8].x, 2.0, epsilon = 1e-10);
        assert_relative_eq!(pts[8].y, 2.0, epsilon = 1e-10);
        assert_relative_eq!(pts[16].x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(pts[16].y, 0.0, epsilon = 1e-10);

        for p in &pts {
            assert_relative_eq!(p.distance(arc.center), 2.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_arc_sample_wrapped_goes_through_bottom() {
        // From 90 degrees to 0 counter-clockwise passes through 270 degrees.
        let arc: Arc2<f64> = Arc2::new(Point2::new(0.0, 0.0), 1.0, PI / 2.0, 0.0);
        let pts = arc.sample(6);
        assert_relative_eq!(pts[0].y, 1.0, epsilon = 1e-10);
        assert_relative_eq!(pts[4].y, -1.0, epsilon = 1e-10);
        assert_relative_eq!(pts[6].x, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_arc_as_evaluator() {
        let arc: Arc2<f64> = Arc2::new(Point2::new(0.0, 0.0), 3.0, 0.0, PI);
        let p = CurveEvaluator::point_at(&arc, PI / 2.0).unwrap();
        assert_relative_eq!(p.y, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_arc_f32() {
        let arc: Arc2<f32> = Arc2::new(
            Point2::new(0.0, 0.0),
            1.0,
            0.0,
            std::f32::consts::PI / 2.0,
        );
        assert_eq!(arc.sample(16).len(), 17);
    }
}
