//! Cubic Bézier curves.
//!
//! Hatch boundaries exported from spline edges arrive as cubic segments;
//! these evaluate through the same [`CurveEvaluator`] seam as host curves.

use super::eval::CurveEvaluator;
use crate::error::EvaluationError;
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt;

/// A cubic Bézier curve defined by 4 control points.
///
/// The curve starts at `p0`, is influenced by `p1` and `p2`, and ends at `p3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier2<F> {
    /// Start point
    pub p0: Point2<F>,
    /// First control point
    pub p1: Point2<F>,
    /// Second control point
    pub p2: Point2<F>,
    /// End point
    pub p3: Point2<F>,
}

impl<F: Float> CubicBezier2<F> {
    /// Creates a new cubic Bézier curve.
    #[inline]
    pub fn new(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluates the curve at parameter `t` (0 to 1).
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        let one = F::one();
        let mt = one - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;
        let t2 = t * t;
        let t3 = t2 * t;
        let three = one + one + one;

        Point2::new(
            mt3 * self.p0.x
                + three * mt2 * t * self.p1.x
                + three * mt * t2 * self.p2.x
                + t3 * self.p3.x,
            mt3 * self.p0.y
                + three * mt2 * t * self.p1.y
                + three * mt * t2 * self.p2.y
                + t3 * self.p3.y,
        )
    }
}

impl<F: Float + Send + Sync + fmt::Debug> CurveEvaluator<F> for CubicBezier2<F> {
    /// Evaluates at `param` in `[0, 1]`; anything else is out of domain.
    fn point_at(&self, param: F) -> Result<Point2<F>, EvaluationError> {
        if param < F::zero() || param > F::one() {
            return Err(EvaluationError::OutOfDomain {
                param: param.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(self.eval(param))
    }
}
