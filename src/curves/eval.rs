//! The seam through which host curves are sampled.
//!
//! Elliptical arcs and free-form curves are not modelled geometrically;
//! the host hands over an evaluator and the extractor only ever asks it for
//! points. Evaluation may fail, and a failure aborts the loop being sampled.

use crate::error::EvaluationError;
use crate::primitives::{Ellipse2, Point2};
use num_traits::Float;
use std::fmt;

/// A curve that can report the point at a parameter value.
///
/// What the parameter means is up to the curve: an angle for arcs and
/// ellipses, a normalized or native parameter for splines.
pub trait CurveEvaluator<F>: fmt::Debug + Send + Sync {
    /// Returns the point at `param`.
    fn point_at(&self, param: F) -> Result<Point2<F>, EvaluationError>;
}

impl<F: Float + Send + Sync + fmt::Debug> CurveEvaluator<F> for Ellipse2<F> {
    fn point_at(&self, param: F) -> Result<Point2<F>, EvaluationError> {
        Ok(Ellipse2::point_at(self, param))
    }
}

/// Adapts a closure into a [`CurveEvaluator`].
///
/// # Example
///
/// ```
/// use plantfill::curves::{sample_span, FnEvaluator};
/// use plantfill::Point2;
///
/// let parabola = FnEvaluator::new(|t: f64| Ok(Point2::new(t, t * t)));
/// let pts = sample_span(&parabola, 0.0, 2.0, 4).unwrap();
/// assert_eq!(pts.len(), 5);
/// assert_eq!(pts[4], Point2::new(2.0, 4.0));
/// ```
pub struct FnEvaluator<G> {
    func: G,
}

impl<G> FnEvaluator<G> {
    /// Wraps `func`.
    pub fn new<F>(func: G) -> Self
    where
        G: Fn(F) -> Result<Point2<F>, EvaluationError>,
    {
        Self { func }
    }
}

impl<G> fmt::Debug for FnEvaluator<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnEvaluator").finish_non_exhaustive()
    }
}

impl<F, G> CurveEvaluator<F> for FnEvaluator<G>
where
    G: Fn(F) -> Result<Point2<F>, EvaluationError> + Send + Sync,
{
    fn point_at(&self, param: F) -> Result<Point2<F>, EvaluationError> {
        (self.func)(param)
    }
}

/// Returns `end`, advanced by one full turn if it lies before `start`.
///
/// Angular spans always run counter-clockwise from `start`.
#[inline]
pub fn normalize_sweep<F: Float>(start: F, end: F) -> F {
    if end < start {
        end + F::from(std::f64::consts::TAU).unwrap()
    } else {
        end
    }
}

/// Evaluates `steps + 1` uniformly spaced parameters from `start` to `end`
/// inclusive.
///
/// Non-finite points are reported as [`EvaluationError::NonFinite`].
pub fn sample_span<F: Float, C: CurveEvaluator<F> + ?Sized>(
    curve: &C,
    start: F,
    end: F,
    steps: usize,
) -> Result<Vec<Point2<F>>, EvaluationError> {
    let steps = steps.max(1);
    let step = (end - start) / F::from(steps).unwrap();

    (0..=steps)
        .map(|i| {
            // Hit `end` exactly on the last sample.
            let param = if i == steps {
                end
            } else {
                start + step * F::from(i).unwrap()
            };
            let p = curve.point_at(param)?;
            if p.is_finite() {
                Ok(p)
            } else {
                Err(EvaluationError::NonFinite {
                    param: param.to_f64().unwrap_or(f64::NAN),
                })
            }
        })
        .collect()
}
