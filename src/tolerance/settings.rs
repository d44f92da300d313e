//! The tolerance pair shared by every approximate comparison.

use crate::primitives::{Point2, Vec2};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Thresholds for "equal enough" and "touching enough" decisions.
///
/// `equal_point` is a distance: two points closer than it are the same
/// point, a point closer than it to an edge lies on the edge, and circles
/// may interpenetrate by up to this amount without counting as overlapping.
/// `equal_vector` is the matching threshold for direction/offset vectors.
///
/// The default mirrors the global tolerance of common CAD hosts
/// (`1e-10` / `1e-12`).
///
/// # Example
///
/// ```
/// use plantfill::tolerance::Tolerance;
/// use plantfill::Point2;
///
/// let tol: Tolerance<f64> = Tolerance::default().with_equal_point(1e-3);
/// assert!(tol.points_equal(Point2::new(0.0, 0.0), Point2::new(0.0005, 0.0)));
/// assert!(!tol.points_equal(Point2::new(0.0, 0.0), Point2::new(0.01, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tolerance<F> {
    /// Point-equality distance.
    pub equal_point: F,
    /// Vector-equality threshold.
    pub equal_vector: F,
}

impl<F: Float> Tolerance<F> {
    /// Creates a tolerance from explicit thresholds.
    #[inline]
    pub fn new(equal_point: F, equal_vector: F) -> Self {
        Self {
            equal_point,
            equal_vector,
        }
    }

    /// Sets the point-equality distance.
    pub fn with_equal_point(mut self, equal_point: F) -> Self {
        self.equal_point = equal_point;
        self
    }

    /// Sets the vector-equality threshold.
    pub fn with_equal_vector(mut self, equal_vector: F) -> Self {
        self.equal_vector = equal_vector;
        self
    }

    /// Returns `true` if `a` and `b` are within `equal_point` of each other.
    #[inline]
    pub fn points_equal(&self, a: Point2<F>, b: Point2<F>) -> bool {
        a.distance_squared(b) <= self.equal_point * self.equal_point
    }

    /// Returns `true` if `a - b` is shorter than `equal_vector`.
    #[inline]
    pub fn vectors_equal(&self, a: Vec2<F>, b: Vec2<F>) -> bool {
        (a - b).magnitude_squared() <= self.equal_vector * self.equal_vector
    }
}

impl<F: Float> Default for Tolerance<F> {
    fn default() -> Self {
        Self {
            equal_point: F::from(1e-10).unwrap(),
            equal_vector: F::from(1e-12).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let tol: Tolerance<f64> = Tolerance::default();
        assert_eq!(tol.equal_point, 1e-10);
        assert_eq!(tol.equal_vector, 1e-12);
    }

    #[test]
    fn test_points_equal_boundary() {
        let tol: Tolerance<f64> = Tolerance::new(0.5, 1e-12);
        let a = Point2::new(0.0, 0.0);
        assert!(tol.points_equal(a, Point2::new(0.5, 0.0)));
        assert!(!tol.points_equal(a, Point2::new(0.5001, 0.0)));
    }

    #[test]
    fn test_vectors_equal() {
        let tol: Tolerance<f64> = Tolerance::default().with_equal_vector(1e-6);
        assert!(tol.vectors_equal(Vec2::new(1.0, 0.0), Vec2::new(1.0, 1e-7)));
        assert!(!tol.vectors_equal(Vec2::new(1.0, 0.0), Vec2::new(1.0, 1e-5)));
    }

    #[test]
    fn test_builders() {
        let tol: Tolerance<f64> = Tolerance::default()
            .with_equal_point(0.01)
            .with_equal_vector(0.001);
        assert_eq!(tol, Tolerance::new(0.01, 0.001));
    }
}
