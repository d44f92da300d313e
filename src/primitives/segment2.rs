//! Polygon edge type.

use super::Point2;
use num_traits::Float;

/// A straight edge between two points.
///
/// Boundary distance in [`crate::polygon`] is the minimum over edges of
/// [`Segment2::distance_squared_to_point`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }

    /// Point at parameter `t`, `0` at `start` and `1` at `end`.
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Parameter in `[0, 1]` of the edge point nearest to `p`.
    ///
    /// A zero-length edge projects everything onto `start`.
    pub fn project(self, p: Point2<F>) -> F {
        let edge = self.end - self.start;
        let len_sq = edge.magnitude_squared();
        if len_sq == F::zero() {
            return F::zero();
        }
        ((p - self.start).dot(edge) / len_sq).max(F::zero()).min(F::one())
    }

    /// Squared distance from `p` to the nearest point of the edge.
    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        p.distance_squared(self.point_at(self.project(p)))
    }
}
