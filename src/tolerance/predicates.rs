//! Tolerance-aware geometric predicates.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Returns `true` if `p` is within `eps` of `segment`.
///
/// This is the "on the boundary" test: polygon containment treats such
/// points as inside.
#[inline]
pub fn point_on_segment<F: Float>(p: Point2<F>, segment: Segment2<F>, eps: F) -> bool {
    segment.distance_squared_to_point(p) <= eps * eps
}
