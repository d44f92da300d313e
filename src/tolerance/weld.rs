//! Tolerance-aware point merging.
//!
//! Boundary sampling produces coincident points where consecutive segments
//! meet. These helpers drop or count them.

use super::Tolerance;
use crate::primitives::Point2;
use num_traits::Float;

/// Appends `p` unless it equals the last point of `points` within tolerance.
///
/// Returns `true` if the point was appended.
#[inline]
pub fn push_distinct<F: Float>(
    points: &mut Vec<Point2<F>>,
    p: Point2<F>,
    tol: &Tolerance<F>,
) -> bool {
    match points.last() {
        Some(&last) if tol.points_equal(last, p) => false,
        _ => {
            points.push(p);
            true
        }
    }
}

/// Merges points within tolerance of an earlier point, keeping the first
/// occurrence and the input order.
///
/// O(n²) time.
pub fn weld_vertices_keep_first<F: Float>(
    points: &[Point2<F>],
    tol: &Tolerance<F>,
) -> Vec<Point2<F>> {
    let mut result: Vec<Point2<F>> = Vec::with_capacity(points.len());
    for &p in points {
        if !result.iter().any(|&q| tol.points_equal(p, q)) {
            result.push(p);
        }
    }
    result
}

/// Returns `true` once three points distinct within tolerance are found.
///
/// Agrees with `distinct_count(points, tol) >= 3` but stops early, so a
/// well-formed loop is accepted after a few comparisons.
pub fn has_three_distinct<F: Float>(points: &[Point2<F>], tol: &Tolerance<F>) -> bool {
    let a = match points.first() {
        Some(&a) => a,
        None => return false,
    };
    let mut rest = points.iter().copied();
    let b = match rest.find(|&p| !tol.points_equal(a, p)) {
        Some(b) => b,
        None => return false,
    };
    rest.any(|p| !tol.points_equal(a, p) && !tol.points_equal(b, p))
}

/// Counts the points that are pairwise distinct within tolerance.
pub fn distinct_count<F: Float>(points: &[Point2<F>], tol: &Tolerance<F>) -> usize {
    weld_vertices_keep_first(points, tol).len()
}
