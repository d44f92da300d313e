//! Core polygon type and the predicates the packer relies on.

use crate::primitives::{Point2, Segment2};
use crate::tolerance::{distinct_count, has_three_distinct, point_on_segment, Tolerance};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed boundary loop represented as a sequence of vertices.
///
/// Extracted boundaries repeat the first vertex at the end; hand-built
/// polygons may omit it. Every query wraps the last vertex back to the
/// first, so both forms describe the same loop. Winding order is not
/// significant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon<F> {
    /// The vertices of the loop.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of listed vertices, closing vertex included.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the first listed vertex.
    #[inline]
    pub fn first(&self) -> Option<Point2<F>> {
        self.vertices.first().copied()
    }

    /// Returns the edges of the loop, including the wrap from last to first.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Counts vertices that are distinct within tolerance.
    pub fn distinct_vertex_count(&self, tol: &Tolerance<F>) -> usize {
        distinct_count(&self.vertices, tol)
    }

    /// Returns `true` if the loop has fewer than 3 distinct vertices.
    pub fn is_degenerate(&self, tol: &Tolerance<F>) -> bool {
        !has_three_distinct(&self.vertices, tol)
    }

    /// Returns `true` if the last vertex repeats the first within tolerance.
    pub fn is_closed(&self, tol: &Tolerance<F>) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(&a), Some(&b)) if self.vertices.len() > 1 => tol.points_equal(a, b),
            _ => false,
        }
    }

    /// Returns the signed area using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the vertex-average centroid. See [`polygon_centroid`].
    pub fn centroid(&self) -> Option<Point2<F>> {
        polygon_centroid(&self.vertices)
    }

    /// Tests if a point is inside or on the boundary. See [`polygon_contains`].
    pub fn contains(&self, point: Point2<F>, tol: &Tolerance<F>) -> bool {
        polygon_contains(&self.vertices, point, tol)
    }

    /// Signed distance to the boundary. See [`polygon_signed_distance`].
    pub fn signed_distance(&self, point: Point2<F>, tol: &Tolerance<F>) -> F {
        polygon_signed_distance(&self.vertices, point, tol)
    }

    /// Returns the bounding box as (min, max) points.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;

        for v in &self.vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }

        Some((min, max))
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polygon<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self::new(vertices)
    }
}

/// Computes the signed area of a vertex loop using the shoelace formula.
///
/// A repeated closing vertex contributes a zero term.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let n = vertices.len();
    let twice_area = (0..n).fold(F::zero(), |acc, i| {
        let j = (i + 1) % n;
        acc + vertices[i].to_vec().cross(vertices[j].to_vec())
    });

    twice_area / (F::one() + F::one())
}

/// Computes the arithmetic mean of all listed vertices.
///
/// This is not the area centroid: a repeated closing vertex counts twice
/// and densely sampled stretches pull the result toward themselves.
///
/// Returns `None` only for an empty vertex list.
pub fn polygon_centroid<F: Float>(vertices: &[Point2<F>]) -> Option<Point2<F>> {
    if vertices.is_empty() {
        return None;
    }

    let (sx, sy) = vertices
        .iter()
        .fold((F::zero(), F::zero()), |(sx, sy), v| (sx + v.x, sy + v.y));
    let n = F::from(vertices.len()).unwrap();

    Some(Point2::new(sx / n, sy / n))
}

/// Tests if a point is inside a polygon using ray casting.
///
/// A point within `tol.equal_point` of any vertex or edge counts as
/// contained. Loops with fewer than 3 distinct vertices contain nothing.
pub fn polygon_contains<F: Float>(
    vertices: &[Point2<F>],
    point: Point2<F>,
    tol: &Tolerance<F>,
) -> bool {
    if !has_three_distinct(vertices, tol) {
        return false;
    }

    let n = vertices.len();

    // Boundary points are inside.
    for i in 0..n {
        let edge = Segment2::new(vertices[i], vertices[(i + 1) % n]);
        if point_on_segment(point, edge, tol.equal_point) {
            return true;
        }
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Returns the distance from `point` to the nearest edge, negated when the
/// point is contained (see [`polygon_contains`]).
///
/// Loops with fewer than 3 distinct vertices return `+inf`: there is no boundary to
/// measure against, and callers must not read clearance from it.
pub fn polygon_signed_distance<F: Float>(
    vertices: &[Point2<F>],
    point: Point2<F>,
    tol: &Tolerance<F>,
) -> F {
    if !has_three_distinct(vertices, tol) {
        return F::infinity();
    }

    let n = vertices.len();
    let min_dist_sq = (0..n)
        .map(|i| {
            Segment2::new(vertices[i], vertices[(i + 1) % n]).distance_squared_to_point(point)
        })
        .fold(F::infinity(), F::min);
    let dist = min_dist_sq.sqrt();

    if polygon_contains(vertices, point, tol) {
        -dist
    } else {
        dist
    }
}
