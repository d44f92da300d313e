//! Placed circles and the ordered layout that holds them.

use crate::polygon::Polygon;
use crate::primitives::{Circle2, Point2};
use crate::tolerance::Tolerance;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A placed plant: a circle that never moves once placed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlantCircle<F> {
    pub center: Point2<F>,
    pub radius: F,
}

impl<F: Float> PlantCircle<F> {
    /// Creates a placed circle.
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Returns `true` if the circles interpenetrate by more than
    /// `tol.equal_point`. Near-tangency is not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self, tol: &Tolerance<F>) -> bool {
        self.center.distance(other.center) < self.radius + other.radius - tol.equal_point
    }

    /// Returns `true` if the circle reaches past the polygon boundary by
    /// more than `tol.equal_point`.
    pub fn escapes(&self, polygon: &Polygon<F>, tol: &Tolerance<F>) -> bool {
        let clearance = -polygon.signed_distance(self.center, tol);
        clearance < self.radius - tol.equal_point
    }

    /// Returns the area of the circle.
    #[inline]
    pub fn area(&self) -> F {
        Circle2::from(*self).area()
    }
}

impl<F: Float> From<PlantCircle<F>> for Circle2<F> {
    fn from(c: PlantCircle<F>) -> Self {
        Circle2::new(c.center, c.radius)
    }
}

/// Circles in placement order: the seed first, then growth order.
///
/// An empty layout is a valid outcome meaning nothing fit.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackedLayout<F> {
    circles: Vec<PlantCircle<F>>,
}

impl<F: Float> PackedLayout<F> {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self {
            circles: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, circle: PlantCircle<F>) {
        self.circles.push(circle);
    }

    /// Returns the circles in placement order.
    #[inline]
    pub fn circles(&self) -> &[PlantCircle<F>] {
        &self.circles
    }

    /// Returns the number of placed circles.
    #[inline]
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    /// Returns `true` if nothing was placed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Iterates over circles in placement order.
    pub fn iter(&self) -> std::slice::Iter<'_, PlantCircle<F>> {
        self.circles.iter()
    }

    /// Returns the seed circle, if any.
    #[inline]
    pub fn seed(&self) -> Option<&PlantCircle<F>> {
        self.circles.first()
    }

    /// Sum of circle areas.
    pub fn covered_area(&self) -> F {
        self.circles.iter().fold(F::zero(), |acc, c| acc + c.area())
    }

    /// Fraction of the polygon's area covered by circles.
    ///
    /// Returns zero for polygons with no area.
    pub fn coverage(&self, polygon: &Polygon<F>) -> F {
        let area = polygon.area();
        if area <= F::epsilon() {
            return F::zero();
        }
        self.covered_area() / area
    }

    /// Counts circles per radius, radii equal within `tol.equal_point`
    /// grouped together, in first-seen order.
    pub fn count_by_radius(&self, tol: &Tolerance<F>) -> Vec<(F, usize)> {
        let mut counts: Vec<(F, usize)> = Vec::new();
        for c in &self.circles {
            match counts
                .iter_mut()
                .find(|(r, _)| (*r - c.radius).abs() <= tol.equal_point)
            {
                Some((_, n)) => *n += 1,
                None => counts.push((c.radius, 1)),
            }
        }
        counts
    }

    /// Returns `true` if any pair of circles overlaps beyond tolerance.
    pub fn overlaps(&self, tol: &Tolerance<F>) -> bool {
        self.circles.iter().enumerate().any(|(i, a)| {
            self.circles[i + 1..]
                .iter()
                .any(|b| a.overlaps(b, tol))
        })
    }

    /// Returns `true` if any circle reaches outside `polygon` beyond tolerance.
    pub fn escapes(&self, polygon: &Polygon<F>, tol: &Tolerance<F>) -> bool {
        self.circles.iter().any(|c| c.escapes(polygon, tol))
    }

    /// Consumes the layout, returning the circles.
    pub fn into_vec(self) -> Vec<PlantCircle<F>> {
        self.circles
    }
}

impl<'a, F> IntoIterator for &'a PackedLayout<F> {
    type Item = &'a PlantCircle<F>;
    type IntoIter = std::slice::Iter<'a, PlantCircle<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.circles.iter()
    }
}

impl<F> FromIterator<PlantCircle<F>> for PackedLayout<F> {
    fn from_iter<I: IntoIterator<Item = PlantCircle<F>>>(iter: I) -> Self {
        Self {
            circles: iter.into_iter().collect(),
        }
    }
}
