//! Circle type, used both for circle boundaries and for plant footprints.

use super::Point2;
use num_traits::Float;

/// A circle given by center and radius.
///
/// # Example
///
/// ```
/// use plantfill::primitives::{Circle2, Point2};
///
/// let bed: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 5.0);
/// let ring = bed.to_polygon(64);
/// assert_eq!(ring.len(), 64);
/// assert_eq!(ring[0], Point2::new(5.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2<F> {
    pub center: Point2<F>,
    pub radius: F,
}

impl<F: Float> Circle2<F> {
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn area(&self) -> F {
        F::from(std::f64::consts::PI).unwrap() * self.radius * self.radius
    }

    /// Point on the circle at `angle` radians, counter-clockwise from +x.
    #[inline]
    pub fn point_at(&self, angle: F) -> Point2<F> {
        self.center.polar_offset(self.radius, angle)
    }

    /// Samples `samples` equally spaced points starting at angle 0.
    ///
    /// At least 3 points are returned. The first point is not repeated.
    pub fn to_polygon(&self, samples: usize) -> Vec<Point2<F>> {
        let n = samples.max(3);
        let step = F::from(std::f64::consts::TAU).unwrap() / F::from(n).unwrap();
        (0..n)
            .map(|i| self.point_at(step * F::from(i).unwrap()))
            .collect()
    }
}
