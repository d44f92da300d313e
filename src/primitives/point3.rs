//! 3D point type.
//!
//! Only used as an input format: spatial polylines arrive with elevations
//! that the planar pipeline discards.

use super::Point2;
use num_traits::Float;

/// A 3D point with x, y, and z coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Point3<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Projects onto the XY plane by dropping `z`.
    #[inline]
    pub fn to_xy(self) -> Point2<F> {
        Point2::new(self.x, self.y)
    }
}

impl<F: Float> From<Point2<F>> for Point3<F> {
    fn from(p: Point2<F>) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: F::zero(),
        }
    }
}
