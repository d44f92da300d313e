//! 2D ellipse type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D ellipse defined by center, semi-axes, and rotation.
///
/// Drawing hosts usually describe ellipses by a major-axis vector and a
/// minor/major ratio; [`Ellipse2::from_major_axis`] accepts that form.
///
/// # Example
///
/// ```
/// use plantfill::primitives::{Ellipse2, Point2};
///
/// let ellipse: Ellipse2<f64> = Ellipse2::axis_aligned(Point2::origin(), 2.0, 1.0);
/// let p = ellipse.point_at(0.0);
/// assert!((p.x - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse2<F> {
    /// Center point of the ellipse
    pub center: Point2<F>,
    /// Semi-major axis length
    pub semi_major: F,
    /// Semi-minor axis length
    pub semi_minor: F,
    /// Rotation angle in radians (major axis direction from x-axis)
    pub rotation: F,
}

impl<F: Float> Ellipse2<F> {
    /// Creates a new ellipse with the given parameters.
    #[inline]
    pub fn new(center: Point2<F>, semi_major: F, semi_minor: F, rotation: F) -> Self {
        Self {
            center,
            semi_major,
            semi_minor,
            rotation,
        }
    }

    /// Creates an axis-aligned ellipse (no rotation).
    #[inline]
    pub fn axis_aligned(center: Point2<F>, semi_major: F, semi_minor: F) -> Self {
        Self::new(center, semi_major, semi_minor, F::zero())
    }

    /// Creates an ellipse from its major-axis vector and minor/major ratio.
    pub fn from_major_axis(center: Point2<F>, major_axis: Vec2<F>, radius_ratio: F) -> Self {
        let semi_major = major_axis.magnitude();
        Self {
            center,
            semi_major,
            semi_minor: semi_major * radius_ratio,
            rotation: major_axis.angle(),
        }
    }

    /// Returns the point on the ellipse boundary at parameter t.
    ///
    /// The parameter is the eccentric angle:
    /// - t = 0: center + semi_major along the major axis
    /// - t = π/2: center + semi_minor along the minor axis
    pub fn point_at(&self, t: F) -> Point2<F> {
        let lx = self.semi_major * t.cos();
        let ly = self.semi_minor * t.sin();
        let cos_r = self.rotation.cos();
        let sin_r = self.rotation.sin();
        Point2::new(
            self.center.x + lx * cos_r - ly * sin_r,
            self.center.y + lx * sin_r + ly * cos_r,
        )
    }
}
