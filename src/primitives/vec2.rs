//! 2D offset vector.

use num_traits::Float;
use std::ops::Sub;

/// A 2D displacement, the difference of two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Perpendicular dot product. Positive when `other` turns counter-clockwise.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Direction angle in radians, counter-clockwise from +x.
    #[inline]
    pub fn angle(self) -> F {
        self.y.atan2(self.x)
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_cross_sign_follows_turn() {
        let east: Vec2<f64> = Vec2::new(2.0, 0.0);
        let north = Vec2::new(0.0, 3.0);
        assert_eq!(east.cross(north), 6.0);
        assert_eq!(north.cross(east), -6.0);
        assert_eq!(east.dot(north), 0.0);
    }

    #[test]
    fn test_magnitude_and_angle() {
        let v: Vec2<f64> = Vec2::new(1.0, 1.0);
        assert_eq!(v.magnitude_squared(), 2.0);
        assert_relative_eq!(v.magnitude(), 2.0_f64.sqrt(), epsilon = 1e-15);
        assert_relative_eq!(v.angle(), FRAC_PI_4, epsilon = 1e-15);
    }

    #[test]
    fn test_difference() {
        let d = Vec2::new(3.0_f64, 1.0) - Vec2::new(1.0, 1.0);
        assert_eq!(d, Vec2::new(2.0, 0.0));
    }
}
