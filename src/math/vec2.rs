use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Planar vector used for box sizes and region corners.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Creates a new Vec2.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector from polar coordinates (angle in radians).
    pub fn polar(theta: f64, magnitude: f64) -> Self {
        Self::new(theta.cos() * magnitude, theta.sin() * magnitude)
    }

    /// Calculates the dot product of two vectors.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Calculates the squared magnitude (length) of the vector.
    /// Useful for comparisons as it avoids a square root.
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Calculates the magnitude (length) of the vector.
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns a normalized version of the vector (unit vector).
    /// If the magnitude is zero, it returns a zero vector.
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            Self::ZERO
        } else {
            self * (1.0 / mag)
        }
    }

    /// Area of the rectangle spanned by the components.
    pub fn area(self) -> f64 {
        self.x * self.y
    }

    /// Angle in radians between this vector and `other`.
    /// NaN when either vector has zero length.
    pub fn angle(self, other: Self) -> f64 {
        (self.dot(other) / (self.magnitude() * other.magnitude())).acos()
    }

    /// Projects this vector onto `onto`.
    pub fn project(self, onto: Self) -> Self {
        onto * (self.dot(onto) / onto.magnitude_squared())
    }

    /// Applies `f` to every component.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y))
    }

    /// Combines the components of two vectors pairwise with `f`.
    pub fn mix(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(f(self.x, other.x), f(self.y, other.y))
    }

    /// Orders two vectors by length. Components are never compared directly.
    pub fn cmp_magnitude(self, other: Self) -> Option<Ordering> {
        self.magnitude_squared().partial_cmp(&other.magnitude_squared())
    }

    pub fn is_longer_than(self, other: Self) -> bool {
        self.magnitude_squared() > other.magnitude_squared()
    }

    pub fn is_shorter_than(self, other: Self) -> bool {
        self.magnitude_squared() < other.magnitude_squared()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

// Vec2 * f64
impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

// f64 * Vec2
impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        vec * self
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_vec2_arithmetic() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vec2::new(2.0, 2.0));
        assert_eq!(v1 * 3.0, Vec2::new(3.0, 6.0));
        assert_eq!(3.0 * v1, Vec2::new(3.0, 6.0));
        assert_eq!(v2 / 2.0, Vec2::new(1.5, 2.0));
        assert_eq!(-v1, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn test_vec2_dot_and_magnitude() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.dot(Vec2::new(1.0, 2.0)) - 11.0).abs() < EPSILON);
        assert!((v.magnitude_squared() - 25.0).abs() < EPSILON);
        assert!((v.magnitude() - 5.0).abs() < EPSILON);
        assert!((v.area() - 12.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_normalize() {
        let norm = Vec2::new(3.0, 4.0).normalize();
        assert!((norm.magnitude() - 1.0).abs() < EPSILON);
        assert!((norm.x - 0.6).abs() < EPSILON);
        assert!((norm.y - 0.8).abs() < EPSILON);

        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_vec2_project() {
        let v = Vec2::new(2.0, 3.0);
        let p = v.project(Vec2::new(5.0, 0.0));
        assert!((p.x - 2.0).abs() < EPSILON);
        assert!(p.y.abs() < EPSILON);
    }

    #[test]
    fn test_vec2_angle_and_polar() {
        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 2.0);
        assert!((a.angle(b) - PI / 2.0).abs() < EPSILON);

        let p = Vec2::polar(PI / 2.0, 2.0);
        assert!(p.x.abs() < EPSILON);
        assert!((p.y - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_map_and_mix() {
        let v = Vec2::new(-1.5, 2.5);
        assert_eq!(v.map(f64::abs), Vec2::new(1.5, 2.5));
        assert_eq!(v.mix(Vec2::new(0.0, 3.0), f64::max), Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_vec2_magnitude_ordering_ignores_components() {
        // (0, 5) has smaller components in x but is longer than (4, 0)
        let long = Vec2::new(0.0, 5.0);
        let short = Vec2::new(4.0, 0.0);
        assert!(long.is_longer_than(short));
        assert!(short.is_shorter_than(long));
        assert_eq!(long.cmp_magnitude(short), Some(Ordering::Greater));
        assert_eq!(
            Vec2::new(3.0, 4.0).cmp_magnitude(Vec2::new(-5.0, 0.0)),
            Some(Ordering::Equal)
        );
    }
}
