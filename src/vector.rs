//! 2D vector value type for rope simulation.

use crate::float::Float;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

/// 2D vector for planar physics.
///
/// Compound assignment operators (`+=`, `-=`, `*=`, `/=`) are the mutating
/// forms; the binary operators and the free functions in this module
/// ([`add`], [`subtract`], [`multiply`], [`divide`]) return new vectors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vector2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vector2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vector2 { x: F::zero(), y: F::zero() } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Length (magnitude). Stays finite for components whose squares would
    /// overflow.
    pub fn length(self) -> F {
        self.x.hypot(self.y)
    }

    /// Normalize in place. A vector of exactly zero length is left untouched.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len > F::zero() {
            *self /= len;
        }
    }

    /// Unit-length copy of this vector, or the zero vector if it has no length.
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    /// Rescale in place to `magnitude`. The zero vector stays zero.
    pub fn set_magnitude(&mut self, magnitude: F) {
        self.normalize();
        *self *= magnitude;
    }

    /// Copy of this vector rescaled to `magnitude`.
    pub fn with_magnitude(self, magnitude: F) -> Self {
        let mut v = self;
        v.set_magnitude(magnitude);
        v
    }

    /// Distance between two points.
    pub fn distance_to(self, other: Self) -> F {
        (self - other).length()
    }

    /// Linear interpolation between self and other.
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self) * t
    }

    /// Both components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Add for Vector2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vector2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vector2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vector2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vector2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vector2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Mul<F> for Vector2<F> {
    type Output = Self;
    fn mul(self, s: F) -> Self { Vector2 { x: self.x * s, y: self.y * s } }
}

impl<F: Float> Div<F> for Vector2<F> {
    type Output = Self;
    fn div(self, s: F) -> Self { Vector2 { x: self.x / s, y: self.y / s } }
}

impl<F: Float> AddAssign for Vector2<F> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<F: Float> SubAssign for Vector2<F> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<F: Float> MulAssign<F> for Vector2<F> {
    fn mul_assign(&mut self, s: F) {
        self.x *= s;
        self.y *= s;
    }
}

impl<F: Float> DivAssign<F> for Vector2<F> {
    fn div_assign(&mut self, s: F) {
        self.x /= s;
        self.y /= s;
    }
}

// --------------------------------------------------------------------------
// Free-function forms
// --------------------------------------------------------------------------

pub fn add<F: Float>(a: Vector2<F>, b: Vector2<F>) -> Vector2<F> {
    a + b
}

pub fn subtract<F: Float>(a: Vector2<F>, b: Vector2<F>) -> Vector2<F> {
    a - b
}

pub fn multiply<F: Float>(v: Vector2<F>, s: F) -> Vector2<F> {
    v * s
}

pub fn divide<F: Float>(v: Vector2<F>, s: F) -> Vector2<F> {
    v / s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_length() {
        let v = Vector2::new(3.0f32, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn huge_vectors_keep_a_finite_length() {
        let v = Vector2::new(3e300f64, 4e300);
        assert!((v.length() / 5e300 - 1.0).abs() < 1e-12);
        let n = v.normalized();
        assert!((n.x - 0.6).abs() < 1e-12);
        assert!((n.y - 0.8).abs() < 1e-12);

        let far = Vector2::new(1e20f32, 0.0);
        assert!(far.distance_to(Vector2::new(-1e20, 0.0)).is_finite());
    }

    #[test]
    fn normalize_zero_vector_is_noop() {
        let mut v = Vector2::<f32>::zero();
        v.normalize();
        assert_eq!(v, Vector2::zero());
        assert_eq!(Vector2::<f64>::zero().normalized(), Vector2::zero());
    }

    #[test]
    fn normalized_leaves_receiver_untouched() {
        let v = Vector2::new(0.0f32, -8.0);
        let n = v.normalized();
        assert_eq!(v, Vector2::new(0.0, -8.0));
        assert!((n.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn set_magnitude_rescales() {
        let mut v = Vector2::new(3.0f32, 4.0);
        v.set_magnitude(10.0);
        assert!((v.x - 6.0).abs() < 1e-5);
        assert!((v.y - 8.0).abs() < 1e-5);

        let mut z = Vector2::<f32>::zero();
        z.set_magnitude(10.0);
        assert_eq!(z, Vector2::zero());
    }

    #[test]
    fn compound_assignment() {
        let mut v = Vector2::new(1.0f32, 2.0);
        v += Vector2::new(1.0, 1.0);
        v -= Vector2::new(0.5, 0.5);
        v *= 2.0;
        v /= 3.0;
        assert!((v.x - 1.0).abs() < 1e-6);
        assert!((v.y - 5.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn free_functions_match_operators() {
        let a = Vector2::new(1.0f32, 2.0);
        let b = Vector2::new(-3.0f32, 0.5);
        assert_eq!(add(a, b), a + b);
        assert_eq!(subtract(a, b), a - b);
        assert_eq!(multiply(a, 4.0), a * 4.0);
        assert_eq!(divide(a, 4.0), a / 4.0);
    }

    #[test]
    fn distance_calculation() {
        let a = Vector2::new(0.0f32, 0.0);
        let b = Vector2::new(3.0f32, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn lerp_midpoint() {
        let a = Vector2::new(0.0f32, 0.0);
        let b = Vector2::new(10.0f32, 10.0);
        let mid = a.lerp(b, 0.5);
        assert!((mid.x - 5.0).abs() < 1e-6);
        assert!((mid.y - 5.0).abs() < 1e-6);
    }
}
