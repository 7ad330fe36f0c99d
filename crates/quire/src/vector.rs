use crate::Number;
use approx::{AbsDiffEq, RelativeEq};
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

/// Three-component `f64` vector.
///
/// Components are public and may be assigned directly. Operations that
/// derive a new vector (normalization, rescaling, rotation) never touch
/// `self`; they return a fresh value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const LEFT: Self = Self { x: -1.0, y: 0.0, z: 0.0 };
    pub const UP: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const DOWN: Self = Self { x: 0.0, y: -1.0, z: 0.0 };
    pub const FORWARD: Self = Self { x: 0.0, y: 0.0, z: 1.0 };
    pub const BACK: Self = Self { x: 0.0, y: 0.0, z: -1.0 };
    pub const INFINITY: Self = Self::splat(f64::INFINITY);

    #[inline]
    pub fn new(x: impl Number, y: impl Number, z: impl Number) -> Self {
        Self { x: x.to_f64(), y: y.to_f64(), z: z.to_f64() }
    }

    #[inline]
    pub const fn splat(v: f64) -> Self { Self { x: v, y: v, z: v } }

    #[inline]
    pub fn length_sq(self) -> f64 { self.dot(self) }

    #[inline]
    pub fn length(self) -> f64 { self.length_sq().sqrt() }

    /// Same direction, unit length. A zero vector yields NaN components.
    #[inline]
    pub fn normal(self) -> Self { self / self.length() }

    /// Rescale all three components so the result has the given length.
    ///
    /// A zero vector has no direction to keep, so the result is NaN.
    pub fn with_length(self, length: impl Number) -> Self {
        self * (length.to_f64() / self.length())
    }

    #[inline]
    pub fn scale(self, s: impl Number) -> Self { self * s.to_f64() }

    #[inline]
    pub fn div_by(self, s: impl Number) -> Self { self / s.to_f64() }

    #[inline]
    pub fn rem_by(self, s: impl Number) -> Self { self % s.to_f64() }

    #[inline]
    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// Angle between the two vectors in radians.
    ///
    /// The cosine is clamped to `[-1, 1]` before `acos`, so rounding on
    /// (anti)parallel inputs gives 0 or π instead of NaN.
    pub fn angle_to(self, other: Self) -> f64 {
        let cos = self.dot(other) / (self.length() * other.length());
        cos.clamp(-1.0, 1.0).acos()
    }

    /// Bounce off a surface with the given normal: `v - 2(v·n)n`.
    pub fn reflect_from(self, normal: Self) -> Self {
        let n = normal.normal();
        self - n * (2.0 * self.dot(n))
    }

    /// Exact test: the normalized vectors are equal or exactly opposite.
    pub fn is_collinear_to(self, other: Self) -> bool {
        let a = self.normal();
        let b = other.normal();
        a == b || a == -b
    }

    #[inline]
    pub fn distance_to(self, other: Self) -> f64 { (other - self).length() }

    #[inline]
    pub fn direction_to(self, other: Self) -> Self { (other - self).normal() }

    /// Projection onto the axis spanned by `axis`.
    pub fn project_on(self, axis: Self) -> Self {
        axis * self.dot(axis) / axis.length_sq()
    }

    /// Rotate in the XY plane by `angle` radians. `z` is carried over unchanged.
    pub fn rotated_by(self, angle: impl Number) -> Self {
        let (sin, cos) = angle.to_f64().sin_cos();
        Self {
            x: cos * self.x - sin * self.y,
            y: sin * self.x + cos * self.y,
            z: self.z,
        }
    }

    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self { x: f(self.x), y: f(self.y), z: f(self.z) }
    }

    /// Compare by length. `None` when either length is NaN.
    pub fn cmp_length(self, other: Self) -> Option<Ordering> {
        self.length().partial_cmp(&other.length())
    }

    #[inline]
    pub fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Vector {
    fn from(a: [f64; 3]) -> Self { Self { x: a[0], y: a[1], z: a[2] } }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> Self { [v.x, v.y, v.z] }
}

impl Add for Vector {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl Sub for Vector {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl Neg for Vector {
    type Output = Self;
    #[inline] fn neg(self) -> Self { self.map(|c| -c) }
}

impl Mul<f64> for Vector {
    type Output = Self;
    #[inline] fn mul(self, rhs: f64) -> Self { self.map(|c| c * rhs) }
}

// component ÷ scalar
impl Div<f64> for Vector {
    type Output = Self;
    #[inline] fn div(self, rhs: f64) -> Self { self.map(|c| c / rhs) }
}

// component mod scalar
impl Rem<f64> for Vector {
    type Output = Self;
    #[inline] fn rem(self, rhs: f64) -> Self { self.map(|c| c % rhs) }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    #[inline] fn mul(self, rhs: Vector) -> Vector { rhs * self }
}

impl AddAssign for Vector {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl SubAssign for Vector {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl MulAssign<f64> for Vector {
    #[inline] fn mul_assign(&mut self, rhs: f64) { *self = *self * rhs; }
}

impl DivAssign<f64> for Vector {
    #[inline] fn div_assign(&mut self, rhs: f64) { *self = *self / rhs; }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 { f64::EPSILON }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 { f64::EPSILON }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl core::fmt::Display for Vector {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn mixed_numeric_constructor() {
        let v = Vector::new(1, 2.5_f32, 3_u8);
        assert_eq!(v, Vector { x: 1.0, y: 2.5, z: 3.0 });
    }

    #[test]
    fn dot_and_cross() {
        let a = Vector::new(1, 2, 3);
        let b = Vector::new(4, 5, 6);
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vector::RIGHT.cross(Vector::UP), Vector::FORWARD);
        assert_eq!(Vector::UP.cross(Vector::RIGHT), Vector::BACK);
    }

    #[test]
    fn scalar_ops_divide_components() {
        let v = Vector::new(10, 20, 30);
        assert_eq!(v / 10.0, Vector::new(1, 2, 3));
        assert_eq!(v % 7.0, Vector::new(3, 6, 2));
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!(v.scale(2), v * 2.0);
        assert_eq!(v.div_by(10_u16), v / 10.0);
        assert_eq!(v.rem_by(7), v % 7.0);
    }

    #[test]
    fn with_length_rescales() {
        let v = Vector::new(3, 0, 4);
        let w = v.with_length(10);
        assert!((w.length() - 10.0).abs() < 1e-12);
        assert_eq!(w, Vector::new(6, 0, 8));
        // input untouched
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn with_length_of_zero_is_nan() {
        let w = Vector::ZERO.with_length(1);
        assert!(w.x.is_nan() && w.y.is_nan() && w.z.is_nan());
    }

    #[test]
    fn angle_between_axes() {
        assert!((Vector::RIGHT.angle_to(Vector::UP) - FRAC_PI_2).abs() < 1e-12);
        assert!((Vector::RIGHT.angle_to(Vector::LEFT) - PI).abs() < 1e-12);
        let v = Vector::new(0.1, 0.2, 0.3);
        assert!(v.angle_to(v * 3.0) < 1e-7);
    }

    #[test]
    fn reflect_off_floor() {
        let v = Vector::new(1, -1, 0);
        assert_eq!(v.reflect_from(Vector::UP), Vector::new(1, 1, 0));
    }

    #[test]
    fn collinearity() {
        let a = Vector::new(1, 2, 2);
        assert!(a.is_collinear_to(a * 3.0));
        assert!(a.is_collinear_to(-a));
        assert!(!a.is_collinear_to(Vector::new(1, 2, 3)));
    }

    #[test]
    fn distance_direction_projection() {
        let a = Vector::new(1, 1, 1);
        let b = Vector::new(1, 4, 5);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(a.direction_to(b), Vector::new(0.0, 0.6, 0.8));
        assert_eq!(Vector::new(3, 4, 5).project_on(Vector::new(0, 2, 0)), Vector::new(0, 4, 0));
    }

    #[test]
    fn rotation_keeps_z() {
        let v = Vector::new(1, 0, 7).rotated_by(FRAC_PI_2);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 1.0).abs() < 1e-12);
        assert_eq!(v.z, 7.0);
    }

    #[test]
    fn ordering_by_length() {
        assert_eq!(Vector::ONE.cmp_length(Vector::RIGHT), Some(Ordering::Greater));
        assert_eq!(Vector::UP.cmp_length(Vector::BACK), Some(Ordering::Equal));
        assert_eq!(Vector::splat(f64::NAN).cmp_length(Vector::ONE), None);
    }

    #[test]
    fn compound_assignment() {
        let mut v = Vector::ONE;
        v += Vector::UP;
        v *= 2.0;
        v -= Vector::RIGHT;
        v /= 2.0;
        assert_eq!(v, Vector::new(0.5, 2.0, 1.0));
    }

    #[test]
    fn display() {
        assert_eq!(Vector::new(1, -2, 0.5).to_string(), "(1.0, -2.0, 0.5)");
    }

    #[test]
    fn approx_comparison() {
        let a = Vector::new(0.1 + 0.2, 1, 1);
        let b = Vector::new(0.3, 1, 1);
        assert_ne!(a, b);
        approx::assert_relative_eq!(a, b);
    }
}
