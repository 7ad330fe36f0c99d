use crate::{Number, Vector};
use approx::{AbsDiffEq, RelativeEq};
use core::cmp::Ordering;
use core::f64::consts::FRAC_PI_2;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Quaternion `xi + yj + zk + w`.
///
/// Represents a rotation when unit-length. Equality is exact per component;
/// use [`Quaternion::same_rotation`] or the `approx` traits for tolerant
/// comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0, z: 1.0, w: 1.0 };
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };
    pub const INFINITY: Self = Self {
        x: f64::INFINITY,
        y: f64::INFINITY,
        z: f64::INFINITY,
        w: f64::INFINITY,
    };

    #[inline]
    pub fn new(x: impl Number, y: impl Number, z: impl Number, w: impl Number) -> Self {
        Self { x: x.to_f64(), y: y.to_f64(), z: z.to_f64(), w: w.to_f64() }
    }

    /// Rotation from Euler angles in radians: `x` roll, `y` pitch, `z` yaw,
    /// applied in Z-Y-X order. Inverse of [`Quaternion::euler`] away from
    /// the poles.
    pub fn from_euler(euler: Vector) -> Self {
        let (sr, cr) = (euler.x * 0.5).sin_cos();
        let (sp, cp) = (euler.y * 0.5).sin_cos();
        let (sy, cy) = (euler.z * 0.5).sin_cos();
        Self {
            x: sr * cp * cy - cr * sp * sy,
            y: cr * sp * cy + sr * cp * sy,
            z: cr * cp * sy - sr * sp * cy,
            w: cr * cp * cy + sr * sp * sy,
        }
    }

    /// Rotation of `angle` radians about `axis`. The axis is normalized here.
    pub fn from_axis_angle(axis: Vector, angle: impl Number) -> Self {
        let (s, c) = (angle.to_f64() * 0.5).sin_cos();
        let n = axis.normal();
        Self { x: n.x * s, y: n.y * s, z: n.z * s, w: c }
    }

    #[inline]
    pub fn length_sq(&self) -> f64 { self.dot(self) }

    #[inline]
    pub fn length(&self) -> f64 { self.length_sq().sqrt() }

    #[inline]
    pub fn normal(&self) -> Self { *self / self.length() }

    /// Rescale all four components to the given length.
    pub fn with_length(&self, length: impl Number) -> Self {
        *self * (length.to_f64() / self.length())
    }

    #[inline]
    pub fn scale(&self, s: impl Number) -> Self { *self * s.to_f64() }

    #[inline]
    pub fn div_by(&self, s: impl Number) -> Self { *self / s.to_f64() }

    #[inline]
    pub fn rem_by(&self, s: impl Number) -> Self { *self % s.to_f64() }

    /// Conjugate (inverse for unit quaternions)
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self { x: -self.x, y: -self.y, z: -self.z, w: self.w }
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Angle between two rotations in radians.
    pub fn angle_to(&self, other: &Self) -> f64 {
        let dot = self.dot(other);
        if dot > 1.0 {
            return 0.0;
        }
        dot.abs().min(1.0).acos() * 2.0
    }

    /// Whether both quaternions describe the same rotation, up to sign and
    /// scale, within `epsilon` on the cosine of the half angle between them.
    pub fn same_rotation(&self, other: &Self, epsilon: f64) -> bool {
        self.normal().dot(&other.normal()).abs() >= 1.0 - epsilon
    }

    /// Roll (x), pitch (y) and yaw (z) in radians.
    ///
    /// Pitch is clamped to ±π/2 once its sine reaches ±1 (gimbal lock). Near
    /// the poles roll and yaw are no longer independent, so converting back
    /// with [`Quaternion::from_euler`] need not reproduce the input angles.
    pub fn euler(&self) -> Vector {
        let Self { x, y, z, w } = *self;
        let sinr_cosp = 2.0 * (w * x + y * z);
        let cosr_cosp = 1.0 - 2.0 * (x * x + y * y);
        let sinp = 2.0 * (w * y - z * x);
        let siny_cosp = 2.0 * (w * z + x * y);
        let cosy_cosp = 1.0 - 2.0 * (y * y + z * z);
        let pitch = if sinp.abs() >= 1.0 { FRAC_PI_2.copysign(sinp) } else { sinp.asin() };
        Vector {
            x: sinr_cosp.atan2(cosr_cosp),
            y: pitch,
            z: siny_cosp.atan2(cosy_cosp),
        }
    }

    /// Rotate a point by this quaternion.
    ///
    /// Expands `q * p * q⁻¹` into the rotation matrix terms directly; assumes
    /// a unit quaternion.
    pub fn rotate(&self, point: Vector) -> Vector {
        let (x2, y2, z2) = (self.x * 2.0, self.y * 2.0, self.z * 2.0);
        let xx = self.x * x2;
        let yy = self.y * y2;
        let zz = self.z * z2;
        let xy = self.x * y2;
        let xz = self.x * z2;
        let yz = self.y * z2;
        let wx = self.w * x2;
        let wy = self.w * y2;
        let wz = self.w * z2;
        Vector {
            x: (1.0 - (yy + zz)) * point.x + (xy - wz) * point.y + (xz + wy) * point.z,
            y: (xy + wz) * point.x + (1.0 - (xx + zz)) * point.y + (yz - wx) * point.z,
            z: (xz - wy) * point.x + (yz + wx) * point.y + (1.0 - (xx + yy)) * point.z,
        }
    }

    /// Compare by length. `None` when either length is NaN.
    pub fn cmp_length(&self, other: &Self) -> Option<Ordering> {
        self.length().partial_cmp(&other.length())
    }

    #[inline]
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self { x: f(self.x), y: f(self.y), z: f(self.z), w: f(self.w) }
    }
}

impl Add for Quaternion {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z, w: self.w + rhs.w }
    }
}

impl Sub for Quaternion {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z, w: self.w - rhs.w }
    }
}

impl Neg for Quaternion {
    type Output = Self;
    #[inline] fn neg(self) -> Self { self.map(|c| -c) }
}

impl Mul<f64> for Quaternion {
    type Output = Self;
    #[inline] fn mul(self, rhs: f64) -> Self { self.map(|c| c * rhs) }
}

impl Div<f64> for Quaternion {
    type Output = Self;
    #[inline] fn div(self, rhs: f64) -> Self { self.map(|c| c / rhs) }
}

impl Rem<f64> for Quaternion {
    type Output = Self;
    #[inline] fn rem(self, rhs: f64) -> Self { self.map(|c| c % rhs) }
}

impl Mul<Quaternion> for f64 {
    type Output = Quaternion;
    #[inline] fn mul(self, rhs: Quaternion) -> Quaternion { rhs * self }
}

/// Hamilton product. `a * b` applies `b` first, then `a`.
impl Mul for Quaternion {
    type Output = Self;
    fn mul(self, o: Self) -> Self {
        Self {
            x: self.w * o.x + self.x * o.w + self.y * o.z - self.z * o.y,
            y: self.w * o.y + self.y * o.w + self.z * o.x - self.x * o.z,
            z: self.w * o.z + self.z * o.w + self.x * o.y - self.y * o.x,
            w: self.w * o.w - self.x * o.x - self.y * o.y - self.z * o.z,
        }
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 { f64::EPSILON }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f64 { f64::EPSILON }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}

impl core::fmt::Display for Quaternion {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({:?}, {:?}, {:?}, {:?})", self.x, self.y, self.z, self.w)
    }
}
