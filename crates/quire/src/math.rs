//! Componentwise versions of the usual float functions.

use crate::Vector;

pub fn sqrt(v: Vector) -> Vector { v.map(f64::sqrt) }

pub fn ceil(v: Vector) -> Vector { v.map(f64::ceil) }

pub fn floor(v: Vector) -> Vector { v.map(f64::floor) }

/// Rounds half away from zero.
pub fn round(v: Vector) -> Vector { v.map(f64::round) }

pub fn abs(v: Vector) -> Vector { v.map(f64::abs) }

/// -1, 0 or 1 per component. Zero (of either sign) maps to 0 and NaN stays NaN.
pub fn sign(v: Vector) -> Vector {
    v.map(|c| {
        if c.is_nan() {
            c
        } else if c == 0.0 {
            0.0
        } else {
            c.signum()
        }
    })
}

pub fn max(a: Vector, b: Vector) -> Vector {
    Vector { x: a.x.max(b.x), y: a.y.max(b.y), z: a.z.max(b.z) }
}

pub fn min(a: Vector, b: Vector) -> Vector {
    Vector { x: a.x.min(b.x), y: a.y.min(b.y), z: a.z.min(b.z) }
}
