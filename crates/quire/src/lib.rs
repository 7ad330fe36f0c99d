//! quire: vectors and quaternions for graphics and physics code
//!
//! Plain `f64` value types with the closed-form operations geometry code
//! keeps reaching for: dot/cross products, reflection, projection, Hamilton
//! products, point rotation and Euler / axis-angle conversion.
//!
//! # Design principles
//! - `f64` internally; anything implementing [`Number`] is accepted at the edges
//! - `#[repr(C)]` value types, `Copy`, no hidden state
//! - Operators only where the meaning is unambiguous (`dot` is a method)
//! - Exact `PartialEq`; tolerant comparison through `approx`
//!
//! Dynamic matrices live in `quire-la`.

mod number;
mod vector;
mod quaternion;
pub mod math;

pub use number::Number;
pub use vector::Vector;
pub use quaternion::Quaternion;

// Bytemuck impls for the #[repr(C)] value types
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    // SAFETY: all fields are f64, #[repr(C)], no padding
    unsafe impl bytemuck::Zeroable for Vector {}
    unsafe impl bytemuck::Pod for Vector {}
    unsafe impl bytemuck::Zeroable for Quaternion {}
    unsafe impl bytemuck::Pod for Quaternion {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quaternion_from_euler_vector() {
        let q = Quaternion::from_euler(Vector::ZERO);
        assert_eq!(q, Quaternion::IDENTITY);
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn vectors_cast_to_floats() {
        let vs = [Vector::new(1, 2, 3), Vector::new(4, 5, 6)];
        let flat: &[f64] = bytemuck::cast_slice(&vs);
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let q: Quaternion = bytemuck::cast([0.0_f64, 0.0, 0.0, 1.0]);
        assert_eq!(q, Quaternion::IDENTITY);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let v = Vector::new(1, -2, 0.5);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":-2.0,"z":0.5}"#);
        let back: Vector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);

        let q = Quaternion::from_axis_angle(Vector::UP, 0.25);
        let back: Quaternion = serde_json::from_str(&serde_json::to_string(&q).unwrap()).unwrap();
        assert_eq!(back, q);
    }
}
