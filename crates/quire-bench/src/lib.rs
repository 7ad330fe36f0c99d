//! Shared helpers for quire benchmarks: seeded RNG, input generators.

use quire::{Quaternion, Vector};
use quire_la::Matrix;

/// Simple xoshiro256** PRNG for reproducible benchmarks (no rand dependency in lib).
pub struct Rng {
    s: [u64; 4],
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // SplitMix64 to expand seed into state
        let mut z = seed;
        let mut s = [0u64; 4];
        for slot in &mut s {
            z = z.wrapping_add(0x9e3779b97f4a7c15);
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
            *slot = z ^ (z >> 31);
        }
        Self { s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.s[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.s[1] << 17;
        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);
        result
    }

    /// Uniform f64 in [-1, 1]
    pub fn f64(&mut self) -> f64 {
        (self.next_u64() as f64) / (u64::MAX as f64) * 2.0 - 1.0
    }
}

pub fn make_rng() -> Rng {
    Rng::new(0xDEAD_BEEF_CAFE_BABE)
}

/// Row-major values for an n x n matrix, diagonally dominant so inverses exist.
pub fn random_square_flat(n: usize) -> Vec<f64> {
    let mut rng = make_rng();
    (0..n * n)
        .map(|k| {
            let r = rng.f64();
            if k / n == k % n { r + n as f64 } else { r }
        })
        .collect()
}

pub fn random_matrix(n: usize) -> Matrix {
    let flat = random_square_flat(n);
    Matrix::from_fn(n, n, |i, j| flat[i * n + j])
}

pub fn random_vectors(n: usize) -> Vec<Vector> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| Vector::new(rng.f64(), rng.f64(), rng.f64()))
        .collect()
}

/// Unit quaternions from random axes and angles.
pub fn random_rotations(n: usize) -> Vec<Quaternion> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| {
            let axis = Vector::new(rng.f64(), rng.f64(), rng.f64() + 2.0);
            Quaternion::from_axis_angle(axis, rng.f64() * core::f64::consts::PI)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_are_deterministic() {
        assert_eq!(random_matrix(4), random_matrix(4));
        assert_eq!(random_vectors(3), random_vectors(3));
    }

    #[test]
    fn bench_matrices_are_invertible() {
        for n in 1..=6 {
            assert!(random_matrix(n).inverse().is_some());
        }
    }

    #[test]
    fn rotations_are_unit() {
        for q in random_rotations(16) {
            assert!((q.length() - 1.0).abs() < 1e-12);
        }
    }
}
