//! Dynamic linear algebra: Matrix, MatrixBuilder.
//!
//! Rectangular `f64` matrices built from (possibly ragged) rows, with
//! cofactor determinants, adjugate inversion, sub-matrix slicing and a
//! bracketed text rendering. Sized for geometry and graphics work, not
//! large-scale numerics: determinants expand recursively past 3x3.
//!
//! Operations that can fail softly return `Option` (`mul_mat`, `inverse`)
//! or NaN (`determinant`, `trace` of non-square matrices); the `try_*`
//! variants report a [`MatrixError`] instead.

mod error;
mod matrix;
mod builder;
mod iter;
mod format;

pub use error::MatrixError;
pub use matrix::Matrix;
pub use builder::MatrixBuilder;
pub use iter::Iter;
pub use quire::Number;

/// Convert a list of numbers into a matrix row.
pub fn row_of<T: Number>(values: &[T]) -> Vec<f64> {
    values.iter().map(|v| v.to_f64()).collect()
}

/// Matrix from rows, padding short rows with zeros.
pub fn matrix_of(rows: Vec<Vec<f64>>) -> Matrix {
    Matrix::new(rows)
}

/// Matrix of the given width filled value by value through a [`MatrixBuilder`].
pub fn build_matrix(width: usize, f: impl FnOnce(&mut MatrixBuilder)) -> Matrix {
    Matrix::build(width, f)
}

#[doc(hidden)]
pub fn __to_f64(v: impl Number) -> f64 {
    v.to_f64()
}

/// Matrix literal. Rows may have different lengths and mix numeric types.
///
/// ```
/// use quire_la::matrix;
///
/// let m = matrix![[1, 2, 3], [4, 5.5]];
/// assert_eq!(m.width(), 3);
/// assert_eq!(m.get(1, 2), 0.0);
/// ```
#[macro_export]
macro_rules! matrix {
    () => {
        $crate::Matrix::new(::std::vec::Vec::new())
    };
    ($([$($x:expr),* $(,)?]),+ $(,)?) => {
        $crate::Matrix::new(::std::vec![$(::std::vec![$($crate::__to_f64($x)),*]),+])
    };
}
