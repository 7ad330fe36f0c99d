//! Error types for quire-la.

use std::fmt;

/// Why a checked matrix operation could not produce a result.
///
/// The unchecked forms (`mul_mat`, `inverse`, `get_opt`) collapse these
/// into `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Cell lookup outside the matrix.
    IndexOutOfBounds { row: usize, col: usize, height: usize, width: usize },
    /// Inner dimensions of a product disagree. Shapes are `(height, width)`.
    ShapeMismatch { left: (usize, usize), right: (usize, usize) },
    /// Operation defined only for square matrices.
    NotSquare { height: usize, width: usize },
    /// Determinant is exactly zero.
    Singular,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { row, col, height, width } => {
                write!(f, "index ({row}, {col}) out of bounds for {height}x{width} matrix")
            }
            Self::ShapeMismatch { left, right } => write!(
                f,
                "cannot multiply {}x{} by {}x{}: inner dimensions differ",
                left.0, left.1, right.0, right.1
            ),
            Self::NotSquare { height, width } => {
                write!(f, "{height}x{width} matrix is not square")
            }
            Self::Singular => write!(f, "matrix is singular"),
        }
    }
}

impl std::error::Error for MatrixError {}
