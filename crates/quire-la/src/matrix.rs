use crate::{Iter, MatrixBuilder, MatrixError};
use approx::{AbsDiffEq, RelativeEq};
use core::ops::{Add, Div, Index, Mul, Neg, RangeInclusive, Rem, Sub};
use quire::Number;
use tracing::{debug, trace};

/// Heap-allocated row-major matrix.
///
/// Element (row, col) is stored at `data[row * width + col]`. Every index
/// pair in this crate is `(row, col)`: the first index selects the row.
///
/// A `Matrix` is never modified after construction; each operation
/// returns a new one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vec<Vec<f64>>", from = "Vec<Vec<f64>>")
)]
pub struct Matrix {
    data: Vec<f64>,
    height: usize,
    width: usize,
}

impl Matrix {
    /// Create from rows. Rows shorter than the widest one are padded with
    /// zeros on the right; no rows gives a 0x0 matrix.
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut data = Vec::with_capacity(height * width);
        for row in rows {
            let missing = width - row.len();
            data.extend(row);
            data.extend(core::iter::repeat(0.0).take(missing));
        }
        Self { data, height, width }
    }

    /// Create from rows of any numeric type, with the same padding as [`Matrix::new`].
    pub fn from_rows<R, T>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = T>,
        T: Number,
    {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Number::to_f64).collect())
                .collect(),
        )
    }

    /// Create from a function of (row, col).
    pub fn from_fn<T: Number>(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(height * width);
        for i in 0..height {
            for j in 0..width {
                data.push(f(i, j).to_f64());
            }
        }
        Self { data, height, width }
    }

    /// Zero matrix.
    pub fn zeros(height: usize, width: usize) -> Self {
        Self { data: vec![0.0; height * width], height, width }
    }

    /// Identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Fill a matrix of the given width value by value, row after row.
    pub fn build(width: usize, f: impl FnOnce(&mut MatrixBuilder)) -> Self {
        let mut builder = MatrixBuilder::new(width);
        f(&mut builder);
        builder.to_matrix()
    }

    /// Square matrix with `values` on the main diagonal.
    pub fn diagonal<T: Number>(values: &[T]) -> Self {
        let n = values.len();
        Self::from_fn(n, n, |i, j| if i == j { values[i].to_f64() } else { 0.0 })
    }

    /// Square matrix whose diagonal entry `i` is `f(i)`.
    pub fn diagonal_fn<T: Number>(size: usize, mut f: impl FnMut(usize) -> T) -> Self {
        Self::from_fn(size, size, |i, j| if i == j { f(i).to_f64() } else { 0.0 })
    }

    /// 1xN matrix.
    pub fn row_matrix<T: Number>(values: &[T]) -> Self {
        Self::from_fn(1, values.len(), |_, j| values[j])
    }

    pub fn row_fn<T: Number>(width: usize, mut f: impl FnMut(usize) -> T) -> Self {
        Self::from_fn(1, width, |_, j| f(j))
    }

    /// Nx1 matrix.
    pub fn column_matrix<T: Number>(values: &[T]) -> Self {
        Self::from_fn(values.len(), 1, |i, _| values[i])
    }

    pub fn column_fn<T: Number>(height: usize, mut f: impl FnMut(usize) -> T) -> Self {
        Self::from_fn(height, 1, |i, _| f(i))
    }

    #[inline]
    pub fn height(&self) -> usize { self.height }

    #[inline]
    pub fn width(&self) -> usize { self.width }

    /// Number of cells, `width * height`.
    #[inline]
    pub fn len(&self) -> usize { self.data.len() }

    /// No rows, or rows with no cells.
    #[inline]
    pub fn is_empty(&self) -> bool { self.width == 0 || self.height == 0 }

    #[inline]
    pub fn is_square(&self) -> bool { self.width == self.height }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Element access (row, col). Panics when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self[(row, col)]
    }

    pub fn try_get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        self.get_opt(row, col).ok_or(MatrixError::IndexOutOfBounds {
            row,
            col,
            height: self.height,
            width: self.width,
        })
    }

    #[inline]
    pub fn get_opt(&self, row: usize, col: usize) -> Option<f64> {
        self.offset(row, col).map(|k| self.data[k])
    }

    #[inline]
    pub fn get_or_zero(&self, row: usize, col: usize) -> f64 {
        self.get_opt(row, col).unwrap_or(0.0)
    }

    /// Row slice.
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.height, "Matrix row: index {i} out of bounds for height {}", self.height);
        &self.data[i * self.width..(i + 1) * self.width]
    }

    /// Extract a column.
    pub fn column(&self, j: usize) -> Vec<f64> {
        (0..self.height).map(|i| self[(i, j)]).collect()
    }

    /// Raw row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[f64] { &self.data }

    pub fn flatten(&self) -> Vec<f64> { self.data.clone() }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.height).map(|i| self.row(i).to_vec()).collect()
    }

    /// Sub-matrix starting at `(rows.start(), columns.start())`.
    ///
    /// The result spans `rows.end() - rows.start()` rows and
    /// `columns.end() - columns.start()` columns, so the end index of each
    /// range is *not* included. See [`Matrix::slice_inclusive`].
    pub fn slice(&self, columns: RangeInclusive<usize>, rows: RangeInclusive<usize>) -> Self {
        let (r0, c0) = (*rows.start(), *columns.start());
        let height = rows.end().saturating_sub(r0);
        let width = columns.end().saturating_sub(c0);
        Self::from_fn(height, width, |i, j| self[(i + r0, j + c0)])
    }

    /// Sub-matrix covering both ranges including their end indices.
    pub fn slice_inclusive(&self, columns: RangeInclusive<usize>, rows: RangeInclusive<usize>) -> Self {
        let (r0, c0) = (*rows.start(), *columns.start());
        let height = if rows.is_empty() { 0 } else { rows.end() - r0 + 1 };
        let width = if columns.is_empty() { 0 } else { columns.end() - c0 + 1 };
        Self::from_fn(height, width, |i, j| self[(i + r0, j + c0)])
    }

    /// Transpose.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.width, self.height, |i, j| self[(j, i)])
    }

    /// Copy without row `row` and column `col`.
    pub fn submatrix(&self, row: usize, col: usize) -> Self {
        assert!(
            row < self.height && col < self.width,
            "Matrix submatrix: ({row}, {col}) out of bounds for {}x{}",
            self.height,
            self.width
        );
        Self::from_fn(self.height - 1, self.width - 1, |i, j| {
            let si = if i >= row { i + 1 } else { i };
            let sj = if j >= col { j + 1 } else { j };
            self[(si, sj)]
        })
    }

    /// Determinant of the submatrix without row `row` and column `col`.
    pub fn minor(&self, row: usize, col: usize) -> f64 {
        self.submatrix(row, col).determinant()
    }

    /// Minor with sign `(-1)^(row + col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 0 { minor } else { -minor }
    }

    /// Matrix of cofactors.
    pub fn cofactor_matrix(&self) -> Self {
        Self::from_fn(self.height, self.width, |i, j| self.cofactor(i, j))
    }

    /// Transposed cofactor matrix.
    pub fn adjugate(&self) -> Self {
        self.cofactor_matrix().transpose()
    }

    /// Determinant. NaN for non-square matrices.
    ///
    /// Up to 3x3 uses the closed forms; larger matrices expand along the
    /// first column. The empty 0x0 matrix has determinant 1.
    pub fn determinant(&self) -> f64 {
        if !self.is_square() {
            return f64::NAN;
        }
        let m = |i: usize, j: usize| self.data[i * self.width + j];
        match self.width {
            0 => 1.0,
            1 => m(0, 0),
            2 => m(0, 0) * m(1, 1) - m(1, 0) * m(0, 1),
            3 => {
                m(0, 0) * m(1, 1) * m(2, 2)
                    + m(0, 1) * m(1, 2) * m(2, 0)
                    + m(1, 0) * m(2, 1) * m(0, 2)
                    - m(2, 0) * m(1, 1) * m(0, 2)
                    - m(2, 1) * m(1, 2) * m(0, 0)
                    - m(1, 0) * m(0, 1) * m(2, 2)
            }
            n => {
                trace!(size = n, "cofactor expansion along first column");
                (0..n).map(|i| m(i, 0) * self.cofactor(i, 0)).sum()
            }
        }
    }

    /// Trace (sum of diagonal). NaN for non-square matrices.
    pub fn trace(&self) -> f64 {
        if !self.is_square() {
            return f64::NAN;
        }
        self.main_diagonal().iter().sum()
    }

    /// Inverse via the adjugate, or `None` when non-square or singular.
    pub fn inverse(&self) -> Option<Self> {
        self.try_inverse().ok()
    }

    pub fn try_inverse(&self) -> Result<Self, MatrixError> {
        if !self.is_square() {
            debug!(height = self.height, width = self.width, "inverse of non-square matrix");
            return Err(MatrixError::NotSquare { height: self.height, width: self.width });
        }
        let det = self.determinant();
        if det == 0.0 {
            debug!(size = self.width, "inverse of singular matrix");
            return Err(MatrixError::Singular);
        }
        Ok(&self.adjugate() / det)
    }

    /// Matrix-matrix product, or `None` when `self.width != rhs.height`.
    pub fn mul_mat(&self, rhs: &Matrix) -> Option<Matrix> {
        self.try_mul_mat(rhs).ok()
    }

    pub fn try_mul_mat(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.width != rhs.height {
            debug!(
                left_width = self.width,
                right_height = rhs.height,
                "matrix product shape mismatch"
            );
            return Err(MatrixError::ShapeMismatch {
                left: (self.height, self.width),
                right: (rhs.height, rhs.width),
            });
        }
        Ok(Matrix::from_fn(self.height, rhs.width, |i, j| {
            (0..self.width).map(|k| self[(i, k)] * rhs[(k, j)]).sum::<f64>()
        }))
    }

    /// Scale all elements.
    pub fn scale(&self, s: impl Number) -> Self {
        self * s.to_f64()
    }

    /// Divide all elements by `s`.
    pub fn div_by(&self, s: impl Number) -> Self {
        self / s.to_f64()
    }

    /// Remainder of every element modulo `s`.
    pub fn rem_by(&self, s: impl Number) -> Self {
        self % s.to_f64()
    }

    /// Only zeros strictly below the main diagonal.
    pub fn is_zero_below_main(&self) -> bool {
        (0..self.height).all(|i| (0..i.min(self.width)).all(|j| self[(i, j)] == 0.0))
    }

    /// Only zeros strictly above the main diagonal.
    pub fn is_zero_above_main(&self) -> bool {
        (0..self.height).all(|i| ((i + 1)..self.width).all(|j| self[(i, j)] == 0.0))
    }

    pub fn is_triangular(&self) -> bool {
        self.is_zero_below_main() || self.is_zero_above_main()
    }

    pub fn is_diagonal(&self) -> bool {
        self.is_zero_below_main() && self.is_zero_above_main()
    }

    /// Determinant is exactly zero.
    pub fn is_degenerate(&self) -> bool {
        self.determinant() == 0.0
    }

    /// Cells `(j, j)`.
    pub fn main_diagonal(&self) -> Vec<f64> {
        (0..self.height.min(self.width)).map(|j| self[(j, j)]).collect()
    }

    /// Cells `(j, width - j - 1)`.
    pub fn side_diagonal(&self) -> Vec<f64> {
        (0..self.height.min(self.width)).map(|j| self[(j, self.width - j - 1)]).collect()
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    pub fn map<T: Number>(&self, mut f: impl FnMut(f64) -> T) -> Self {
        Self::from_fn(self.height, self.width, |i, j| f(self[(i, j)]))
    }

    pub fn map_indexed<T: Number>(&self, mut f: impl FnMut(usize, usize, f64) -> T) -> Self {
        Self::from_fn(self.height, self.width, |i, j| f(i, j, self[(i, j)]))
    }

    /// Transform every cell, keeping the row structure.
    pub fn map_to_rows<T>(&self, mut f: impl FnMut(f64) -> T) -> Vec<Vec<T>> {
        self.map_to_rows_indexed(|_, _, v| f(v))
    }

    pub fn map_to_rows_indexed<T>(&self, mut f: impl FnMut(usize, usize, f64) -> T) -> Vec<Vec<T>> {
        (0..self.height)
            .map(|i| (0..self.width).map(|j| f(i, j, self[(i, j)])).collect())
            .collect()
    }

    /// Transform every cell into one flat row-major list.
    pub fn flat_map<T>(&self, f: impl FnMut(f64) -> T) -> Vec<T> {
        self.iter().map(f).collect()
    }

    pub fn flat_map_indexed<T>(&self, mut f: impl FnMut(usize, usize, f64) -> T) -> Vec<T> {
        let width = self.width;
        self.iter()
            .enumerate()
            .map(|(k, v)| f(k / width, k % width, v))
            .collect()
    }

    /// Exact equality scan.
    pub fn contains(&self, value: f64) -> bool {
        self.data.iter().any(|&v| v == value)
    }

    pub fn contains_all(&self, values: impl IntoIterator<Item = f64>) -> bool {
        values.into_iter().all(|v| self.contains(v))
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        match self.offset(row, col) {
            Some(k) => &self.data[k],
            None => panic!(
                "Matrix index: ({row}, {col}) out of bounds for {}x{}",
                self.height, self.width
            ),
        }
    }
}

impl From<Vec<Vec<f64>>> for Matrix {
    fn from(rows: Vec<Vec<f64>>) -> Self { Self::new(rows) }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self { m.to_rows() }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = f64;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> { self.iter() }
}

// Cellwise sum/difference over the larger of the two shapes; cells missing
// from either side count as zero.
impl Add for &Matrix {
    type Output = Matrix;
    fn add(self, rhs: &Matrix) -> Matrix {
        Matrix::from_fn(self.height.max(rhs.height), self.width.max(rhs.width), |i, j| {
            self.get_or_zero(i, j) + rhs.get_or_zero(i, j)
        })
    }
}

impl Sub for &Matrix {
    type Output = Matrix;
    fn sub(self, rhs: &Matrix) -> Matrix {
        Matrix::from_fn(self.height.max(rhs.height), self.width.max(rhs.width), |i, j| {
            self.get_or_zero(i, j) - rhs.get_or_zero(i, j)
        })
    }
}

impl Neg for &Matrix {
    type Output = Matrix;
    fn neg(self) -> Matrix { self.map(|v| -v) }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: f64) -> Matrix { self.map(|v| v * rhs) }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Matrix { rhs * self }
}

// cell ÷ scalar
impl Div<f64> for &Matrix {
    type Output = Matrix;
    fn div(self, rhs: f64) -> Matrix { self.map(|v| v / rhs) }
}

// cell mod scalar
impl Rem<f64> for &Matrix {
    type Output = Matrix;
    fn rem(self, rhs: f64) -> Matrix { self.map(|v| v % rhs) }
}

/// `None` when the inner dimensions differ.
impl Mul for &Matrix {
    type Output = Option<Matrix>;
    fn mul(self, rhs: &Matrix) -> Option<Matrix> { self.mul_mat(rhs) }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 { f64::EPSILON }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.height == other.height
            && self.width == other.width
            && self.data.iter().zip(&other.data).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f64 { f64::EPSILON }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.height == other.height
            && self.width == other.width
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
