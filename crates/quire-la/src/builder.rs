use crate::Matrix;
use quire::Number;

/// Fills a matrix of fixed width one value at a time.
///
/// Values go left to right; once a row holds `width` values the next one
/// starts a new row. A row is zero-filled when it is started, so a
/// partially filled last row reads as zeros past the cursor. A builder of
/// width zero has nowhere to put values: it ignores them and yields the
/// empty matrix.
#[derive(Clone, Debug)]
pub struct MatrixBuilder {
    width: usize,
    row: usize,
    col: usize,
    rows: Vec<Vec<f64>>,
}

impl MatrixBuilder {
    pub fn new(width: usize) -> Self {
        Self { width, row: 0, col: 0, rows: Vec::new() }
    }

    #[inline]
    pub fn width(&self) -> usize { self.width }

    /// Rows started so far, including a partially filled one.
    #[inline]
    pub fn height(&self) -> usize { self.rows.len() }

    /// Write `value` at the cursor and advance it.
    pub fn append(&mut self, value: impl Number) -> &mut Self {
        if self.width == 0 {
            return self;
        }
        if self.col == 0 {
            self.rows.push(vec![0.0; self.width]);
        }
        self.rows[self.row][self.col] = value.to_f64();
        self.col += 1;
        if self.col == self.width {
            self.col = 0;
            self.row += 1;
        }
        self
    }

    pub fn append_all<T: Number>(&mut self, values: impl IntoIterator<Item = T>) -> &mut Self {
        for v in values {
            self.append(v);
        }
        self
    }

    /// Snapshot of the current content. The builder stays usable.
    pub fn to_matrix(&self) -> Matrix {
        Matrix::new(self.rows.clone())
    }
}

impl<T: Number> Extend<T> for MatrixBuilder {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_all(iter);
    }
}
