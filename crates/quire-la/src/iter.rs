use crate::Matrix;

/// Row-major iterator over the cells of a [`Matrix`].
///
/// Linear index `k` maps to cell `(k / width, k % width)`.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    matrix: &'a Matrix,
    front: usize,
    back: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(matrix: &'a Matrix) -> Self {
        Self { matrix, front: 0, back: matrix.len() }
    }

    #[inline]
    fn cell(&self, k: usize) -> f64 {
        let width = self.matrix.width();
        self.matrix[(k / width, k % width)]
    }
}

impl Iterator for Iter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front == self.back {
            return None;
        }
        let v = self.cell(self.front);
        self.front += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<f64> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.cell(self.back))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl core::iter::FusedIterator for Iter<'_> {}
