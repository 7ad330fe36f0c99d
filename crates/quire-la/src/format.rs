//! Bracketed multi-line rendering.
//!
//! ```text
//! ⎛ 1.0   20.0 ⎞
//! ⎝ 300.0 4.0  ⎠
//! ```
//!
//! Cells are left-aligned and each column is padded to its widest cell.
//! A single row uses plain parentheses, and a matrix without rows renders
//! as `()`. A requested precision (`{:.2}`) applies to every cell.

use crate::Matrix;
use core::fmt::{self, Write};

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.height() == 0 {
            return f.write_str("()");
        }

        let mut lines = vec![String::new(); self.height()];
        for j in 0..self.width() {
            for (i, line) in lines.iter_mut().enumerate() {
                let v = self[(i, j)];
                match f.precision() {
                    Some(p) => write!(line, " {v:.p$}")?,
                    None => write!(line, " {v:?}")?,
                }
            }
            let widest = lines.iter().map(String::len).max().unwrap_or(0);
            for line in &mut lines {
                let pad = widest - line.len();
                line.extend(core::iter::repeat(' ').take(pad));
            }
        }

        let last = self.height() - 1;
        for (i, line) in lines.iter().enumerate() {
            let (open, close) = match i {
                _ if last == 0 => ('(', ')'),
                0 => ('⎛', '⎞'),
                _ if i == last => ('⎝', '⎠'),
                _ => ('⎜', '⎟'),
            };
            if i > 0 {
                f.write_char('\n')?;
            }
            write!(f, "{open}{line} {close}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Matrix;

    #[test]
    fn empty() {
        assert_eq!(Matrix::new(Vec::new()).to_string(), "()");
    }

    #[test]
    fn single_row() {
        assert_eq!(Matrix::row_matrix(&[1, 2, 3]).to_string(), "( 1.0 2.0 3.0 )");
    }

    #[test]
    fn columns_are_aligned() {
        let m = Matrix::from_rows([[1, 20], [300, 4]]);
        assert_eq!(m.to_string(), "⎛ 1.0   20.0 ⎞\n⎝ 300.0 4.0  ⎠");
    }

    #[test]
    fn middle_rows() {
        let m = Matrix::column_matrix(&[1, -2, 3]);
        assert_eq!(m.to_string(), "⎛ 1.0  ⎞\n⎜ -2.0 ⎟\n⎝ 3.0  ⎠");
    }

    #[test]
    fn precision() {
        let m = Matrix::from_rows([[1.0 / 3.0, 2.0], [0.5, 10.0]]);
        assert_eq!(format!("{m:.2}"), "⎛ 0.33 2.00  ⎞\n⎝ 0.50 10.00 ⎠");
    }

    #[test]
    fn rows_without_cells() {
        assert_eq!(Matrix::new(vec![vec![]]).to_string(), "( )");
    }
}
