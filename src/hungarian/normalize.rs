//! Square padding and utility-to-cost transformation.

use super::config::Mode;
use super::types::Matrix;
use crate::error::{Error, Result};

/// A square cost matrix ready for the solver, plus the real dimensions
/// of the matrix it was derived from.
///
/// Rows `>= rows` and columns `>= cols` are dummies added by padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Square `n x n` cost matrix, `n = max(rows, cols)`.
    pub matrix: Matrix,
    /// Real row count.
    pub rows: usize,
    /// Real column count.
    pub cols: usize,
}

impl Normalized {
    /// Side length of the square matrix.
    pub fn size(&self) -> usize {
        self.matrix.rows()
    }

    /// Whether `(row, col)` lies inside the original, unpadded matrix.
    pub fn is_real(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

/// Pads `matrix` to square with zero cells and, for
/// [`Mode::MaximizeUtility`], replaces each real entry `c` by `max - c`.
///
/// Padding cells are zero in both modes, so a dummy is matched only when
/// the shape forces it.
///
/// # Errors
///
/// - [`Error::EmptyMatrix`] if either dimension is zero.
/// - [`Error::Overflow`] if `max - c` does not fit in `i64`. The
///   transformed matrix is part of the result, so it has to be
///   representable.
///
/// # Examples
///
/// ```
/// use u_assign::hungarian::{normalize, Matrix, Mode};
///
/// let m = Matrix::from_rows(vec![vec![1, 4]]).unwrap();
/// let n = normalize(&m, Mode::MaximizeUtility).unwrap();
/// assert_eq!(n.matrix.to_rows(), vec![vec![3, 0], vec![0, 0]]);
/// ```
pub fn normalize(matrix: &Matrix, mode: Mode) -> Result<Normalized> {
    let rows = matrix.rows();
    let cols = matrix.cols();
    if matrix.is_empty() {
        return Err(Error::EmptyMatrix { rows, cols });
    }

    let n = rows.max(cols);
    let mut square = Matrix::zeros(n, n);

    match mode {
        Mode::MinimizeCost => {
            for i in 0..rows {
                square.row_mut(i)[..cols].copy_from_slice(matrix.row(i));
            }
        }
        Mode::MaximizeUtility => {
            // Non-empty, checked above.
            let max = matrix.max().unwrap_or_default();
            for i in 0..rows {
                let dst = &mut square.row_mut(i)[..cols];
                for (d, &c) in dst.iter_mut().zip(matrix.row(i)) {
                    *d = max
                        .checked_sub(c)
                        .ok_or(Error::Overflow("transforming utilities to costs"))?;
                }
            }
        }
    }

    Ok(Normalized {
        matrix: square,
        rows,
        cols,
    })
}
