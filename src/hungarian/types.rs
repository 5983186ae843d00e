//! Dense integer matrix used for costs, utilities and assignments.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// A dense, row-major `rows x cols` matrix of `i64` values.
///
/// Construction from nested rows checks rectangularity, so every value of
/// this type has a well-defined shape. Either dimension may be zero.
///
/// # Examples
///
/// ```
/// use u_assign::hungarian::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// assert_eq!(m.rows(), 2);
/// assert_eq!(m.cols(), 3);
/// assert_eq!(m[(1, 2)], 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Creates a `rows x cols` matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Builds a matrix from nested rows.
    ///
    /// An empty outer vector yields a `0 x 0` matrix. A single empty row
    /// yields `1 x 0`.
    ///
    /// # Errors
    ///
    /// [`Error::RaggedRow`] if any row's length differs from the first.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        Self::from_slices(&rows)
    }

    /// Same as [`Matrix::from_rows`], borrowing the input.
    pub fn from_slices<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::RaggedRow {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix has no cells.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `rows == cols`.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the value at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[i64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub(crate) fn row_mut(&mut self, i: usize) -> &mut [i64] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterates over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i64]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Largest entry, or `None` for an empty matrix.
    pub fn max(&self) -> Option<i64> {
        self.data.iter().copied().max()
    }

    /// Copies the matrix into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.iter_rows().map(<[i64]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, (row, col): (usize, usize)) -> &i64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut i64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

/// Renders one row per line with right-aligned columns.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .data
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);
        for row in self.iter_rows() {
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_shape() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert!(!m.is_square());
        assert_eq!(m.row(1), &[4, 5, 6]);
        assert_eq!(m.get(0, 2), Some(3));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            Error::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_empty_shapes() {
        let m = Matrix::from_rows(vec![]).unwrap();
        assert_eq!((m.rows(), m.cols()), (0, 0));
        assert!(m.is_empty());

        let m = Matrix::from_rows(vec![vec![], vec![]]).unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 0));
        assert!(m.is_empty());
        assert_eq!(m.max(), None);
    }

    #[test]
    fn test_index_mut_and_to_rows() {
        let mut m = Matrix::zeros(2, 2);
        m[(0, 1)] = 7;
        m.row_mut(1)[0] = -3;
        assert_eq!(m.to_rows(), vec![vec![0, 7], vec![-3, 0]]);
        assert_eq!(m.max(), Some(7));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds() {
        let m = Matrix::zeros(2, 2);
        let _ = m[(2, 0)];
    }

    #[test]
    fn test_display_alignment() {
        let m = Matrix::from_rows(vec![vec![1, 10], vec![-5, 2]]).unwrap();
        assert_eq!(m.to_string(), " 1 10\n-5  2\n");
    }
}
