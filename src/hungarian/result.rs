//! Assignment result and its construction from a solved matrix.

use super::config::Mode;
use super::normalize::Normalized;
use super::types::Matrix;
use crate::error::{Error, Result};

/// Result of solving one assignment problem.
///
/// All indices are 0-based. Matrices are `n x n` with
/// `n = max(rows, cols)`; rows `>= rows` and columns `>= cols` are padding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentResult {
    /// Whether an assignment was produced.
    ///
    /// `false` for empty, malformed or overflowing input, in which case
    /// every matrix and the map are empty and `total` is zero.
    pub success: bool,

    /// Sum of the original entries over the real pairs: a cost for
    /// [`Mode::MinimizeCost`], a utility for [`Mode::MaximizeUtility`].
    pub total: i64,

    /// `1` at assigned cells, `0` elsewhere.
    pub assignment: Matrix,

    /// Real `(row, col)` pairs in ascending row order.
    pub assignment_map: Vec<(usize, usize)>,

    /// Reduced cost matrix left by the solver.
    pub cost: Matrix,

    /// The normalized square matrix that was solved.
    pub matrix: Matrix,

    /// Real row count of the input.
    pub rows: usize,

    /// Real column count of the input.
    pub cols: usize,

    /// Mode the problem was solved in.
    pub mode: Mode,
}

impl AssignmentResult {
    /// A failed result with empty outputs.
    pub fn failure(rows: usize, cols: usize, mode: Mode) -> Self {
        Self {
            success: false,
            total: 0,
            assignment: Matrix::default(),
            assignment_map: Vec::new(),
            cost: Matrix::default(),
            matrix: Matrix::default(),
            rows,
            cols,
            mode,
        }
    }

    /// Column assigned to real row `row`, if any.
    pub fn column_of(&self, row: usize) -> Option<usize> {
        self.assignment_map
            .iter()
            .find(|&&(r, _)| r == row)
            .map(|&(_, c)| c)
    }

    /// Real rows left without a real column (only when `rows > cols`).
    pub fn unassigned_rows(&self) -> Vec<usize> {
        (0..self.rows)
            .filter(|&r| self.column_of(r).is_none())
            .collect()
    }

    /// Real columns left without a real row (only when `cols > rows`).
    pub fn unassigned_cols(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&c| self.assignment_map.iter().all(|&(_, col)| col != c))
            .collect()
    }
}

/// Packages a solved problem.
///
/// `original` is the caller's matrix before padding and transformation;
/// `total` is summed from it, never from the transformed costs. Pairs
/// touching a dummy row or column are left out of the map.
///
/// # Errors
///
/// [`Error::Overflow`] if the total does not fit in `i64`. Partial sums
/// may leave the `i64` range as long as the final total is back inside.
pub fn build(
    original: &Matrix,
    normalized: Normalized,
    assignment: Matrix,
    cost: Matrix,
    mode: Mode,
) -> Result<AssignmentResult> {
    let mut total = 0i128;
    let mut assignment_map = Vec::with_capacity(normalized.rows.min(normalized.cols));

    for (i, row) in assignment.iter_rows().enumerate() {
        let Some(j) = row.iter().position(|&v| v == 1) else {
            continue;
        };
        if !normalized.is_real(i, j) {
            continue;
        }
        total += i128::from(original[(i, j)]);
        assignment_map.push((i, j));
    }
    let total =
        i64::try_from(total).map_err(|_| Error::Overflow("summing the assignment total"))?;

    Ok(AssignmentResult {
        success: true,
        total,
        assignment,
        assignment_map,
        cost,
        rows: normalized.rows,
        cols: normalized.cols,
        matrix: normalized.matrix,
        mode,
    })
}
