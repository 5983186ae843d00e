//! Host-facing entry points.
//!
//! A host (scripting runtime, service, FFI shim) hands over a matrix as
//! nested rows and gets back an [`Outcome`] record. Pairings in
//! [`Outcome::assignment_map`] use 1-based indices on both sides; nested
//! matrices are plain row lists for the host to index as it likes.
//! Malformed input never panics: it comes back as `success = false`.

use std::collections::BTreeMap;

use log::warn;

use crate::hungarian::{AssignmentResult, HungarianConfig, HungarianRunner, Matrix, Mode};

/// Result record returned to the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// Whether an assignment was found.
    pub success: bool,

    /// Sum of the input values over the chosen pairs.
    pub total_cost: i64,

    /// Padded square matrix with `1` at assigned cells.
    pub assignment: Vec<Vec<i64>>,

    /// 1-based row to 1-based column, real pairs only.
    pub assignment_map: BTreeMap<usize, usize>,

    /// Reduced cost matrix left by the solver.
    pub cost: Vec<Vec<i64>>,

    /// Normalized square matrix that was solved.
    pub matrix: Vec<Vec<i64>>,
}

impl From<AssignmentResult> for Outcome {
    fn from(result: AssignmentResult) -> Self {
        Self {
            success: result.success,
            total_cost: result.total,
            assignment: result.assignment.to_rows(),
            assignment_map: result
                .assignment_map
                .iter()
                .map(|&(r, c)| (r + 1, c + 1))
                .collect(),
            cost: result.cost.to_rows(),
            matrix: result.matrix.to_rows(),
        }
    }
}

/// Pairs rows with columns so that the total cost is minimal.
///
/// # Examples
///
/// ```
/// use u_assign::minimize_cost;
///
/// let outcome = minimize_cost(&[vec![5]]);
/// assert_eq!(outcome.total_cost, 5);
/// assert_eq!(outcome.assignment_map.get(&1), Some(&1));
/// ```
pub fn minimize_cost<R: AsRef<[i64]>>(rows: &[R]) -> Outcome {
    optimize(rows, Mode::MinimizeCost)
}

/// Pairs rows with columns so that the total utility is maximal.
///
/// # Examples
///
/// ```
/// use u_assign::maximize_utility;
///
/// let outcome = maximize_utility(&[vec![1, 2], vec![3, 4]]);
/// assert_eq!(outcome.total_cost, 5);
/// ```
pub fn maximize_utility<R: AsRef<[i64]>>(rows: &[R]) -> Outcome {
    optimize(rows, Mode::MaximizeUtility)
}

fn optimize<R: AsRef<[i64]>>(rows: &[R], mode: Mode) -> Outcome {
    let matrix = match Matrix::from_slices(rows) {
        Ok(matrix) => matrix,
        Err(err) => {
            warn!("rejecting input matrix: {err}");
            return Outcome::default();
        }
    };
    HungarianRunner::run(&matrix, &HungarianConfig::default().with_mode(mode)).into()
}
