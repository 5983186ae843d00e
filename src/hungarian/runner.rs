//! Hungarian execution pipeline: normalize, solve, build.

use log::{debug, warn};

use super::config::HungarianConfig;
use super::normalize::normalize;
use super::result::{build, AssignmentResult};
use super::solver::solve;
use super::types::Matrix;
use crate::error::{Error, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs the Hungarian method on assignment problems.
pub struct HungarianRunner;

impl HungarianRunner {
    /// Solves one assignment problem.
    ///
    /// Failures (empty matrix, overflow) are reported through
    /// [`AssignmentResult::success`], never as a panic.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_assign::hungarian::{HungarianConfig, HungarianRunner, Matrix};
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![2, 4, 6], vec![3, 6, 9]]).unwrap();
    /// let result = HungarianRunner::run(&m, &HungarianConfig::minimize());
    /// assert!(result.success);
    /// assert_eq!(result.total, 10);
    /// ```
    pub fn run(matrix: &Matrix, config: &HungarianConfig) -> AssignmentResult {
        match Self::try_run(matrix, config) {
            Ok(result) => result,
            Err(err) => {
                match err {
                    Error::EmptyMatrix { .. } => debug!("no assignment: {err}"),
                    _ => warn!("no assignment: {err}"),
                }
                AssignmentResult::failure(matrix.rows(), matrix.cols(), config.mode)
            }
        }
    }

    /// Solves one assignment problem, returning the cause on failure.
    pub fn try_run(matrix: &Matrix, config: &HungarianConfig) -> Result<AssignmentResult> {
        debug!(
            "solving {}x{} assignment ({:?})",
            matrix.rows(),
            matrix.cols(),
            config.mode
        );

        let normalized = normalize(matrix, config.mode)?;
        let mut cost = normalized.matrix.clone();
        let assignment = solve(&mut cost);
        build(matrix, normalized, assignment, cost, config.mode)
    }

    /// Solves independent problems, preserving input order.
    ///
    /// With the `parallel` feature and `config.parallel` set, matrices are
    /// distributed over rayon's thread pool. Each solve owns its buffers.
    pub fn run_batch(matrices: &[Matrix], config: &HungarianConfig) -> Vec<AssignmentResult> {
        #[cfg(feature = "parallel")]
        if config.parallel {
            return matrices.par_iter().map(|m| Self::run(m, config)).collect();
        }

        matrices.iter().map(|m| Self::run(m, config)).collect()
    }
}
