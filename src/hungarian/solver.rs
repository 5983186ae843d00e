//! Kuhn–Munkres solver on a square integer cost matrix.
//!
//! Works on reduced costs `c(i, j) - u[i] - v[j]` held through row and
//! column potentials, so the matrix is never rewritten while searching.
//! Potentials stay dual feasible (every reduced cost is `>= 0`) and every
//! matched cell has reduced cost zero.
//!
//! # Algorithm
//!
//! 1. Row reduction: `u[i]` is the minimum of row `i`
//! 2. Column reduction: `v[j]` is the minimum of column `j` after step 1
//! 3. Match zero cells greedily in row-major order
//! 4. For every row left unmatched, in ascending order, grow an
//!    alternating tree of zero cells from it. Rows in the tree are the
//!    uncovered lines and tree columns the covered ones. Each column keeps
//!    its slack, the smallest reduced cost from any tree row:
//!    a. take the column of least slack (lowest column on ties)
//!    b. `d` = that slack; raise tree rows by `d` and lower tree columns by
//!       `d`. This is the "subtract `d` from uncovered cells, add `d` to
//!       cells covered twice" step, applied to potentials
//!    c. if the column is matched, add its row to the tree and update the
//!       slacks from that row; otherwise flip the alternating path back to
//!       the root, which grows the matching by one
//! 5. Write the final reduced costs back into the matrix
//!
//! Each augmentation scans at most `n` rows of `n` cells, so a solve is
//! `O(n^3)`. Potentials are `i128`, which holds any sum of `n` `i64`
//! differences exactly; "is zero" is never subject to rounding or
//! overflow.
//!
//! # Reference
//!
//! Kuhn, H. W. (1955). "The Hungarian Method for the Assignment Problem",
//! *Naval Research Logistics Quarterly* 2, 83-97.
//! Munkres, J. (1957). "Algorithms for the Assignment and Transportation
//! Problems", *Journal of the SIAM* 5(1), 32-38.
//! Lawler, E. (1976). *Combinatorial Optimization: Networks and Matroids*,
//! ch. 5 (the `O(n^3)` labeling variant).

use log::{debug, trace, warn};

use super::types::Matrix;

/// Finds a minimum-cost perfect matching on a square matrix.
///
/// Returns an `n x n` matrix with exactly one `1` per row and per column.
/// On return `cost` holds the reduced cost matrix: every cell is `>= 0`
/// and every assigned cell is zero. A reduced cost above `i64::MAX`
/// (possible only when costs span more than the `i64` range) is written
/// back as `i64::MAX`; the assignment itself is always exact.
///
/// An empty `0 x 0` matrix yields an empty assignment.
///
/// # Panics
///
/// Panics if `cost` is not square.
///
/// # Examples
///
/// ```
/// use u_assign::hungarian::{solve, Matrix};
///
/// let mut cost = Matrix::from_rows(vec![vec![4, 1], vec![2, 3]]).unwrap();
/// let assignment = solve(&mut cost);
/// assert_eq!(assignment.to_rows(), vec![vec![0, 1], vec![1, 0]]);
/// ```
pub fn solve(cost: &mut Matrix) -> Matrix {
    assert!(
        cost.is_square(),
        "solver requires a square matrix, got {}x{}",
        cost.rows(),
        cost.cols()
    );
    let n = cost.rows();
    if n == 0 {
        return Matrix::zeros(0, 0);
    }

    let mut state = Potentials::reduce(cost);
    state.match_initial_zeros(cost);

    let free: Vec<usize> = (0..n).filter(|&i| state.col_of_row[i].is_none()).collect();
    debug!("solving {n}x{n}: {} rows matched by reduction", n - free.len());

    let mut adjustments = 0usize;
    for &row in &free {
        adjustments += state.augment_from(cost, row);
    }

    debug!(
        "solved {n}x{n}: {} augmentations, {adjustments} adjustments",
        free.len()
    );
    state.write_reduced(cost);
    trace!("final cost matrix:\n{cost}");

    state.assignment()
}

/// Dual potentials and the current partial matching.
struct Potentials {
    n: usize,
    u: Vec<i128>,
    /// One extra slot: column `n` is the virtual root of a search tree.
    v: Vec<i128>,
    /// One extra slot: `row_of_col[n]` holds the row a search starts from.
    row_of_col: Vec<Option<usize>>,
    col_of_row: Vec<Option<usize>>,
}

impl Potentials {
    fn reduce(cost: &Matrix) -> Self {
        let n = cost.rows();
        let u: Vec<i128> = cost
            .iter_rows()
            .map(|row| row.iter().copied().min().map_or(0, i128::from))
            .collect();
        let mut v = vec![0i128; n + 1];
        for (j, vj) in v.iter_mut().take(n).enumerate() {
            *vj = (0..n)
                .map(|i| i128::from(cost[(i, j)]) - u[i])
                .min()
                .unwrap_or(0);
        }
        Self {
            n,
            u,
            v,
            row_of_col: vec![None; n + 1],
            col_of_row: vec![None; n],
        }
    }

    fn reduced(&self, cost: &Matrix, row: usize, col: usize) -> i128 {
        i128::from(cost[(row, col)]) - self.u[row] - self.v[col]
    }

    fn pair(&mut self, row: usize, col: usize) {
        self.col_of_row[row] = Some(col);
        self.row_of_col[col] = Some(row);
    }

    fn match_initial_zeros(&mut self, cost: &Matrix) {
        for i in 0..self.n {
            for j in 0..self.n {
                let free = self.col_of_row[i].is_none() && self.row_of_col[j].is_none();
                if free && self.reduced(cost, i, j) == 0 {
                    self.pair(i, j);
                }
            }
        }
    }

    /// Grows an alternating tree from the unmatched `row` until it reaches
    /// an unmatched column, then flips the path. Returns the number of
    /// potential adjustments with `d > 0`.
    fn augment_from(&mut self, cost: &Matrix, row: usize) -> usize {
        let n = self.n;
        let root = n;
        self.row_of_col[root] = Some(row);

        let mut slack = vec![i128::MAX; n];
        let mut via = vec![root; n];
        let mut in_tree = vec![false; n + 1];
        let mut col = root;
        let mut adjustments = 0;

        loop {
            in_tree[col] = true;
            let tree_row = self.row_of_col[col]
                .expect("every tree column is matched to a tree row");

            let mut delta = i128::MAX;
            let mut next = root;
            for j in (0..n).filter(|&j| !in_tree[j]) {
                let r = self.reduced(cost, tree_row, j);
                if r < slack[j] {
                    slack[j] = r;
                    via[j] = col;
                }
                if slack[j] < delta {
                    delta = slack[j];
                    next = j;
                }
            }

            if delta > 0 {
                adjustments += 1;
                for j in 0..=n {
                    if in_tree[j] {
                        if let Some(i) = self.row_of_col[j] {
                            self.u[i] += delta;
                        }
                        self.v[j] -= delta;
                    } else {
                        slack[j] -= delta;
                    }
                }
            }

            col = next;
            if self.row_of_col[col].is_none() {
                break;
            }
        }

        while col != root {
            let prev = via[col];
            self.row_of_col[col] = self.row_of_col[prev];
            col = prev;
        }
        self.row_of_col[root] = None;
        for j in 0..n {
            if let Some(i) = self.row_of_col[j] {
                self.col_of_row[i] = Some(j);
            }
        }

        adjustments
    }

    fn write_reduced(&self, cost: &mut Matrix) {
        let mut clamped = 0usize;
        for i in 0..self.n {
            for j in 0..self.n {
                let r = self.reduced(cost, i, j);
                cost[(i, j)] = i64::try_from(r).unwrap_or_else(|_| {
                    clamped += 1;
                    i64::MAX
                });
            }
        }
        if clamped > 0 {
            warn!("{clamped} reduced costs exceed i64::MAX and were reported as i64::MAX");
        }
    }

    fn assignment(&self) -> Matrix {
        let mut out = Matrix::zeros(self.n, self.n);
        for (i, col) in self.col_of_row.iter().enumerate() {
            if let Some(j) = *col {
                out[(i, j)] = 1;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn brute_force_min(cost: &[Vec<i64>]) -> i64 {
        fn go(cost: &[Vec<i64>], row: usize, used: &mut Vec<bool>) -> i64 {
            if row == cost.len() {
                return 0;
            }
            let mut best = i64::MAX;
            for j in 0..cost.len() {
                if !used[j] {
                    used[j] = true;
                    best = best.min(cost[row][j] + go(cost, row + 1, used));
                    used[j] = false;
                }
            }
            best
        }
        go(cost, 0, &mut vec![false; cost.len()])
    }

    fn assigned_total(original: &[Vec<i64>], assignment: &Matrix) -> i64 {
        let mut total = 0;
        for (i, row) in original.iter().enumerate() {
            for (j, &c) in row.iter().enumerate() {
                if assignment[(i, j)] == 1 {
                    total += c;
                }
            }
        }
        total
    }

    fn assert_permutation(assignment: &Matrix) {
        let n = assignment.rows();
        for i in 0..n {
            assert_eq!(assignment.row(i).iter().sum::<i64>(), 1, "row {i}");
            assert_eq!((0..n).map(|r| assignment[(r, i)]).sum::<i64>(), 1, "col {i}");
        }
    }

    fn solve_rows(rows: &[Vec<i64>]) -> (Matrix, Matrix) {
        let mut cost = Matrix::from_slices(rows).unwrap();
        let assignment = solve(&mut cost);
        (assignment, cost)
    }

    #[test]
    fn test_solve_empty() {
        let mut cost = Matrix::zeros(0, 0);
        let assignment = solve(&mut cost);
        assert_eq!((assignment.rows(), assignment.cols()), (0, 0));
    }

    #[test]
    fn test_solve_single() {
        let (assignment, cost) = solve_rows(&[vec![5]]);
        assert_eq!(assignment.to_rows(), vec![vec![1]]);
        assert_eq!(cost.to_rows(), vec![vec![0]]);
    }

    #[test]
    fn test_solve_multiplication_table() {
        let rows = vec![vec![1, 2, 3], vec![2, 4, 6], vec![3, 6, 9]];
        let (assignment, _) = solve_rows(&rows);
        assert_permutation(&assignment);
        assert_eq!(assigned_total(&rows, &assignment), 10);
        assert_eq!(brute_force_min(&rows), 10);
    }

    #[test]
    fn test_solve_needs_adjustment() {
        // Row and column reduction alone leave too few independent zeros.
        let rows = vec![
            vec![82, 83, 69, 92],
            vec![77, 37, 49, 92],
            vec![11, 69, 5, 86],
            vec![8, 9, 98, 23],
        ];
        let (assignment, _) = solve_rows(&rows);
        assert_permutation(&assignment);
        assert_eq!(assigned_total(&rows, &assignment), 140);
    }

    #[test]
    fn test_assigned_cells_are_zero_in_reduced_cost() {
        let rows = vec![vec![9, 2, 7, 8], vec![6, 4, 3, 7], vec![5, 8, 1, 8], vec![7, 6, 9, 4]];
        let (assignment, cost) = solve_rows(&rows);
        assert_eq!(assigned_total(&rows, &assignment), 13);
        for i in 0..4 {
            for j in 0..4 {
                assert!(cost[(i, j)] >= 0);
                if assignment[(i, j)] == 1 {
                    assert_eq!(cost[(i, j)], 0);
                }
            }
        }
    }

    #[test]
    fn test_tie_break_prefers_lowest_column() {
        let (assignment, _) = solve_rows(&[vec![0, 0], vec![0, 0]]);
        assert_eq!(assignment.to_rows(), vec![vec![1, 0], vec![0, 1]]);
    }

    #[test]
    fn test_negative_costs() {
        let rows = vec![vec![-5, 3], vec![2, -7]];
        let (assignment, _) = solve_rows(&rows);
        assert_eq!(assigned_total(&rows, &assignment), -12);
    }

    #[test]
    fn test_large_multiplication_table() {
        // Anti-diagonal is optimal: sum of k * (n + 1 - k) = n(n+1)(n+2)/6.
        let n = 200;
        let rows: Vec<Vec<i64>> = (1..=n)
            .map(|i| (1..=n).map(|j| i * j).collect())
            .collect();
        let (assignment, cost) = solve_rows(&rows);
        assert_permutation(&assignment);
        assert_eq!(assigned_total(&rows, &assignment), n * (n + 1) * (n + 2) / 6);
        for i in 0..n as usize {
            assert_eq!(assignment[(i, n as usize - 1 - i)], 1);
            assert_eq!(cost[(i, n as usize - 1 - i)], 0);
        }
    }

    #[test]
    fn test_full_i64_range() {
        let rows = vec![vec![i64::MIN, i64::MAX], vec![i64::MAX, i64::MIN]];
        let (assignment, cost) = solve_rows(&rows);
        assert_eq!(assignment.to_rows(), vec![vec![1, 0], vec![0, 1]]);
        assert_eq!(cost[(0, 0)], 0);
        assert_eq!(cost[(1, 1)], 0);
        // The off-diagonal reduced cost is 2^64 - 1 and is reported clamped.
        assert_eq!(cost[(0, 1)], i64::MAX);
    }

    #[test]
    fn test_near_max_costs_stay_exact() {
        let big = i64::MAX / 2;
        let rows = vec![
            vec![big, big - 3, big - 1],
            vec![big - 2, big, big - 5],
            vec![big - 4, big - 1, big],
        ];
        let (assignment, _) = solve_rows(&rows);
        assert_permutation(&assignment);
        let expected: i64 = brute_force_min(
            &rows
                .iter()
                .map(|r| r.iter().map(|c| c - (big - 5)).collect())
                .collect::<Vec<Vec<i64>>>(),
        );
        let total: i128 = (0..3)
            .flat_map(|i| (0..3).map(move |j| (i, j)))
            .filter(|&(i, j)| assignment[(i, j)] == 1)
            .map(|(i, j)| i128::from(rows[i][j] - (big - 5)))
            .sum();
        assert_eq!(total, i128::from(expected));
    }

    #[test]
    #[should_panic(expected = "square")]
    fn test_rejects_non_square() {
        let mut cost = Matrix::zeros(2, 3);
        solve(&mut cost);
    }

    fn square_matrix() -> impl Strategy<Value = Vec<Vec<i64>>> {
        (1usize..=6).prop_flat_map(|n| {
            prop::collection::vec(prop::collection::vec(-50i64..50, n), n)
        })
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force(rows in square_matrix()) {
            let (assignment, cost) = solve_rows(&rows);
            assert_permutation(&assignment);
            prop_assert_eq!(assigned_total(&rows, &assignment), brute_force_min(&rows));
            for i in 0..rows.len() {
                for j in 0..rows.len() {
                    prop_assert!(cost[(i, j)] >= 0);
                }
            }
        }
    }
}
