//! Optimal linear assignment with the Hungarian (Kuhn–Munkres) method.
//!
//! Given an integer matrix relating agents (rows) to tasks (columns), finds
//! the one-to-one pairing with the smallest total cost or the largest
//! total utility. Rectangular matrices are padded with zero dummies, so
//! exactly `min(rows, cols)` real pairs are produced.
//!
//! - [`hungarian`]: the solver pipeline over a typed [`Matrix`]
//! - [`boundary`]: the two host-facing entry points,
//!   [`minimize_cost`] and [`maximize_utility`], taking nested rows and
//!   returning a 1-based [`Outcome`]
//!
//! Every call is a fresh, synchronous computation with no shared state.
//! Diagnostics go through the `log` facade; installing a logger is up to
//! the caller.
//!
//! # Examples
//!
//! ```
//! use u_assign::minimize_cost;
//!
//! let outcome = minimize_cost(&[vec![4, 1, 3], vec![2, 0, 5], vec![3, 2, 2]]);
//! assert!(outcome.success);
//! assert_eq!(outcome.total_cost, 5);
//! assert_eq!(outcome.assignment_map.get(&1), Some(&2));
//! ```
//!
//! [`Matrix`]: hungarian::Matrix

pub mod boundary;
pub mod error;
pub mod hungarian;

pub use boundary::{maximize_utility, minimize_cost, Outcome};
pub use error::{Error, Result};
