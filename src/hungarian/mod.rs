//! Hungarian method (Kuhn–Munkres) for rectangular assignment problems.
//!
//! Pairs rows with columns one-to-one so that the total of the chosen
//! cells is minimal (costs) or maximal (utilities). A problem goes through
//! three phases:
//!
//! - [`normalize`]: pad to square with zero dummies; turn utilities into
//!   costs as `max - c`
//! - [`solve`]: reduce, then augment one row at a time along least-slack
//!   alternating paths until the zeros hold a perfect matching
//! - [`build`]: report real pairs and the total over the original values
//!
//! [`HungarianRunner`] drives all three.
//!
//! # References
//!
//! - Kuhn, H. W. (1955). "The Hungarian Method for the Assignment Problem"
//! - Munkres, J. (1957). "Algorithms for the Assignment and Transportation Problems"
//! - Bourgeois & Lassalle (1971), "An Extension of the Munkres Algorithm
//!   for the Assignment Problem to Rectangular Matrices"

mod config;
mod normalize;
mod result;
mod runner;
mod solver;
mod types;

pub use config::{HungarianConfig, Mode};
pub use normalize::{normalize, Normalized};
pub use result::{build, AssignmentResult};
pub use runner::HungarianRunner;
pub use solver::solve;
pub use types::Matrix;
