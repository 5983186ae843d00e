//! Error types for assignment solving.

use thiserror::Error;

/// Result type alias using this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or solving an assignment problem.
///
/// None of these are fatal to the caller: [`HungarianRunner`] and the
/// [`boundary`] entry points report them as `success = false`.
///
/// [`HungarianRunner`]: crate::hungarian::HungarianRunner
/// [`boundary`]: crate::boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The matrix has no rows or no columns, so no pairing exists.
    #[error("Empty matrix: {rows} x {cols} has no assignable cells")]
    EmptyMatrix {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// A row's length differs from the first row's length.
    #[error("Ragged matrix: row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        /// Index of the offending row (0-based)
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// An intermediate or final value does not fit in `i64`.
    #[error("Integer overflow while {0}")]
    Overflow(&'static str),
}
