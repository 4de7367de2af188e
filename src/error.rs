//! Error taxonomy of the search and maze engine.
//!
//! Only conditions that abort a call live here. A search without both endpoints and a search that
//! exhausts its frontier are ordinary outcomes and are reported through
//! [`Outcome`](crate::search::Outcome) instead.

use thiserror::Error;

/// Failures raised by the grid model, the path reconstructor and the maze generator.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[expect(
    clippy::module_name_repetitions,
    reason = "The error type is re-exported at the crate root, where the suffix is meaningful."
)]
pub enum EngineError {
    /// A coordinate outside of the grid extent was requested.
    ///
    /// Coordinates are never clamped; the offending call is aborted instead.
    #[error("cell ({row}, {col}) lies outside of the {rows}x{cols} grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        cols: usize,
    },
    /// A random even or odd number was requested from a range without candidates.
    ///
    /// This signals broken recursion bounds in the maze generator.
    #[error("invalid range: no candidate between {from} and {to}")]
    InvalidRange {
        /// Inclusive lower bound.
        from: isize,
        /// Inclusive upper bound.
        to: isize,
    },
    /// A parent relation kept going for longer than the grid has cells.
    #[error("parent chain through ({row}, {col}) does not terminate")]
    BrokenParentChain {
        /// Row of the cell at which the walk was abandoned.
        row: usize,
        /// Column of the cell at which the walk was abandoned.
        col: usize,
    },
}
