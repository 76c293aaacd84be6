//! # Fold Errors
//!
//! Folding itself cannot fail; only an ill-formed input grid is rejected
//! when a [`FoldingSolver`](crate::FoldingSolver) is built.

use thiserror::Error;

/// Errors raised while preparing a fold.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FoldError {
    /// The sign grid does not have the shape of the point grid.
    #[error("Sigma grid is {sigma_rows}x{sigma_cols}, expected {rows}x{cols}")]
    DimensionMismatch {
        /// Rows of the point grid.
        rows: usize,
        /// Columns of the point grid.
        cols: usize,
        /// Rows of the sign grid.
        sigma_rows: usize,
        /// Columns of the sign grid.
        sigma_cols: usize,
    },

    /// A crease next to an interior vertex has (almost) no length.
    #[error("Degenerate crease at ({row}, {column}): length {length}")]
    DegenerateCrease {
        /// Row of the interior vertex.
        row: usize,
        /// Column of the interior vertex.
        column: usize,
        /// Length of the crease.
        length: f64,
    },
}

/// Result type alias for fold preparation.
pub type FoldResult<T> = Result<T, FoldError>;
