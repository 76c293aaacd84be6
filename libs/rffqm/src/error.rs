//! # Pipeline Errors
//!
//! One error type for the whole boundary → march → fold chain.

use thiserror::Error;

/// Errors raised while building a [`Pattern`](crate::Pattern).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    /// The boundary itself is malformed.
    #[error("Invalid boundary: {0}")]
    Boundary(#[from] rffqm_grid::BoundaryError),

    /// The boundary cannot be marched into a rigid-foldable grid.
    #[error(transparent)]
    Incompatible(#[from] rffqm_march::IncompatibleGeometry),

    /// The marched grid or the sign grid cannot be folded.
    #[error("Cannot fold: {0}")]
    Fold(#[from] rffqm_fold::FoldError),
}

/// Result type alias for the pipeline.
pub type PatternResult<T> = Result<T, PatternError>;
