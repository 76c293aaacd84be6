//! # March Errors
//!
//! Every geometric failure of the march is one [`IncompatibleGeometry`]
//! carrying the offending cell and an enumerated cause.
//!
//! ## Error Policy
//!
//! - The march stops at the first failure
//! - The same boundary always fails the same way; there is no retry

use thiserror::Error;

/// Why a boundary cannot be marched into a rigid-foldable grid.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IncompatibilityCause {
    /// The corner's beta angle solves negative.
    #[error("negative corner beta ({beta})")]
    NegativeCornerAngle {
        /// Solved corner beta.
        beta: f64,
    },

    /// A derived sector angle (or the cosine it is recovered from) leaves
    /// its valid range.
    #[error("{name} out of range: {value}")]
    AngleOutOfRange {
        /// Quantity that left its range.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// The denominator of a compatibility ratio is too close to zero.
    #[error("singular compatibility ratio: denominator {denominator}")]
    SingularCompatibilityRatio {
        /// Offending denominator.
        denominator: f64,
    },

    /// The product of the three compatibility ratios has unit magnitude.
    #[error("near-degenerate vertex: |mu| = {mu} is close to 1")]
    NearDegenerateVertex {
        /// Product of the ratios.
        mu: f64,
    },

    /// The sine of the three known sector angles' sum is too close to zero.
    #[error("singular planar geometry: sin(angle sum) = {determinant}")]
    SingularPlanarGeometry {
        /// Offending determinant.
        determinant: f64,
    },

    /// A crease length solves to zero or less.
    #[error("non-positive crease length {edge} = {length}")]
    NonPositiveCreaseLength {
        /// Crease name, e.g. `"CD"`.
        edge: &'static str,
        /// Solved length.
        length: f64,
    },
}

/// A geometric incompatibility located at one grid cell.
///
/// ## Example
///
/// ```rust
/// use rffqm_march::{IncompatibilityCause, IncompatibleGeometry};
///
/// let err = IncompatibleGeometry::at(0, 0, IncompatibilityCause::NegativeCornerAngle { beta: -0.5 });
/// assert_eq!(err.to_string(), "Incompatible geometry at (0, 0): negative corner beta (-0.5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Incompatible geometry at ({row}, {column}): {cause}")]
pub struct IncompatibleGeometry {
    /// Grid row of the offending vertex.
    pub row: usize,
    /// Grid column of the offending vertex.
    pub column: usize,
    /// What went wrong.
    pub cause: IncompatibilityCause,
}

impl IncompatibleGeometry {
    /// Creates an incompatibility at `(row, column)`.
    pub fn at(row: usize, column: usize, cause: IncompatibilityCause) -> Self {
        Self { row, column, cause }
    }
}

/// Result type alias for the march.
pub type MarchResult<T> = Result<T, IncompatibleGeometry>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IncompatibleGeometry::at(
            2,
            3,
            IncompatibilityCause::NonPositiveCreaseLength {
                edge: "BD",
                length: -0.25,
            },
        );
        let message = err.to_string();
        assert!(message.contains("(2, 3)"));
        assert!(message.contains("BD = -0.25"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IncompatibleGeometry>();
    }
}
