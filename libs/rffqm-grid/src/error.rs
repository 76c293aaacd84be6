//! # Grid Errors
//!
//! Structural errors raised while assembling grids and boundaries.

use thiserror::Error;

use crate::boundary::Arm;

/// Errors raised when building a [`Grid`](crate::Grid) from nested rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows or no columns were supplied.
    #[error("Grid must have at least one row and one column")]
    Empty,

    /// A row does not have the same length as the first one.
    #[error("Ragged grid: row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A serialized grid does not hold `rows * cols` cells.
    #[error("Grid buffer holds {found} cells, expected {expected}")]
    CellCount {
        /// `rows * cols`.
        expected: usize,
        /// Cells present in the buffer.
        found: usize,
    },
}

/// Errors raised when a boundary cannot describe a crease grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoundaryError {
    /// An arm is too short to span a grid of at least 2×2 vertices.
    #[error("{arm} boundary has {count} vertices, needs at least {min}")]
    TooFewVertices {
        /// Arm that is too short.
        arm: Arm,
        /// Number of vertices supplied.
        count: usize,
        /// Minimum accepted.
        min: usize,
    },

    /// A position coordinate or ray angle is NaN or infinite.
    #[error("{arm} boundary vertex {index} is not finite")]
    NonFinite {
        /// Arm holding the vertex.
        arm: Arm,
        /// Index of the vertex within the arm.
        index: usize,
    },

    /// A generator parameter is outside its valid range.
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
}
