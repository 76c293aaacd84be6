//! # RFFQM Grid
//!
//! Data model shared by the marching construction and the folding
//! simulation of rigid-foldable quadrilateral meshes (generalized Miura-Ori).
//!
//! ## Architecture
//!
//! ```text
//! Boundary (two polylines) → rffqm-march (flat Grid) → rffqm-fold (folded Grid)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rffqm_grid::{MiuraParams, Grid};
//!
//! let boundary = MiuraParams::default().generate().unwrap();
//! assert_eq!((boundary.rows(), boundary.cols()), (4, 5));
//!
//! let grid = Grid::filled(boundary.rows(), boundary.cols(), 0.0_f64);
//! assert_eq!(grid.len(), 20);
//! ```

pub mod angles;
pub mod boundary;
pub mod error;
pub mod grid;
pub mod miura;

pub use boundary::{Arm, Boundary, BoundaryVertex};
pub use error::{BoundaryError, GridError};
pub use grid::{center_points, Grid};
pub use miura::MiuraParams;
