//! # RFFQM March
//!
//! Marching construction of a rigid-foldable quadrilateral mesh: given the
//! horizontal and vertical boundary polylines (positions and ray angles),
//! solve the position and the two sector angles of every interior vertex.
//!
//! Vertices are solved strictly in row-major order because each one depends
//! on its left, lower and lower-left neighbours. The first geometric
//! incompatibility aborts the march and no partial grid is returned.
//!
//! ## Example
//!
//! ```rust
//! use rffqm_grid::MiuraParams;
//! use rffqm_march::MarchingSolver;
//!
//! let boundary = MiuraParams::default().generate().unwrap();
//! let pattern = MarchingSolver::new(&boundary).unwrap().finish().unwrap();
//! assert_eq!(pattern.grid().dimensions(), (4, 5));
//! ```

pub mod compatibility;
pub mod error;
pub mod solver;

pub use error::{IncompatibilityCause, IncompatibleGeometry, MarchResult};
pub use solver::{MarchedPattern, MarchingSolver, SolvedVertex};
