//! # RFFQM Fold
//!
//! Rigid folding of a flat quadrilateral crease grid. A single activation
//! angle `gamma` drives the fold: the crease angles of every interior
//! vertex follow from it through the degree-4 vertex relations, and the
//! grid is folded by rigid rotations about its flat creases.
//!
//! ## Example
//!
//! ```rust
//! use rffqm_fold::FoldingSolver;
//! use rffqm_grid::MiuraParams;
//! use rffqm_march::MarchingSolver;
//!
//! let boundary = MiuraParams::default().generate().unwrap();
//! let flat = MarchingSolver::new(&boundary).unwrap().finish().unwrap().into_grid();
//!
//! let mut solver = FoldingSolver::new(flat).unwrap();
//! let folded = solver.set_fold_angle(1.0);
//! assert!(folded.cells().iter().any(|p| p.z.abs() > 0.1));
//! ```

pub mod crease;
pub mod error;
pub mod relations;
pub mod sigma;
pub mod solver;

pub use crease::{CellRegion, Crease};
pub use error::{FoldError, FoldResult};
pub use relations::CreaseAngles;
pub use sigma::Sigma;
pub use solver::{clamp_fold_angle, FoldingSolver, InternalAngle};
