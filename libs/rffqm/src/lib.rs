//! # RFFQM
//!
//! Rigid-folding kinematics of generalized Miura-Ori crease patterns.
//!
//! A pattern is described by two boundary polylines whose vertices carry
//! the direction of the crease entering the sheet. The marching
//! construction fills in the interior crease grid so that every vertex is
//! rigid-foldable, and the folding simulation maps one activation angle to
//! the 3D position of every vertex.
//!
//! ## Architecture
//!
//! ```text
//! rffqm-grid (Boundary, Grid) → rffqm-march (MarchedPattern) → rffqm-fold (folded Grid)
//!                                         ╰──────── rffqm::Pattern ────────╯
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use rffqm::{MiuraParams, Pattern, SolverConfig};
//!
//! let boundary = MiuraParams::default().generate()?;
//! let mut pattern = Pattern::build(&boundary, SolverConfig::default())?;
//!
//! let folded = pattern.fold(90.0_f64.to_radians());
//! assert_eq!(folded.dimensions(), (4, 5));
//! # Ok::<(), rffqm::PatternError>(())
//! ```

pub mod error;
pub mod pattern;

pub use config::constants::SolverConfig;
pub use error::{PatternError, PatternResult};
pub use pattern::Pattern;
pub use rffqm_fold::{clamp_fold_angle, FoldError, FoldingSolver, Sigma};
pub use rffqm_grid::{center_points, Boundary, BoundaryError, BoundaryVertex, Grid, MiuraParams};
pub use rffqm_march::{
    IncompatibilityCause, IncompatibleGeometry, MarchedPattern, MarchingSolver, SolvedVertex,
};
