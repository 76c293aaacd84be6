//! # Config Crate
//!
//! Centralized configuration constants for the rigid-folding pipeline.
//! Every tolerance used by the marching construction and the folding
//! simulation, plus the Miura-Ori generator defaults, is defined here so the
//! numeric kernels never carry bare literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{SolverConfig, PLANAR_DETERMINANT_EPSILON};
//!
//! let det: f64 = (std::f64::consts::PI).sin();
//! assert!(det.abs() < PLANAR_DETERMINANT_EPSILON);
//!
//! let cfg = SolverConfig::default();
//! assert_eq!(cfg.planar_determinant_epsilon, PLANAR_DETERMINANT_EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain `std`, usable from every crate
//! - **Validated Overrides**: Custom tolerances go through `SolverConfig::new`

pub mod constants;

#[cfg(test)]
mod tests;
