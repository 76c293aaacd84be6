//! # Pattern
//!
//! A marched crease pattern together with the solver that folds it.

use config::constants::SolverConfig;
use glam::DVec3;
use log::debug;
use rffqm_fold::{clamp_fold_angle, FoldingSolver, Sigma};
use rffqm_grid::{center_points, Boundary, Grid, MiuraParams};
use rffqm_march::{MarchedPattern, MarchingSolver};

use crate::error::PatternResult;

/// A rigid-foldable crease pattern built from a boundary.
///
/// # Example
///
/// ```rust
/// use rffqm::{MiuraParams, Pattern};
///
/// let mut pattern = Pattern::from_miura(&MiuraParams::default()).unwrap();
/// let flat = pattern.flat().clone();
/// assert_eq!(pattern.fold(0.0), &flat);
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    marched: MarchedPattern,
    solver: FoldingSolver,
}

impl Pattern {
    /// Marches `boundary` and prepares the fold with Miura-Ori signs.
    pub fn build(boundary: &Boundary, config: SolverConfig) -> PatternResult<Self> {
        let marched = MarchingSolver::solve(boundary, config)?;
        let solver = FoldingSolver::new(marched.grid().clone())?;
        debug!("Built {}x{} pattern", marched.rows(), marched.cols());
        Ok(Self { marched, solver })
    }

    /// Generates a regular Miura-Ori boundary and builds it with the
    /// default tolerances.
    pub fn from_miura(params: &MiuraParams) -> PatternResult<Self> {
        Self::build(&params.generate()?, SolverConfig::default())
    }

    /// Replaces the crease signs.
    pub fn with_sigma(mut self, sigma: Grid<Sigma>) -> PatternResult<Self> {
        self.solver = FoldingSolver::with_sigma(self.marched.grid().clone(), sigma)?;
        Ok(self)
    }

    /// Folds to `gamma` radians, pulled back below a half turn by
    /// [`clamp_fold_angle`].
    pub fn fold(&mut self, gamma: f64) -> &Grid<DVec3> {
        self.solver.set_fold_angle(clamp_fold_angle(gamma))
    }

    /// Folds to `gamma` and centres the result on the origin.
    pub fn fold_centered(&mut self, gamma: f64) -> Grid<DVec3> {
        let mut points = self.fold(gamma).clone();
        center_points(&mut points);
        points
    }

    /// Folds a copy of the pattern to each of `angles`, clamping each one.
    pub fn sample(&self, angles: &[f64]) -> Vec<Grid<DVec3>> {
        let clamped: Vec<f64> = angles.iter().copied().map(clamp_fold_angle).collect();
        self.solver.sample(&clamped)
    }

    /// The flat grid with its sector angles.
    #[inline]
    pub fn marched(&self) -> &MarchedPattern {
        &self.marched
    }

    /// The flat vertex positions.
    #[inline]
    pub fn flat(&self) -> &Grid<DVec3> {
        self.marched.grid()
    }

    /// The folding solver.
    #[inline]
    pub fn solver(&self) -> &FoldingSolver {
        &self.solver
    }
}
