//! # Folding Solver
//!
//! Folds a flat grid to a given activation angle `gamma`. The fold is
//! rebuilt from the flat state on every call:
//!
//! 1. The first interior row propagates `gamma` left to right and folds
//!    the bottom strip down about each `(1, j) → (0, j)` crease.
//! 2. Every interior row `i` propagates its fold angles left to right,
//!    folds row `i + 1` about each `(i, j) → (i + 1, j)` crease, then
//!    folds everything up to row `i` about the last crease of the row.
//! 3. The next row is seeded through the "up" relation at `(i + 1, 1)`.

use std::f64::consts::PI;

use config::constants::{MAX_FOLD_ANGLE_DEGREES, MIN_EDGE_LENGTH};
use glam::DVec3;
use log::debug;
use rffqm_grid::Grid;

use crate::crease::{CellRegion, Crease};
use crate::error::{FoldError, FoldResult};
use crate::relations::CreaseAngles;
use crate::sigma::Sigma;

/// Sector angles of an interior vertex, measured on the flat grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InternalAngle {
    /// Between the `+column` and `+row` creases.
    pub alpha: f64,
    /// Between the `+row` and `−column` creases.
    pub beta: f64,
}

/// Pulls a fold angle whose magnitude reaches `π` back to the practical
/// ceiling, where the crease relations still have a unique answer.
///
/// # Example
///
/// ```rust
/// use rffqm_fold::clamp_fold_angle;
///
/// assert_eq!(clamp_fold_angle(1.0), 1.0);
/// assert_eq!(clamp_fold_angle(-4.0), -179.9_f64.to_radians());
/// ```
pub fn clamp_fold_angle(gamma: f64) -> f64 {
    if gamma.abs() >= PI {
        MAX_FOLD_ANGLE_DEGREES.to_radians().copysign(gamma)
    } else {
        gamma
    }
}

/// Rigid folding of one flat grid.
///
/// The solver owns the flat baseline and the folded copy it hands out.
/// Clone it to fold the same grid from several threads.
#[derive(Debug, Clone)]
pub struct FoldingSolver {
    flat: Grid<DVec3>,
    sigma: Grid<Sigma>,
    /// Indexed from the first interior vertex, `(row - 1, col - 1)`.
    angles: Grid<InternalAngle>,
    dots: Grid<DVec3>,
    gamma: f64,
}

impl FoldingSolver {
    /// Prepares a fold with the Miura-Ori sign at every vertex.
    pub fn new(flat: Grid<DVec3>) -> FoldResult<Self> {
        let sigma = Grid::filled(flat.rows(), flat.cols(), Sigma::default());
        Self::with_sigma(flat, sigma)
    }

    /// Prepares a fold with an explicit sign per vertex.
    ///
    /// # Errors
    ///
    /// [`FoldError::DimensionMismatch`] when `sigma` is not shaped like
    /// `flat`, and [`FoldError::DegenerateCrease`] when a crease around an
    /// interior vertex is shorter than
    /// [`MIN_EDGE_LENGTH`](config::constants::MIN_EDGE_LENGTH).
    pub fn with_sigma(flat: Grid<DVec3>, sigma: Grid<Sigma>) -> FoldResult<Self> {
        if !flat.same_shape(&sigma) {
            return Err(FoldError::DimensionMismatch {
                rows: flat.rows(),
                cols: flat.cols(),
                sigma_rows: sigma.rows(),
                sigma_cols: sigma.cols(),
            });
        }

        let angles = internal_angles(&flat)?;
        debug!(
            "Built folding solver for a {}x{} grid ({} interior vertices)",
            flat.rows(),
            flat.cols(),
            angles.len()
        );

        Ok(Self {
            dots: flat.clone(),
            flat,
            sigma,
            angles,
            gamma: 0.0,
        })
    }

    /// The unfolded grid.
    #[inline]
    pub fn flat(&self) -> &Grid<DVec3> {
        &self.flat
    }

    /// Crease signs.
    #[inline]
    pub fn sigma(&self) -> &Grid<Sigma> {
        &self.sigma
    }

    /// Folded positions at the last requested angle.
    #[inline]
    pub fn points(&self) -> &Grid<DVec3> {
        &self.dots
    }

    /// Last requested fold angle.
    #[inline]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Flat sector angles of the interior vertex at `(row, col)`, or `None`
    /// for a boundary vertex.
    pub fn internal_angle(&self, row: usize, col: usize) -> Option<InternalAngle> {
        if row == 0 || col == 0 {
            return None;
        }
        self.angles.get(row - 1, col - 1).copied()
    }

    /// Folds the grid to `gamma` radians and returns the folded positions.
    ///
    /// Zero reproduces the flat grid; `-gamma` mirrors `gamma` through the
    /// flat plane.
    pub fn set_fold_angle(&mut self, gamma: f64) -> &Grid<DVec3> {
        debug!("Folding to gamma = {gamma:.6}");
        self.gamma = gamma;
        self.dots.copy_from(&self.flat);

        let (rows, cols) = self.flat.dimensions();
        if rows < 3 || cols < 3 {
            return &self.dots;
        }

        let mut initial_gamma2 = self.right(1, 1, gamma).gamma2;

        // Bottom strip
        let mut current_gamma1 = gamma;
        for col in 1..cols - 1 {
            let angles = self.right(1, col, current_gamma1);
            current_gamma1 = angles.gamma1;
            self.rotate((1, col), (0, col), CellRegion::new(0..2, 0..col), angles.gamma4);
        }

        current_gamma1 = gamma;
        for row in 1..rows - 1 {
            for col in 1..cols - 1 {
                let angles = self.right(row, col, current_gamma1);
                current_gamma1 = angles.gamma1;
                self.rotate(
                    (row, col),
                    (row + 1, col),
                    CellRegion::new(row + 1..row + 2, 0..col),
                    -angles.gamma2,
                );
            }
            self.rotate(
                (row, cols - 2),
                (row, cols - 1),
                CellRegion::new(0..row + 1, 0..cols),
                current_gamma1,
            );

            if row == rows - 2 {
                break;
            }
            let angles = self.up(row + 1, 1, initial_gamma2);
            initial_gamma2 = angles.gamma2;
            current_gamma1 = angles.gamma3;
        }

        &self.dots
    }

    /// Folds a copy of the grid to each of `angles`, e.g. the frames of a
    /// fold animation. `self` is left untouched.
    pub fn sample(&self, angles: &[f64]) -> Vec<Grid<DVec3>> {
        debug!("Sampling {} fold angles", angles.len());

        #[cfg(feature = "parallel")]
        {
            use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
            angles
                .par_iter()
                .map_init(|| self.clone(), |solver, &gamma| solver.set_fold_angle(gamma).clone())
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            let mut solver = self.clone();
            angles
                .iter()
                .map(|&gamma| solver.set_fold_angle(gamma).clone())
                .collect()
        }
    }

    fn right(&self, row: usize, col: usize, seed: f64) -> CreaseAngles {
        let InternalAngle { alpha, beta } = self.angles[(row - 1, col - 1)];
        CreaseAngles::right(alpha, beta, self.sigma[(row, col)].value(), seed)
    }

    fn up(&self, row: usize, col: usize, seed: f64) -> CreaseAngles {
        let InternalAngle { alpha, beta } = self.angles[(row - 1, col - 1)];
        CreaseAngles::up(alpha, beta, self.sigma[(row, col)].value(), seed)
    }

    fn rotate(&mut self, from: (usize, usize), to: (usize, usize), region: CellRegion, angle: f64) {
        Crease::between(&self.flat, from, to).rotate(&mut self.dots, &region, angle);
    }
}

/// Measures the sector angles of every interior vertex, rejecting creases
/// too short to define a direction.
fn internal_angles(flat: &Grid<DVec3>) -> FoldResult<Grid<InternalAngle>> {
    let interior_rows = flat.rows().saturating_sub(2);
    let interior_cols = flat.cols().saturating_sub(2);
    let mut angles = Grid::filled(interior_rows, interior_cols, InternalAngle::default());

    for row in 1..=interior_rows {
        for col in 1..=interior_cols {
            let origin = flat[(row, col)];
            let next_col = flat[(row, col + 1)] - origin;
            let next_row = flat[(row + 1, col)] - origin;
            let prev_col = flat[(row, col - 1)] - origin;
            let prev_row = flat[(row - 1, col)] - origin;

            for edge in [next_col, next_row, prev_col, prev_row] {
                let length = edge.length();
                if !(length >= MIN_EDGE_LENGTH) {
                    return Err(FoldError::DegenerateCrease {
                        row,
                        column: col,
                        length,
                    });
                }
            }

            angles[(row - 1, col - 1)] = InternalAngle {
                alpha: next_col.angle_between(next_row),
                beta: next_row.angle_between(prev_col),
            };
        }
    }
    Ok(angles)
}
