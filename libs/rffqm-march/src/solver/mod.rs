//! # Marching Solver
//!
//! Seeds row 0 and column 0 from the boundary, then solves every interior
//! vertex `(i, j)` from its three solved neighbours
//!
//! ```text
//! B = (i, j-1) ── D = (i, j)
//!      │             │
//! A = (i-1, j-1) ── C = (i-1, j)
//! ```
//!
//! in row-major order: first the position of `D` (closing the planar
//! quadrilateral `A, B, D, C`), then its two sector angles (closing the
//! rigid-foldability condition of the degree-4 vertex).

use std::f64::consts::{PI, TAU};

use config::constants::{SolverConfig, DEFAULT_SIGMA, MIN_EDGE_LENGTH};
use glam::DVec3;
use log::{debug, trace, warn};
use rffqm_grid::angles::{heading, is_sector_angle, rotate_in_plane, supplement, wrap_to_tau};
use rffqm_grid::{Boundary, Grid};

use crate::compatibility::{crease_lengths, fourth_sector_beta, ratio, ratio_supplementary};
use crate::error::{IncompatibilityCause, IncompatibleGeometry, MarchResult};

/// One interior vertex as it is solved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolvedVertex {
    /// Grid row.
    pub row: usize,
    /// Grid column.
    pub column: usize,
    /// Solved position in the z=0 plane.
    pub position: DVec3,
    /// Solved alpha sector angle.
    pub alpha: f64,
    /// Solved beta sector angle.
    pub beta: f64,
}

/// The flat crease grid produced by a successful march.
#[derive(Debug, Clone, PartialEq)]
pub struct MarchedPattern {
    grid: Grid<DVec3>,
    alpha: Grid<f64>,
    beta: Grid<f64>,
}

impl MarchedPattern {
    /// Vertex positions.
    #[inline]
    pub fn grid(&self) -> &Grid<DVec3> {
        &self.grid
    }

    /// Alpha sector angle of every vertex.
    #[inline]
    pub fn alpha(&self) -> &Grid<f64> {
        &self.alpha
    }

    /// Beta sector angle of every vertex.
    #[inline]
    pub fn beta(&self) -> &Grid<f64> {
        &self.beta
    }

    /// Number of grid rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of grid columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Takes the vertex positions, dropping the angles.
    pub fn into_grid(self) -> Grid<DVec3> {
        self.grid
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum MarchState {
    Running { row: usize, column: usize },
    Complete,
    Failed(IncompatibleGeometry),
}

/// Incremental marching construction over one boundary.
///
/// # Example
///
/// ```rust
/// use rffqm_grid::MiuraParams;
/// use rffqm_march::MarchingSolver;
///
/// let boundary = MiuraParams::default().generate().unwrap();
/// let mut solver = MarchingSolver::new(&boundary).unwrap();
///
/// let first = solver.step().unwrap().unwrap();
/// assert_eq!((first.row, first.column), (1, 1));
///
/// let pattern = solver.finish().unwrap();
/// assert_eq!(pattern.rows(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct MarchingSolver {
    config: SolverConfig,
    dots: Grid<DVec3>,
    alpha: Grid<f64>,
    beta: Grid<f64>,
    state: MarchState,
}

impl MarchingSolver {
    /// Prepares a march with the default tolerances.
    pub fn new(boundary: &Boundary) -> MarchResult<Self> {
        Self::with_config(boundary, SolverConfig::default())
    }

    /// Prepares a march: seeds the boundary positions and derives the
    /// boundary sector angles.
    ///
    /// # Errors
    ///
    /// Fails with [`IncompatibilityCause::NegativeCornerAngle`] when the
    /// corner ray points below the vertical arm, and with
    /// [`IncompatibilityCause::AngleOutOfRange`] when any boundary angle
    /// leaves `[0, π]`.
    pub fn with_config(boundary: &Boundary, config: SolverConfig) -> MarchResult<Self> {
        let (rows, cols) = (boundary.rows(), boundary.cols());
        debug!("Starting march of a {rows}x{cols} grid");

        let (alpha, beta) = boundary_angles(boundary).map_err(abort)?;
        debug!(
            "Corner angles: alpha = {:.6}, beta = {:.6}",
            alpha[(0, 0)],
            beta[(0, 0)]
        );

        let mut dots = Grid::filled(rows, cols, DVec3::ZERO);
        for (column, vertex) in boundary.horizontal().iter().enumerate() {
            dots[(0, column)] = vertex.position;
        }
        for (index, vertex) in boundary.vertical().iter().enumerate() {
            dots[(index + 1, 0)] = vertex.position;
        }

        Ok(Self {
            config,
            dots,
            alpha,
            beta,
            state: MarchState::Running { row: 1, column: 1 },
        })
    }

    /// Runs a complete march.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::SolverConfig;
    /// use rffqm_grid::MiuraParams;
    /// use rffqm_march::MarchingSolver;
    ///
    /// let boundary = MiuraParams::default().generate().unwrap();
    /// let pattern = MarchingSolver::solve(&boundary, SolverConfig::default()).unwrap();
    /// assert_eq!(pattern.grid()[(0, 2)], boundary.horizontal()[2].position);
    /// ```
    pub fn solve(boundary: &Boundary, config: SolverConfig) -> MarchResult<MarchedPattern> {
        Self::with_config(boundary, config)?.finish()
    }

    /// Solves the next interior vertex in march order.
    ///
    /// Returns `Ok(None)` once every vertex is solved. After a failure
    /// every further call returns the same error.
    pub fn step(&mut self) -> MarchResult<Option<SolvedVertex>> {
        let (row, column) = match self.state {
            MarchState::Running { row, column } => (row, column),
            MarchState::Complete => return Ok(None),
            MarchState::Failed(err) => return Err(err),
        };

        let (alpha, beta) = match self.solve_vertex(row, column) {
            Ok(angles) => angles,
            Err(cause) => {
                let err = abort(IncompatibleGeometry::at(row, column, cause));
                self.state = MarchState::Failed(err);
                return Err(err);
            }
        };
        self.alpha[(row, column)] = alpha;
        self.beta[(row, column)] = beta;

        let vertex = SolvedVertex {
            row,
            column,
            position: self.dots[(row, column)],
            alpha,
            beta,
        };
        trace!(
            "Solved ({row}, {column}): position = {}, alpha = {alpha:.6}, beta = {beta:.6}",
            vertex.position
        );

        self.state = self.next_state(row, column);
        if self.is_complete() {
            debug!("March complete: {} vertices", self.dots.len());
        }
        Ok(Some(vertex))
    }

    /// Solves every remaining vertex and returns the finished pattern.
    pub fn finish(mut self) -> MarchResult<MarchedPattern> {
        while self.step()?.is_some() {}
        Ok(MarchedPattern {
            grid: self.dots,
            alpha: self.alpha,
            beta: self.beta,
        })
    }

    /// True once every interior vertex is solved.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, MarchState::Complete)
    }

    /// Tolerances in use.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn next_state(&self, row: usize, column: usize) -> MarchState {
        if column + 1 < self.dots.cols() {
            MarchState::Running {
                row,
                column: column + 1,
            }
        } else if row + 1 < self.dots.rows() {
            MarchState::Running {
                row: row + 1,
                column: 1,
            }
        } else {
            MarchState::Complete
        }
    }

    /// Position step, then angle step. The position is stored before the
    /// angles are solved.
    fn solve_vertex(&mut self, row: usize, column: usize) -> Result<(f64, f64), IncompatibilityCause> {
        let position = self.calc_next_vertex(row, column)?;
        self.dots[(row, column)] = position;
        self.calc_next_angle(row, column)
    }

    /// Position of `D` from the quadrilateral `A, B, D, C`.
    fn calc_next_vertex(&self, row: usize, column: usize) -> Result<DVec3, IncompatibilityCause> {
        let a = self.dots[(row - 1, column - 1)];
        let b = self.dots[(row, column - 1)];
        let c = self.dots[(row - 1, column)];

        let alpha_a = self.alpha[(row - 1, column - 1)];
        let alpha_b = supplement(self.beta[(row, column - 1)]);
        let alpha_c = self.beta[(row - 1, column)];

        let l_ab = a.distance(b);
        let l_ac = a.distance(c);
        for (edge, length) in [("AB", l_ab), ("AC", l_ac)] {
            if length < MIN_EDGE_LENGTH {
                return Err(IncompatibilityCause::NonPositiveCreaseLength { edge, length });
            }
        }

        let (l_cd, _) = crease_lengths(
            alpha_a,
            alpha_b,
            alpha_c,
            l_ab,
            l_ac,
            self.config.planar_determinant_epsilon,
        )?;

        let direction = rotate_in_plane((a - c) / l_ac, -alpha_c);
        Ok(c + direction * l_cd)
    }

    /// Sector angles of `D` from the angles at `A`, `B` and `C`.
    fn calc_next_angle(&self, row: usize, column: usize) -> Result<(f64, f64), IncompatibilityCause> {
        let alpha_a = self.alpha[(row - 1, column - 1)];
        let beta_a = self.beta[(row - 1, column - 1)];
        let alpha_b = supplement(self.beta[(row, column - 1)]);
        let beta_b = supplement(self.alpha[(row, column - 1)]);
        let alpha_c = self.beta[(row - 1, column)];
        let beta_c = self.alpha[(row - 1, column)];

        let angle_sum = alpha_a + alpha_b + alpha_c;
        let alpha_d = TAU - angle_sum;
        if !is_sector_angle(alpha_d) {
            return Err(IncompatibilityCause::AngleOutOfRange {
                name: "alpha_d",
                value: alpha_d,
            });
        }

        // Every vertex is assumed to carry the Miura-Ori crease sign
        let sigma = DEFAULT_SIGMA;
        let epsilon = self.config.mu_denominator_epsilon;
        let mu = ratio_supplementary(alpha_a, beta_a, -sigma, epsilon)?
            * ratio(alpha_b, beta_b, sigma, epsilon)?
            * ratio(alpha_c, beta_c, sigma, epsilon)?;
        if (mu.abs() - 1.0).abs() < self.config.degenerate_mu_epsilon {
            return Err(IncompatibilityCause::NearDegenerateVertex { mu });
        }

        let beta_d = fourth_sector_beta(mu, angle_sum)?;
        Ok((supplement(alpha_d), supplement(beta_d)))
    }
}

fn abort(err: IncompatibleGeometry) -> IncompatibleGeometry {
    warn!("March aborted: {err}");
    err
}

/// Derives the sector angles of row 0 and column 0 from the ray angles.
fn boundary_angles(boundary: &Boundary) -> MarchResult<(Grid<f64>, Grid<f64>)> {
    let (rows, cols) = (boundary.rows(), boundary.cols());
    let horizontal = boundary.horizontal();
    let vertical = boundary.vertical();
    let mut alpha = Grid::filled(rows, cols, 0.0);
    let mut beta = Grid::filled(rows, cols, 0.0);

    let corner = boundary.corner();
    let up = heading(corner.position, vertical[0].position);
    let right = heading(corner.position, horizontal[1].position);
    alpha[(0, 0)] = up - right;
    beta[(0, 0)] = corner.ray_angle - up;
    if beta[(0, 0)] < 0.0 {
        return Err(IncompatibleGeometry::at(
            0,
            0,
            IncompatibilityCause::NegativeCornerAngle { beta: beta[(0, 0)] },
        ));
    }

    for column in 1..cols {
        let vertex = &horizontal[column];
        let previous = heading(vertex.position, horizontal[column - 1].position);
        let b = wrap_to_tau(previous) - vertex.ray_angle;
        beta[(0, column)] = b;
        alpha[(0, column)] = match horizontal.get(column + 1) {
            Some(next) => vertex.ray_angle - heading(vertex.position, next.position),
            None => b,
        };
    }

    for row in 1..rows {
        let vertex = &vertical[row - 1];
        let lower = heading(vertex.position, boundary.column_position(row - 1));
        let b = PI - (vertex.ray_angle - lower);
        beta[(row, 0)] = b;
        alpha[(row, 0)] = match vertical.get(row) {
            Some(upper) => heading(vertex.position, upper.position) - vertex.ray_angle,
            None => b,
        };
    }

    let on_boundary = alpha
        .indexed_iter()
        .filter(|((row, column), _)| *row == 0 || *column == 0);
    for ((row, column), &a) in on_boundary {
        for (name, value) in [("alpha", a), ("beta", beta[(row, column)])] {
            if !is_sector_angle(value) {
                return Err(IncompatibleGeometry::at(
                    row,
                    column,
                    IncompatibilityCause::AngleOutOfRange { name, value },
                ));
            }
        }
    }

    Ok((alpha, beta))
}
