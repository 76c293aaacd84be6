//! Centralized configuration values shared across the rigid-folding pipeline.
//!
//! ## Categories
//!
//! - **Marching tolerances**: singularity thresholds of the construction
//! - **Folding**: flat-state tolerance, fold-angle ceiling, crease sign
//! - **Miura-Ori defaults**: parameters of the boundary generator

use std::fmt;

// =============================================================================
// MARCHING TOLERANCES
// =============================================================================

/// Smallest magnitude accepted for the denominator of a compatibility ratio.
///
/// # Examples
/// ```
/// use config::constants::MU_DENOMINATOR_EPSILON;
/// let denominator = 0.0_f64.cos() - 1.0;
/// assert!(denominator.abs() < MU_DENOMINATOR_EPSILON);
/// ```
pub const MU_DENOMINATOR_EPSILON: f64 = 1.0e-12;

/// A vertex whose product of compatibility ratios lies within this distance
/// of unit magnitude cannot be solved for its fourth sector angle.
///
/// # Examples
/// ```
/// use config::constants::DEGENERATE_MU_EPSILON;
/// let mu: f64 = -1.0 + 1.0e-9;
/// assert!((mu.abs() - 1.0).abs() < DEGENERATE_MU_EPSILON);
/// ```
pub const DEGENERATE_MU_EPSILON: f64 = 1.0e-7;

/// Smallest `|sin(angle_sum)|` accepted when solving the two new crease
/// lengths of a vertex.
///
/// # Examples
/// ```
/// use config::constants::PLANAR_DETERMINANT_EPSILON;
/// assert!(PLANAR_DETERMINANT_EPSILON > 1.0e-12);
/// ```
pub const PLANAR_DETERMINANT_EPSILON: f64 = 1.0e-6;

/// Rounding slack tolerated on an inverse cosine argument before it is
/// treated as having no real solution.
pub const ACOS_DOMAIN_SLACK: f64 = 1.0e-9;

// =============================================================================
// FOLDING CONSTANTS
// =============================================================================

/// Distance under which two positions of the flat state are considered equal.
///
/// # Examples
/// ```
/// use config::constants::FLAT_STATE_TOLERANCE;
/// assert!(FLAT_STATE_TOLERANCE <= 1.0e-9);
/// ```
pub const FLAT_STATE_TOLERANCE: f64 = 1.0e-9;

/// Shortest crease accepted next to an interior vertex of a flat grid.
///
/// A shorter edge has no usable direction to rotate about.
pub const MIN_EDGE_LENGTH: f64 = 1.0e-12;

/// Practical ceiling for the fold activation angle, in degrees.
///
/// At 180° the pattern is flat again and the crease relations degenerate,
/// so requests at or beyond it are pulled back to this value.
///
/// # Examples
/// ```
/// use config::constants::MAX_FOLD_ANGLE_DEGREES;
/// assert!(MAX_FOLD_ANGLE_DEGREES < 180.0);
/// ```
pub const MAX_FOLD_ANGLE_DEGREES: f64 = 179.9;

/// Crease sign assigned to every vertex when none is supplied (Miura-Ori).
pub const DEFAULT_SIGMA: f64 = -1.0;

// =============================================================================
// MIURA-ORI GENERATOR DEFAULTS
// =============================================================================

/// Default number of vertices on the horizontal (zigzag) boundary.
pub const DEFAULT_MIURA_HORIZONTAL_VERTICES: usize = 5;

/// Default number of vertices on the vertical boundary, corner included.
pub const DEFAULT_MIURA_VERTICAL_VERTICES: usize = 4;

/// Default zigzag angle of the horizontal boundary, in degrees.
pub const DEFAULT_MIURA_THETA_DEGREES: f64 = 60.0;

/// Default length of one horizontal boundary segment.
pub const DEFAULT_MIURA_HORIZONTAL_LENGTH: f64 = 1.0;

/// Default spacing of the vertical boundary vertices.
pub const DEFAULT_MIURA_VERTICAL_LENGTH: f64 = 1.0;

/// Smallest number of vertices either boundary arm may have.
///
/// # Examples
/// ```
/// use config::constants::MIN_BOUNDARY_VERTICES;
/// assert_eq!(MIN_BOUNDARY_VERTICES, 2);
/// ```
pub const MIN_BOUNDARY_VERTICES: usize = 2;

// =============================================================================
// SOLVER CONFIGURATION
// =============================================================================

/// Tolerances used by the marching construction.
///
/// # Examples
/// ```
/// use config::constants::SolverConfig;
/// let config = SolverConfig::default();
/// assert!(config.mu_denominator_epsilon > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Threshold for a singular compatibility ratio.
    pub mu_denominator_epsilon: f64,
    /// Threshold for a near-degenerate vertex.
    pub degenerate_mu_epsilon: f64,
    /// Threshold for a singular edge-length system.
    pub planar_determinant_epsilon: f64,
}

impl SolverConfig {
    /// Builds a configuration, rejecting tolerances that are not strictly
    /// positive and finite.
    ///
    /// # Examples
    /// ```
    /// use config::constants::SolverConfig;
    /// let cfg = SolverConfig::new(1.0e-10, 1.0e-6, 1.0e-5).expect("valid config");
    /// assert_eq!(cfg.degenerate_mu_epsilon, 1.0e-6);
    /// assert!(SolverConfig::new(0.0, 1.0e-6, 1.0e-5).is_err());
    /// ```
    pub fn new(
        mu_denominator_epsilon: f64,
        degenerate_mu_epsilon: f64,
        planar_determinant_epsilon: f64,
    ) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("mu_denominator_epsilon", mu_denominator_epsilon),
            ("degenerate_mu_epsilon", degenerate_mu_epsilon),
            ("planar_determinant_epsilon", planar_determinant_epsilon),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidTolerance { name, value });
            }
        }
        Ok(Self {
            mu_denominator_epsilon,
            degenerate_mu_epsilon,
            planar_determinant_epsilon,
        })
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            mu_denominator_epsilon: MU_DENOMINATOR_EPSILON,
            degenerate_mu_epsilon: DEGENERATE_MU_EPSILON,
            planar_determinant_epsilon: PLANAR_DETERMINANT_EPSILON,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when a tolerance is zero, negative or not finite.
    InvalidTolerance {
        /// Field that carried the value.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance { name, value } => {
                write!(f, "{name} must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
