//! # Tests for Config Constants
//!
//! Sanity checks on the relative magnitude of the published constants.

use crate::constants::*;

// =============================================================================
// MARCHING TOLERANCE TESTS
// =============================================================================

#[test]
fn test_tolerances_are_positive() {
    assert!(MU_DENOMINATOR_EPSILON > 0.0);
    assert!(DEGENERATE_MU_EPSILON > 0.0);
    assert!(PLANAR_DETERMINANT_EPSILON > 0.0);
    assert!(ACOS_DOMAIN_SLACK > 0.0);
}

#[test]
fn test_mu_denominator_is_tightest() {
    // The ratio denominator check only guards against division by zero
    assert!(MU_DENOMINATOR_EPSILON < DEGENERATE_MU_EPSILON);
    assert!(MU_DENOMINATOR_EPSILON < PLANAR_DETERMINANT_EPSILON);
}

// =============================================================================
// FOLDING TESTS
// =============================================================================

#[test]
fn test_fold_ceiling_below_half_turn() {
    assert!(MAX_FOLD_ANGLE_DEGREES < 180.0);
    assert!(MAX_FOLD_ANGLE_DEGREES > 179.0);
}

#[test]
fn test_default_sigma_is_miura() {
    assert_eq!(DEFAULT_SIGMA, -1.0);
}

#[test]
fn test_min_edge_below_flat_tolerance() {
    assert!(MIN_EDGE_LENGTH <= FLAT_STATE_TOLERANCE);
}

// =============================================================================
// MIURA DEFAULT TESTS
// =============================================================================

#[test]
fn test_miura_defaults_form_a_grid() {
    assert!(DEFAULT_MIURA_HORIZONTAL_VERTICES >= MIN_BOUNDARY_VERTICES);
    assert!(DEFAULT_MIURA_VERTICAL_VERTICES >= MIN_BOUNDARY_VERTICES);
    assert!(DEFAULT_MIURA_THETA_DEGREES > 0.0 && DEFAULT_MIURA_THETA_DEGREES < 180.0);
    assert!(DEFAULT_MIURA_HORIZONTAL_LENGTH > 0.0);
    assert!(DEFAULT_MIURA_VERTICAL_LENGTH > 0.0);
}
