//! Tests for the crease-angle relations.

use super::*;
use approx::assert_abs_diff_eq;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_6};

const ACUTE: f64 = FRAC_PI_6;
const OBTUSE: f64 = PI - FRAC_PI_6;

#[test]
fn zero_fold_stays_zero() {
    assert_eq!(fold_relation(-1.0, 0.0, ACUTE, OBTUSE), 0.0);
    assert_eq!(CreaseAngles::right(ACUTE, OBTUSE, -1.0, 0.0), CreaseAngles::default());
    assert_eq!(CreaseAngles::up(ACUTE, OBTUSE, -1.0, 0.0), CreaseAngles::default());
}

#[test]
fn relation_is_odd_in_omega() {
    for omega in [0.1, 0.7, 1.5, 2.9] {
        let forward = fold_relation(-1.0, omega, ACUTE, ACUTE);
        let backward = fold_relation(-1.0, -omega, ACUTE, ACUTE);
        assert_abs_diff_eq!(forward, -backward, epsilon = 1e-15);
    }
}

#[test]
fn right_relation_chains_signs() {
    let angles = CreaseAngles::right(OBTUSE, OBTUSE, -1.0, 0.8);
    assert_eq!(angles.gamma3, 0.8);
    assert_eq!(angles.gamma1, 0.8);
    assert_eq!(angles.gamma4, -angles.gamma2);
    assert!(angles.gamma2 != 0.0);
}

#[test]
fn regular_miura_vertices_fold_symmetrically() {
    // Acute and obtuse Miura-Ori vertices answer with opposite folds
    let acute = fold_relation(-1.0, 0.8, ACUTE, ACUTE);
    let obtuse = fold_relation(-1.0, 0.8, OBTUSE, OBTUSE);
    assert_abs_diff_eq!(acute, -0.701_977_978_692_945_8, epsilon = 1e-12);
    assert_abs_diff_eq!(acute, -obtuse, epsilon = 1e-12);
}

#[test]
fn up_relation_chains_signs() {
    let angles = CreaseAngles::up(ACUTE, OBTUSE, -1.0, 0.4);
    assert_eq!(angles.gamma4, 0.4);
    assert_eq!(angles.gamma2, -0.4);
    assert_eq!(angles.gamma3, angles.gamma1);
}

#[test]
fn relation_output_is_a_fold_angle() {
    for alpha in [ACUTE, FRAC_PI_3, FRAC_PI_2, OBTUSE] {
        for omega in [-3.0, -1.0, 0.5, 3.0] {
            let gamma = fold_relation(-1.0, omega, alpha, PI - alpha);
            assert!(gamma.abs() <= PI, "alpha {alpha}, omega {omega}: {gamma}");
        }
    }
}

#[test]
fn flat_vertex_folds_nothing_back() {
    // A straight crease line: both sector angles are right angles
    let gamma = fold_relation(-1.0, 0.9, FRAC_PI_2, FRAC_PI_2);
    assert_abs_diff_eq!(gamma, 0.0, epsilon = 1e-7);
}
