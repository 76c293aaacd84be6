//! Tests for crease rotations.

use super::*;
use std::f64::consts::FRAC_PI_2;

fn unit_grid() -> Grid<DVec3> {
    Grid::from_fn(3, 3, |row, col| DVec3::new(col as f64, row as f64, 0.0))
}

#[test]
fn region_bounds_are_half_open() {
    let region = CellRegion::new(1..2, 0..2);
    let cells: Vec<_> = region.cells().collect();
    assert_eq!(cells, vec![(1, 0), (1, 1)]);
    assert!(CellRegion::new(0..2, 0..0).is_empty());
}

#[test]
fn quarter_turn_about_column_crease() {
    let flat = unit_grid();
    let mut points = flat.clone();
    // Axis along +y through x = 1
    let crease = Crease::between(&flat, (0, 1), (1, 1));
    crease.rotate(&mut points, &CellRegion::new(0..3, 0..1), FRAC_PI_2);

    // x = 0 swings up to z = 1 about +y
    for row in 0..3 {
        let expected = DVec3::new(1.0, row as f64, 1.0);
        assert!(points[(row, 0)].abs_diff_eq(expected, 1e-12), "{}", points[(row, 0)]);
    }
    assert_eq!(points.row(0)[1..], flat.row(0)[1..]);
}

#[test]
fn zero_angle_is_exact_identity() {
    let flat = unit_grid();
    let mut points = flat.clone();
    Crease::between(&flat, (1, 1), (2, 1)).rotate(&mut points, &CellRegion::new(0..3, 0..3), 0.0);
    assert_eq!(points, flat);
}

#[test]
fn points_on_the_axis_stay_put() {
    let flat = unit_grid();
    let mut points = flat.clone();
    Crease::between(&flat, (1, 0), (1, 2)).rotate(&mut points, &CellRegion::new(1..2, 0..3), 1.2);
    for col in 0..3 {
        assert!(points[(1, col)].abs_diff_eq(flat[(1, col)], 1e-12));
    }
}

#[test]
fn rotations_preserve_distances() {
    let flat = unit_grid();
    let mut points = flat.clone();
    let crease = Crease::between(&flat, (1, 1), (2, 2));
    crease.rotate(&mut points, &CellRegion::new(0..3, 0..3), 0.7);
    let before = flat[(0, 0)].distance(flat[(2, 1)]);
    let after = points[(0, 0)].distance(points[(2, 1)]);
    assert!((before - after).abs() < 1e-12);
}
