//! Tests for the flat-buffer grid.

use super::*;

#[test]
fn from_fn_is_row_major() {
    let grid = Grid::from_fn(3, 2, |row, col| (row, col));
    assert_eq!(grid.cells()[0], (0, 0));
    assert_eq!(grid.cells()[1], (0, 1));
    assert_eq!(grid.cells()[2], (1, 0));
    assert_eq!(grid[(2, 1)], (2, 1));
}

#[test]
fn get_is_bounds_checked() {
    let grid = Grid::filled(2, 3, 7_u8);
    assert_eq!(grid.get(1, 2), Some(&7));
    assert_eq!(grid.get(2, 0), None);
    assert_eq!(grid.get(0, 3), None);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn index_panics_outside_grid() {
    let grid = Grid::filled(2, 2, 0.0_f64);
    let _ = grid[(0, 2)];
}

#[test]
fn from_rows_rejects_empty_input() {
    assert_eq!(Grid::<f64>::from_rows(vec![]).unwrap_err(), GridError::Empty);
    assert_eq!(
        Grid::<f64>::from_rows(vec![vec![]]).unwrap_err(),
        GridError::Empty
    );
}

#[test]
fn into_rows_restores_nesting() {
    let nested = vec![vec![1, 2, 3], vec![4, 5, 6]];
    let grid = Grid::from_rows(nested.clone()).unwrap();
    assert_eq!(grid.dimensions(), (2, 3));
    assert_eq!(grid.into_rows(), nested);
}

#[test]
fn indexed_iter_reports_coordinates() {
    let grid = Grid::from_fn(2, 2, |row, col| row * 2 + col);
    let coords: Vec<_> = grid.indexed_iter().map(|(rc, v)| (rc, *v)).collect();
    assert_eq!(coords, vec![((0, 0), 0), ((0, 1), 1), ((1, 0), 2), ((1, 1), 3)]);
}

#[test]
fn copy_from_resets_every_cell() {
    let source = Grid::from_fn(2, 2, |row, col| DVec3::new(row as f64, col as f64, 0.0));
    let mut target = Grid::filled(2, 2, DVec3::ONE);
    target.copy_from(&source);
    assert_eq!(target, source);
}

#[test]
#[should_panic(expected = "cannot copy")]
fn copy_from_rejects_other_shapes() {
    let source = Grid::filled(2, 3, 0_i32);
    let mut target = Grid::filled(3, 2, 0_i32);
    target.copy_from(&source);
}

#[test]
fn map_keeps_shape() {
    let grid = Grid::from_fn(2, 3, |row, col| (row + col) as f64);
    let doubled = grid.map(|v| v * 2.0);
    assert_eq!(doubled.dimensions(), (2, 3));
    assert_eq!(doubled[(1, 2)], 6.0);
}

#[test]
fn bounding_box_spans_all_points() {
    let grid = Grid::from_rows(vec![
        vec![DVec3::new(-1.0, 0.0, 2.0), DVec3::new(3.0, -2.0, 0.0)],
        vec![DVec3::new(0.0, 5.0, -1.0), DVec3::new(1.0, 1.0, 1.0)],
    ])
    .unwrap();
    let (min, max) = grid.bounding_box().unwrap();
    assert_eq!(min, DVec3::new(-1.0, -2.0, -1.0));
    assert_eq!(max, DVec3::new(3.0, 5.0, 2.0));
}

#[test]
fn center_points_moves_box_to_origin() {
    let mut grid = Grid::from_fn(3, 3, |row, col| DVec3::new(col as f64 + 10.0, row as f64 * 2.0, 1.0));
    center_points(&mut grid);
    let (min, max) = grid.bounding_box().unwrap();
    assert_eq!(min + max, DVec3::ZERO);
}

#[test]
fn max_distance_requires_same_shape() {
    let a = Grid::filled(2, 2, DVec3::ZERO);
    let mut b = a.clone();
    b[(1, 1)] = DVec3::new(0.0, 3.0, 4.0);
    assert_eq!(a.max_distance(&b), Some(5.0));
    assert_eq!(a.max_distance(&Grid::filled(1, 2, DVec3::ZERO)), None);
}

#[test]
fn grid_deserializes_from_json() {
    let grid: Grid<f64> =
        serde_json::from_str(r#"{"rows":1,"cols":2,"cells":[0.5,1.5]}"#).unwrap();
    assert_eq!(grid[(0, 1)], 1.5);
}

#[test]
fn grid_json_with_wrong_cell_count_is_rejected() {
    let result: Result<Grid<f64>, _> = serde_json::from_str(r#"{"rows":2,"cols":2,"cells":[0.0]}"#);
    let message = result.unwrap_err().to_string();
    assert!(message.contains("expected 4"), "{message}");
}
