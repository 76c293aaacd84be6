//! # Crease Rotations
//!
//! Folding moves a rectangular block of vertices rigidly about one flat
//! crease. The crease axis always comes from the flat grid, and rotations
//! compose on the folded positions.

use std::ops::Range;

use glam::{DQuat, DVec3};
use rffqm_grid::Grid;

/// A rectangular block of grid cells, `rows × cols` half-open ranges.
///
/// # Example
///
/// ```rust
/// use rffqm_fold::CellRegion;
///
/// let region = CellRegion::new(0..2, 0..3);
/// assert!(region.contains(1, 2));
/// assert!(!region.contains(2, 0));
/// assert_eq!(region.cells().count(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRegion {
    rows: Range<usize>,
    cols: Range<usize>,
}

impl CellRegion {
    /// Creates a region from row and column ranges.
    pub fn new(rows: Range<usize>, cols: Range<usize>) -> Self {
        Self { rows, cols }
    }

    /// True if `(row, col)` lies inside the region.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows.contains(&row) && self.cols.contains(&col)
    }

    /// True if the region holds no cell.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }

    /// Iterates over the cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let cols = self.cols.clone();
        self.rows
            .clone()
            .flat_map(move |row| cols.clone().map(move |col| (row, col)))
    }
}

/// A flat crease as an oriented rotation axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crease {
    origin: DVec3,
    axis: DVec3,
}

impl Crease {
    /// The crease from flat vertex `from` to flat vertex `to`.
    ///
    /// The two vertices must be distinct.
    pub fn between(flat: &Grid<DVec3>, from: (usize, usize), to: (usize, usize)) -> Self {
        let origin = flat[from];
        Self {
            origin,
            axis: (flat[to] - origin).normalize(),
        }
    }

    /// Point the axis passes through.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Unit direction of the axis.
    #[inline]
    pub fn axis(&self) -> DVec3 {
        self.axis
    }

    /// Rotates every point of `region` about the crease by `angle`
    /// (right-handed about the axis). A zero angle leaves the points as
    /// they are.
    pub fn rotate(&self, points: &mut Grid<DVec3>, region: &CellRegion, angle: f64) {
        if angle == 0.0 {
            return;
        }
        let rotation = DQuat::from_axis_angle(self.axis, angle);
        for cell in region.cells() {
            let point = &mut points[cell];
            *point = rotation * (*point - self.origin) + self.origin;
        }
    }
}

#[cfg(test)]
mod tests;
