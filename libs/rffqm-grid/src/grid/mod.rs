//! # Grid
//!
//! Rectangular `rows × cols` storage backed by a single buffer with
//! row-major stride indexing. Points, sector angles and crease signs of a
//! pattern all live in grids of the same shape.

use std::ops::{Index, IndexMut};

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// A row-major grid of cells.
///
/// # Example
///
/// ```rust
/// use rffqm_grid::Grid;
///
/// let grid = Grid::from_fn(2, 3, |row, col| row * 10 + col);
/// assert_eq!(grid[(1, 2)], 12);
/// assert_eq!(grid.get(2, 0), None);
/// assert_eq!(grid.row(1), &[10, 11, 12]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr<T>", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

/// Unchecked wire form of a [`Grid`].
#[derive(Deserialize)]
struct GridRepr<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> TryFrom<GridRepr<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(repr: GridRepr<T>) -> Result<Self, Self::Error> {
        let expected = repr.rows * repr.cols;
        if repr.cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: repr.cells.len(),
            });
        }
        Ok(Self {
            rows: repr.rows,
            cols: repr.cols,
            cells: repr.cells,
        })
    }
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }
}

impl<T> Grid<T> {
    /// Creates a grid by evaluating `f(row, col)` in row-major order.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }
        Self { rows, cols, cells }
    }

    /// Creates a grid from nested rows, rejecting empty or ragged input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rffqm_grid::{Grid, GridError};
    ///
    /// let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(grid.cols(), 2);
    ///
    /// let err = Grid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
    /// assert_eq!(err, GridError::RaggedRow { row: 1, expected: 2, found: 1 });
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        if row_count == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(row_count * cols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the grid holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if `other` has the same dimensions.
    pub fn same_shape<U>(&self, other: &Grid<U>) -> bool {
        self.dimensions() == other.dimensions()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Returns the cell at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.offset(row, col).map(|index| &self.cells[index])
    }

    /// Returns the cell at `(row, col)` mutably, or `None` when out of bounds.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.offset(row, col).map(move |index| &mut self.cells[index])
    }

    /// Returns one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row {row} out of bounds for {} rows", self.rows);
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterates over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks_exact(self.cols.max(1))
    }

    /// Iterates over `((row, col), cell)` in row-major order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| ((index / cols, index % cols), cell))
    }

    /// Returns the backing buffer in row-major order.
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Returns the backing buffer mutably.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Builds a grid of the same shape by mapping every cell.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(&mut f).collect(),
        }
    }

    /// Splits the grid back into nested rows.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        let cols = self.cols.max(1);
        let mut rows = Vec::with_capacity(self.rows);
        let mut cells = self.cells.into_iter();
        for _ in 0..self.rows {
            rows.push(cells.by_ref().take(cols).collect());
        }
        rows
    }
}

impl<T: Copy> Grid<T> {
    /// Overwrites every cell with the matching cell of `source`.
    ///
    /// # Panics
    ///
    /// Panics if the two grids differ in shape.
    pub fn copy_from(&mut self, source: &Grid<T>) {
        assert!(
            self.same_shape(source),
            "cannot copy a {:?} grid into a {:?} grid",
            source.dimensions(),
            self.dimensions()
        );
        self.cells.copy_from_slice(&source.cells);
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.offset(row, col) {
            Some(index) => &self.cells[index],
            None => panic!(
                "grid index ({row}, {col}) out of bounds for {}x{} grid",
                self.rows, self.cols
            ),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.offset(row, col) {
            Some(index) => &mut self.cells[index],
            None => panic!(
                "grid index ({row}, {col}) out of bounds for {}x{} grid",
                self.rows, self.cols
            ),
        }
    }
}

// =============================================================================
// POINT GRIDS
// =============================================================================

impl Grid<DVec3> {
    /// Computes the axis-aligned bounding box as `(min, max)`.
    ///
    /// Returns `None` for an empty grid.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let (first, rest) = self.cells.split_first()?;
        Some(
            rest.iter()
                .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p))),
        )
    }

    /// Moves every point by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        for point in &mut self.cells {
            *point += offset;
        }
    }

    /// Largest distance between matching points of two grids of equal shape.
    ///
    /// Returns `None` when the shapes differ.
    pub fn max_distance(&self, other: &Grid<DVec3>) -> Option<f64> {
        if !self.same_shape(other) {
            return None;
        }
        Some(
            self.cells
                .iter()
                .zip(&other.cells)
                .map(|(a, b)| a.distance(*b))
                .fold(0.0, f64::max),
        )
    }
}

/// Translates the grid so the centre of its bounding box sits at the origin.
///
/// Returns the applied offset.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use rffqm_grid::{center_points, Grid};
///
/// let mut grid = Grid::from_fn(2, 2, |r, c| DVec3::new(c as f64 + 4.0, r as f64, 0.0));
/// let offset = center_points(&mut grid);
/// assert_eq!(offset, DVec3::new(-4.5, -0.5, 0.0));
/// assert_eq!(grid[(0, 0)], DVec3::new(-0.5, -0.5, 0.0));
/// ```
pub fn center_points(grid: &mut Grid<DVec3>) -> DVec3 {
    let Some((min, max)) = grid.bounding_box() else {
        return DVec3::ZERO;
    };
    let offset = -(min + max) * 0.5;
    grid.translate(offset);
    offset
}

#[cfg(test)]
mod tests;
