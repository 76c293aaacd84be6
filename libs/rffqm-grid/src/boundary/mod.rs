//! # Boundary Model
//!
//! The two boundary polylines a crease pattern is marched from. Each vertex
//! carries its position in the z=0 plane and the direction (ray angle) of
//! the crease that leaves it towards the interior of the pattern.
//!
//! Horizontal vertex 0 is the origin corner of the pattern. The vertical
//! arm starts one step above that corner, so the vertical vertex `k` sits on
//! grid row `k + 1`.

use std::fmt;

use config::constants::MIN_BOUNDARY_VERTICES;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::BoundaryError;

/// Which boundary polyline a vertex belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arm {
    /// Row 0 of the grid.
    Horizontal,
    /// Column 0 of the grid, above the corner.
    Vertical,
}

impl fmt::Display for Arm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arm::Horizontal => f.write_str("horizontal"),
            Arm::Vertical => f.write_str("vertical"),
        }
    }
}

/// One vertex of a boundary polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryVertex {
    /// Position in the z=0 plane.
    pub position: DVec3,
    /// Direction of the interior crease leaving this vertex, in radians.
    pub ray_angle: f64,
}

impl BoundaryVertex {
    /// Creates a vertex from a position and a ray angle.
    pub fn new(position: DVec3, ray_angle: f64) -> Self {
        Self {
            position,
            ray_angle,
        }
    }

    /// Creates a vertex in the z=0 plane.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rffqm_grid::BoundaryVertex;
    ///
    /// let v = BoundaryVertex::planar(1.0, 2.0, std::f64::consts::FRAC_PI_2);
    /// assert_eq!(v.position.z, 0.0);
    /// ```
    pub fn planar(x: f64, y: f64, ray_angle: f64) -> Self {
        Self::new(DVec3::new(x, y, 0.0), ray_angle)
    }

    fn is_finite(&self) -> bool {
        self.position.is_finite() && self.ray_angle.is_finite()
    }
}

/// A validated pair of boundary polylines.
///
/// # Example
///
/// ```rust
/// use rffqm_grid::{Boundary, BoundaryVertex};
///
/// let boundary = Boundary::new(
///     vec![BoundaryVertex::planar(0.0, 0.0, 2.0), BoundaryVertex::planar(1.0, 0.0, 1.5)],
///     vec![BoundaryVertex::planar(0.0, 1.0, 0.2)],
/// )
/// .unwrap();
/// assert_eq!((boundary.rows(), boundary.cols()), (2, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoundaryRepr")]
pub struct Boundary {
    horizontal: Vec<BoundaryVertex>,
    vertical: Vec<BoundaryVertex>,
}

/// Unchecked wire form of a [`Boundary`].
#[derive(Deserialize)]
struct BoundaryRepr {
    horizontal: Vec<BoundaryVertex>,
    vertical: Vec<BoundaryVertex>,
}

impl TryFrom<BoundaryRepr> for Boundary {
    type Error = BoundaryError;

    fn try_from(repr: BoundaryRepr) -> Result<Self, Self::Error> {
        Self::new(repr.horizontal, repr.vertical)
    }
}

impl Boundary {
    /// Validates and assembles a boundary.
    ///
    /// The horizontal arm needs at least two vertices and the vertical arm
    /// at least one, so that the resulting grid is at least 2×2. Every
    /// coordinate and ray angle must be finite.
    pub fn new(
        horizontal: Vec<BoundaryVertex>,
        vertical: Vec<BoundaryVertex>,
    ) -> Result<Self, BoundaryError> {
        let min_vertical = MIN_BOUNDARY_VERTICES - 1;
        if horizontal.len() < MIN_BOUNDARY_VERTICES {
            return Err(BoundaryError::TooFewVertices {
                arm: Arm::Horizontal,
                count: horizontal.len(),
                min: MIN_BOUNDARY_VERTICES,
            });
        }
        if vertical.len() < min_vertical {
            return Err(BoundaryError::TooFewVertices {
                arm: Arm::Vertical,
                count: vertical.len(),
                min: min_vertical,
            });
        }

        for (arm, vertices) in [(Arm::Horizontal, &horizontal), (Arm::Vertical, &vertical)] {
            if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
                return Err(BoundaryError::NonFinite { arm, index });
            }
        }

        Ok(Self {
            horizontal,
            vertical,
        })
    }

    /// Vertices of the horizontal arm (grid row 0).
    #[inline]
    pub fn horizontal(&self) -> &[BoundaryVertex] {
        &self.horizontal
    }

    /// Vertices of the vertical arm (grid column 0, rows 1..).
    #[inline]
    pub fn vertical(&self) -> &[BoundaryVertex] {
        &self.vertical
    }

    /// Number of grid rows, `vertical + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.vertical.len() + 1
    }

    /// Number of grid columns, `horizontal`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.horizontal.len()
    }

    /// The shared origin corner.
    #[inline]
    pub fn corner(&self) -> &BoundaryVertex {
        &self.horizontal[0]
    }

    /// Position of the boundary vertex sitting on column 0 at `row`.
    ///
    /// Row 0 is the corner.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn column_position(&self, row: usize) -> DVec3 {
        match row {
            0 => self.corner().position,
            _ => self.vertical[row - 1].position,
        }
    }

    /// Moves every boundary vertex by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        for vertex in self.horizontal.iter_mut().chain(self.vertical.iter_mut()) {
            vertex.position += offset;
        }
    }
}

#[cfg(test)]
mod tests;
