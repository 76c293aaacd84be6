//! # Miura-Ori Boundary Generator
//!
//! Produces the boundary of a regular Miura-Ori: a zigzag horizontal arm
//! and a straight vertical arm, centred on the origin.

use std::f64::consts::{FRAC_PI_2, PI};

use config::constants::{
    DEFAULT_MIURA_HORIZONTAL_LENGTH, DEFAULT_MIURA_HORIZONTAL_VERTICES,
    DEFAULT_MIURA_THETA_DEGREES, DEFAULT_MIURA_VERTICAL_LENGTH, DEFAULT_MIURA_VERTICAL_VERTICES,
    MIN_BOUNDARY_VERTICES,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::boundary::{Boundary, BoundaryVertex};
use crate::error::BoundaryError;

/// Parameters of a regular Miura-Ori boundary.
///
/// # Example
///
/// ```rust
/// use rffqm_grid::MiuraParams;
///
/// let params = MiuraParams {
///     horizontal_vertices: 3,
///     vertical_vertices: 2,
///     ..MiuraParams::default()
/// };
/// let boundary = params.generate().unwrap();
/// assert_eq!(boundary.horizontal().len(), 3);
/// assert_eq!(boundary.vertical().len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MiuraParams {
    /// Vertices on the zigzag arm, corner included.
    pub horizontal_vertices: usize,
    /// Vertices on the straight arm, corner included.
    pub vertical_vertices: usize,
    /// Zigzag angle against the x axis, in radians.
    pub theta: f64,
    /// Length of one zigzag segment.
    pub horizontal_length: f64,
    /// Spacing of the straight arm.
    pub vertical_length: f64,
}

impl Default for MiuraParams {
    fn default() -> Self {
        Self {
            horizontal_vertices: DEFAULT_MIURA_HORIZONTAL_VERTICES,
            vertical_vertices: DEFAULT_MIURA_VERTICAL_VERTICES,
            theta: DEFAULT_MIURA_THETA_DEGREES.to_radians(),
            horizontal_length: DEFAULT_MIURA_HORIZONTAL_LENGTH,
            vertical_length: DEFAULT_MIURA_VERTICAL_LENGTH,
        }
    }
}

impl MiuraParams {
    /// Builds the boundary.
    ///
    /// The corner carries ray angle `π − θ`; the other zigzag vertices point
    /// straight up and the straight-arm vertices point along `θ`. The result
    /// is shifted so the pattern straddles the origin.
    pub fn generate(&self) -> Result<Boundary, BoundaryError> {
        self.validate()?;

        let mut horizontal = Vec::with_capacity(self.horizontal_vertices);
        let mut position = DVec3::ZERO;
        let mut zigzag = self.theta;
        horizontal.push(BoundaryVertex::new(position, PI - zigzag));
        for _ in 1..self.horizontal_vertices {
            let (sin, cos) = zigzag.sin_cos();
            position += DVec3::new(cos, sin, 0.0) * self.horizontal_length;
            horizontal.push(BoundaryVertex::new(position, FRAC_PI_2));
            zigzag = -zigzag;
        }

        let vertical: Vec<_> = (1..self.vertical_vertices)
            .map(|k| BoundaryVertex::planar(0.0, k as f64 * self.vertical_length, self.theta))
            .collect();

        // Width is measured at the last zigzag vertex back on the bottom line
        let last_even = self.horizontal_vertices - 1 - (1 - self.horizontal_vertices % 2);
        let width = horizontal[last_even].position.x;
        let height = vertical.last().map_or(0.0, |v| v.position.y);

        let mut boundary = Boundary::new(horizontal, vertical)?;
        boundary.translate(DVec3::new(-width / 2.0, -height / 2.0, 0.0));
        Ok(boundary)
    }

    fn validate(&self) -> Result<(), BoundaryError> {
        let counts = [
            ("horizontal_vertices", self.horizontal_vertices),
            ("vertical_vertices", self.vertical_vertices),
        ];
        for (name, count) in counts {
            if count < MIN_BOUNDARY_VERTICES {
                return Err(BoundaryError::InvalidParameter {
                    name,
                    value: count as f64,
                });
            }
        }
        if !(self.theta > 0.0 && self.theta < PI) {
            return Err(BoundaryError::InvalidParameter {
                name: "theta",
                value: self.theta,
            });
        }
        let lengths = [
            ("horizontal_length", self.horizontal_length),
            ("vertical_length", self.vertical_length),
        ];
        for (name, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                return Err(BoundaryError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
