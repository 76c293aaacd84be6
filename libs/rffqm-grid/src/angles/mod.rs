//! # Planar Angle Helpers
//!
//! Small trigonometric helpers shared by the marching and folding solvers.
//! All angles are radians.

use std::f64::consts::{PI, TAU};

use glam::DVec3;

/// Maps an angle into `[0, 2π)`.
///
/// # Example
///
/// ```rust
/// use rffqm_grid::angles::wrap_to_tau;
/// use std::f64::consts::PI;
///
/// assert!((wrap_to_tau(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
/// assert_eq!(wrap_to_tau(0.5), 0.5);
/// ```
#[inline]
pub fn wrap_to_tau(angle: f64) -> f64 {
    // rem_euclid may round up to exactly TAU for tiny negative inputs
    ((angle % TAU) + TAU) % TAU
}

/// In-plane direction of the vector from `from` to `to`, in `(-π, π]`.
///
/// The z components are ignored.
#[inline]
pub fn heading(from: DVec3, to: DVec3) -> f64 {
    let delta = to - from;
    delta.y.atan2(delta.x)
}

/// Rotates `v` about the z axis by `angle` and drops its z component.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use rffqm_grid::angles::rotate_in_plane;
///
/// let v = rotate_in_plane(DVec3::X, std::f64::consts::FRAC_PI_2);
/// assert!(v.abs_diff_eq(DVec3::Y, 1e-12));
/// ```
#[inline]
pub fn rotate_in_plane(v: DVec3, angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    DVec3::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos, 0.0)
}

/// The supplementary angle `π − angle`.
#[inline]
pub fn supplement(angle: f64) -> f64 {
    PI - angle
}

/// Sign of `x` as `-1`, `0` or `1`.
///
/// Unlike [`f64::signum`], zero maps to zero so that a zero fold angle
/// propagates as zero.
#[inline]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// True if `angle` lies in the closed range `[0, π]`.
#[inline]
pub fn is_sector_angle(angle: f64) -> bool {
    (0.0..=PI).contains(&angle)
}
