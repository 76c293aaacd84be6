//! # Crease-Angle Relations
//!
//! A rigid-foldable degree-4 vertex has one degree of freedom: given the
//! fold angle of one crease, the other three follow. The four creases are
//! numbered counter-clockwise starting from `+column`:
//!
//! ```text
//!            γ2 (+row)
//!             │
//!  γ3 (−col) ─┼─ γ1 (+col)
//!             │
//!            γ4 (−row)
//! ```

use std::f64::consts::PI;

use rffqm_grid::angles::sign;

/// Fold angles of the four creases around one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CreaseAngles {
    /// Crease towards `+column`.
    pub gamma1: f64,
    /// Crease towards `+row`.
    pub gamma2: f64,
    /// Crease towards `−column`.
    pub gamma3: f64,
    /// Crease towards `−row`.
    pub gamma4: f64,
}

impl CreaseAngles {
    /// Propagates a fold entering from the left (`γ3 = seed`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use rffqm_fold::CreaseAngles;
    ///
    /// let angles = CreaseAngles::right(0.5, 2.6, -1.0, 0.3);
    /// assert_eq!(angles.gamma3, 0.3);
    /// assert_eq!(angles.gamma1, 0.3);
    /// assert_eq!(angles.gamma4, -angles.gamma2);
    /// ```
    pub fn right(alpha: f64, beta: f64, sigma: f64, seed: f64) -> Self {
        let gamma3 = seed;
        let gamma1 = -sigma * gamma3;
        let gamma2 = fold_relation(sigma, gamma1, alpha, beta);
        Self {
            gamma1,
            gamma2,
            gamma3,
            gamma4: sigma * gamma2,
        }
    }

    /// Propagates a fold entering from below (`γ4 = seed`).
    pub fn up(alpha: f64, beta: f64, sigma: f64, seed: f64) -> Self {
        let gamma4 = seed;
        let gamma2 = sigma * gamma4;
        let gamma1 = fold_relation(-sigma, gamma2, alpha, PI - beta);
        Self {
            gamma1,
            gamma2,
            gamma3: -sigma * gamma1,
            gamma4,
        }
    }
}

/// Fold angle of the crease opposite a sector pair `(alpha, beta)` when the
/// adjacent crease folds by `omega`:
///
/// `sign((s·cos β − cos α)·ω) · acos(((−s + cos α cos β)·cos ω + sin α sin β) / (−s + cos α cos β + sin α sin β·cos ω))`
///
/// The inverse-cosine argument is clamped to `[-1, 1]`. A zero `omega`
/// gives exactly zero.
pub fn fold_relation(sigma: f64, omega: f64, alpha: f64, beta: f64) -> f64 {
    let (sin_a, cos_a) = alpha.sin_cos();
    let (sin_b, cos_b) = beta.sin_cos();

    let direction = sign((sigma * cos_b - cos_a) * omega);
    if direction == 0.0 {
        return 0.0;
    }

    let base = -sigma + cos_a * cos_b;
    let cos_omega = omega.cos();
    let cosine = (base * cos_omega + sin_a * sin_b) / (base + sin_a * sin_b * cos_omega);
    direction * cosine.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests;
