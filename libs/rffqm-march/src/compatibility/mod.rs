//! # Compatibility Relations
//!
//! Closed-form relations of a degree-4 rigid-foldable vertex used by the
//! march: the compatibility ratio `mu` of a pair of sector angles, the
//! fourth sector's beta angle recovered from the product of three ratios,
//! and the two crease lengths that close a planar quadrilateral.

use std::f64::consts::PI;

use config::constants::ACOS_DOMAIN_SLACK;

use crate::error::IncompatibilityCause;

/// Compatibility ratio of sector angles `a`, `b` under sign `s`:
///
/// `(−s + cos a·cos b + sin a·sin b) / (cos b − s·cos a)`.
///
/// Fails when the denominator is smaller than `epsilon` in magnitude.
///
/// # Example
///
/// ```rust
/// use rffqm_march::compatibility::ratio;
/// use std::f64::consts::FRAC_PI_3;
///
/// let mu = ratio(FRAC_PI_3, FRAC_PI_3, -1.0, 1e-12).unwrap();
/// assert!((mu - 1.0 / FRAC_PI_3.cos()).abs() < 1e-12);
/// ```
pub fn ratio(a: f64, b: f64, s: f64, epsilon: f64) -> Result<f64, IncompatibilityCause> {
    let (sin_a, cos_a) = a.sin_cos();
    let (sin_b, cos_b) = b.sin_cos();
    let numerator = -s + cos_a * cos_b + sin_a * sin_b;
    let denominator = cos_b - s * cos_a;
    if denominator.abs() < epsilon {
        return Err(IncompatibilityCause::SingularCompatibilityRatio { denominator });
    }
    Ok(numerator / denominator)
}

/// [`ratio`] evaluated against the supplement of `b`.
pub fn ratio_supplementary(a: f64, b: f64, s: f64, epsilon: f64) -> Result<f64, IncompatibilityCause> {
    ratio(a, PI - b, s, epsilon)
}

/// Recovers the fourth sector's beta angle from the product `mu` of the
/// three known ratios and the sum of the three known alpha angles.
///
/// An inverse-cosine argument beyond `[-1, 1]` by more than rounding slack
/// has no real solution and is reported as out of range.
pub fn fourth_sector_beta(mu: f64, angle_sum: f64) -> Result<f64, IncompatibilityCause> {
    let cos_sum = angle_sum.cos();
    let mu_sq_plus_1 = mu * mu + 1.0;
    let numerator = -(2.0 * mu - mu_sq_plus_1 * cos_sum);
    let denominator = 2.0 * mu * cos_sum - mu_sq_plus_1;
    let cosine = numerator / denominator;
    if !(cosine.abs() <= 1.0 + ACOS_DOMAIN_SLACK) {
        return Err(IncompatibilityCause::AngleOutOfRange {
            name: "cos(beta_d)",
            value: cosine,
        });
    }
    Ok(cosine.clamp(-1.0, 1.0).acos())
}

/// Lengths of the two new creases `CD` and `BD` of the quadrilateral
/// `A, B, D, C`, given the known creases `AB`, `AC` and the sector angles
/// at `A`, `B` and `C`.
///
/// Returns `(l_cd, l_bd)`.
pub fn crease_lengths(
    alpha_a: f64,
    alpha_b: f64,
    alpha_c: f64,
    l_ab: f64,
    l_ac: f64,
    determinant_epsilon: f64,
) -> Result<(f64, f64), IncompatibilityCause> {
    let determinant = (alpha_a + alpha_b + alpha_c).sin();
    if determinant.abs() < determinant_epsilon {
        return Err(IncompatibilityCause::SingularPlanarGeometry { determinant });
    }

    let l_cd = (-alpha_b.sin() * l_ab + (alpha_a + alpha_b).sin() * l_ac) / determinant;
    let l_bd = ((alpha_a + alpha_c).sin() * l_ab - alpha_c.sin() * l_ac) / determinant;

    for (edge, length) in [("CD", l_cd), ("BD", l_bd)] {
        if !(length > 0.0) {
            return Err(IncompatibilityCause::NonPositiveCreaseLength { edge, length });
        }
    }
    Ok((l_cd, l_bd))
}
