//! Crease sign of a vertex.

use config::constants::DEFAULT_SIGMA;
use serde::{Deserialize, Serialize};

/// Sign convention of a degree-4 vertex, selecting which branch of the
/// crease-angle relations it folds along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sigma {
    /// `+1`
    Positive,
    /// `−1`, the Miura-Ori convention.
    Negative,
}

impl Sigma {
    /// Numeric value, `+1` or `−1`.
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Sigma::Positive => 1.0,
            Sigma::Negative => -1.0,
        }
    }

    /// Sign of `value`; zero counts as positive.
    pub fn from_value(value: f64) -> Self {
        if value < 0.0 {
            Sigma::Negative
        } else {
            Sigma::Positive
        }
    }
}

impl Default for Sigma {
    fn default() -> Self {
        Self::from_value(DEFAULT_SIGMA)
    }
}
