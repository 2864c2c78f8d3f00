//! Synthesis configuration knobs.

use crate::errors::SynthesisError;
use crate::math::{round_to_decimals, Scalar};

/// Default threshold below which a derived dimension counts as degenerate.
pub const DEFAULT_DEGENERACY_EPSILON: Scalar = 1.0e-6;

/// Rounding policy applied to derived dimensions.
///
/// `Exact` keeps full `f64` precision through every stage. `PerStage` rounds
/// each derived dimension to fabrication-sheet precision as it is produced,
/// so downstream stages consume the rounded values: lengths to micrometre
/// precision (3 decimals) and corner truncation to 10 µm (2 decimals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Full floating-point precision, no intermediate rounding.
    #[default]
    Exact,
    /// Round each stage's outputs before the next stage consumes them.
    PerStage,
}

impl Rounding {
    /// Applies the policy to a patch, feed, or enclosure length in mm.
    #[must_use]
    pub fn round_length(self, value_mm: Scalar) -> Scalar {
        match self {
            Self::Exact => value_mm,
            Self::PerStage => round_to_decimals(value_mm, 3),
        }
    }

    /// Applies the policy to a corner truncation depth in mm.
    #[must_use]
    pub fn round_truncation(self, value_mm: Scalar) -> Scalar {
        match self {
            Self::Exact => value_mm,
            Self::PerStage => round_to_decimals(value_mm, 2),
        }
    }
}

/// Options shared by every synthesis stage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynthesisConfig {
    /// Rounding policy for derived dimensions.
    pub rounding: Rounding,
    /// Dimensions at or below this value (in mm) are treated as degenerate.
    pub degeneracy_epsilon: Scalar,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            rounding: Rounding::default(),
            degeneracy_epsilon: DEFAULT_DEGENERACY_EPSILON,
        }
    }
}

impl SynthesisConfig {
    /// Checks that the configuration itself is usable.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::InvalidParameter`] when the degeneracy
    /// threshold is not a finite positive number.
    pub fn validate(&self) -> Result<(), SynthesisError> {
        if !self.degeneracy_epsilon.is_finite() || self.degeneracy_epsilon <= 0.0 {
            return Err(SynthesisError::InvalidParameter {
                name: "degeneracy_epsilon",
                value: self.degeneracy_epsilon,
                reason: "must be a finite positive number",
            });
        }
        Ok(())
    }
}
