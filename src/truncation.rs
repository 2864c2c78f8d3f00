//! Corner truncation sizing for circular polarization.

use crate::config::SynthesisConfig;
use crate::constants::SPEED_OF_LIGHT_MM_PER_S;
use crate::errors::SynthesisError;
use crate::frequency::DesignFrequency;
use crate::materials::SubstrateMaterial;
use crate::math::Scalar;
use crate::patch::PatchDimensions;
use crate::substrate::SubstrateGeometry;

/// Edge length of the two truncated corners.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncationSize {
    /// Truncation edge t in millimetres, cut at 45° across two opposite
    /// corners to split the resonance into the two orthogonal CP modes.
    pub edge_mm: Scalar,
}

/// Sizes the corner truncation t = L · √((4 f₀ h) / (2 c √εᵣ)).
///
/// The cut perturbs the square-ish patch into two detuned orthogonal modes in
/// phase quadrature; applied to the top-left and bottom-right corners it
/// produces right-hand circular polarization.
///
/// # Errors
///
/// Returns [`SynthesisError::DegenerateGeometry`] when the edge collapses
/// below the degeneracy threshold or reaches min(W, L)/2, where the two cuts
/// would meet and the patch would no longer be a perturbed rectangle.
pub fn corner_truncation(
    material: SubstrateMaterial,
    frequency: DesignFrequency,
    substrate: SubstrateGeometry,
    dimensions: &PatchDimensions,
    config: &SynthesisConfig,
) -> Result<TruncationSize, SynthesisError> {
    material.validate()?;
    config.validate()?;

    let detune_ratio = (4.0 * frequency.hz() * substrate.thickness_mm())
        / (2.0 * SPEED_OF_LIGHT_MM_PER_S * material.relative_permittivity.sqrt());
    let edge_mm = config
        .rounding
        .round_truncation(dimensions.length_mm * detune_ratio.sqrt());

    if edge_mm <= config.degeneracy_epsilon {
        return Err(SynthesisError::DegenerateGeometry {
            context: "corner truncation edge",
            value: edge_mm,
            epsilon: config.degeneracy_epsilon,
        });
    }
    let corner_limit_mm = dimensions.width_mm.min(dimensions.length_mm) / 2.0;
    if edge_mm >= corner_limit_mm {
        return Err(SynthesisError::DegenerateGeometry {
            context: "corner truncation edge",
            value: edge_mm,
            epsilon: corner_limit_mm,
        });
    }

    Ok(TruncationSize { edge_mm })
}
