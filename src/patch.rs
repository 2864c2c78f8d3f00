//! Transmission-line-model patch dimension solver.
//!
//! The rectangular patch is modeled as a transmission line resonating at its
//! half-wave length. The closed-form design procedure is the classic one:
//!
//! 1. W = (c / 2f₀) · √(2 / (εᵣ + 1))
//! 2. ε_eff = (εᵣ + 1)/2 + (εᵣ − 1)/2 · (1 + 12 h/W)^(−1/2)
//! 3. L_eff = c / (2 f₀ √ε_eff)
//! 4. ΔL = 0.412 h · ((ε_eff + 0.3)(W/h + 0.264)) / ((ε_eff − 0.258)(W/h + 0.8))
//! 5. L = L_eff − 2 ΔL
//!
//! Valid for thin substrates (h ≪ λ₀); see Balanis, *Antenna Theory*, 4th
//! ed., §14.2 for the derivation and limits of the model.

use crate::config::SynthesisConfig;
use crate::constants::SPEED_OF_LIGHT_MM_PER_S;
use crate::errors::SynthesisError;
use crate::frequency::DesignFrequency;
use crate::materials::SubstrateMaterial;
use crate::math::Scalar;
use crate::substrate::SubstrateGeometry;

/// Resonant patch dimensions produced by [`solve_dimensions`].
///
/// Under [`Rounding::Exact`](crate::config::Rounding::Exact) the identities
/// `length_mm = effective_length_mm − 2 · fringing_extension_mm` and
/// `1 < effective_permittivity < εᵣ` hold bit-for-bit; under
/// [`Rounding::PerStage`](crate::config::Rounding::PerStage) the width and
/// length carry fabrication-sheet precision while the intermediate quantities
/// stay exact.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatchDimensions {
    /// Radiating-edge width W in millimetres.
    pub width_mm: Scalar,
    /// Resonant length L in millimetres.
    pub length_mm: Scalar,
    /// Effective dielectric constant ε_eff seen by the quasi-TEM line.
    pub effective_permittivity: Scalar,
    /// Electrical half-wave length L_eff in millimetres.
    pub effective_length_mm: Scalar,
    /// Fringing-field line extension ΔL in millimetres.
    pub fringing_extension_mm: Scalar,
}

/// Solves the transmission-line model for the resonant patch geometry.
///
/// # Errors
///
/// Returns [`SynthesisError::InvalidParameter`] when the material fails
/// validation, and [`SynthesisError::DegenerateGeometry`] when the fringing
/// denominator vanishes or the resonant length collapses below the
/// configured degeneracy threshold (electrically thick substrates at high
/// frequency drive ΔL past L_eff/2).
pub fn solve_dimensions(
    material: SubstrateMaterial,
    frequency: DesignFrequency,
    substrate: SubstrateGeometry,
    config: &SynthesisConfig,
) -> Result<PatchDimensions, SynthesisError> {
    material.validate()?;
    config.validate()?;

    let epsilon_r = material.relative_permittivity;
    let f0_hz = frequency.hz();
    let h_mm = substrate.thickness_mm();

    let width_mm = SPEED_OF_LIGHT_MM_PER_S / (2.0 * f0_hz) * (2.0 / (epsilon_r + 1.0)).sqrt();
    let effective_permittivity = (epsilon_r + 1.0) / 2.0
        + (epsilon_r - 1.0) / 2.0 / (1.0 + 12.0 * h_mm / width_mm).sqrt();
    let effective_length_mm =
        SPEED_OF_LIGHT_MM_PER_S / (2.0 * f0_hz * effective_permittivity.sqrt());

    let width_ratio = width_mm / h_mm;
    let denominator = (effective_permittivity - 0.258) * (width_ratio + 0.8);
    if denominator.abs() <= config.degeneracy_epsilon {
        return Err(SynthesisError::DegenerateGeometry {
            context: "fringing extension denominator",
            value: denominator,
            epsilon: config.degeneracy_epsilon,
        });
    }
    let fringing_extension_mm =
        0.412 * h_mm * ((effective_permittivity + 0.3) * (width_ratio + 0.264)) / denominator;

    let length_mm = config
        .rounding
        .round_length(effective_length_mm - 2.0 * fringing_extension_mm);
    if length_mm <= config.degeneracy_epsilon {
        return Err(SynthesisError::DegenerateGeometry {
            context: "patch length",
            value: length_mm,
            epsilon: config.degeneracy_epsilon,
        });
    }

    Ok(PatchDimensions {
        width_mm: config.rounding.round_length(width_mm),
        length_mm,
        effective_permittivity,
        effective_length_mm,
        fringing_extension_mm,
    })
}
