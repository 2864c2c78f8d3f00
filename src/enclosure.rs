//! Substrate, ground, and radiation enclosure sizing.
//!
//! All boxes live in a frame centred on the patch centroid: the dielectric
//! slab spans z ∈ [0, h] with the ground plane in the z = 0 plane, and the
//! radiation volume rises from the ground plane so no open boundary sits
//! behind it.

use crate::config::SynthesisConfig;
use crate::errors::SynthesisError;
use crate::frequency::DesignFrequency;
use crate::math::{Scalar, R3};
use crate::patch::PatchDimensions;
use crate::substrate::{ConductorModel, SubstrateGeometry};

/// Axis-aligned box, corner plus extent, in millimetres.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box3 {
    /// Minimum corner.
    pub origin: R3,
    /// Extent along each axis (non-negative).
    pub size: R3,
}

impl Box3 {
    /// Creates a box from its minimum corner and extent.
    #[must_use]
    pub const fn new(origin: R3, size: R3) -> Self {
        Self { origin, size }
    }

    /// Maximum corner, `origin + size`.
    #[must_use]
    pub fn max_corner(&self) -> R3 {
        self.origin + self.size
    }

    /// Whether `other` lies inside this box (closed comparison on all axes).
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        let self_max = self.max_corner();
        let other_max = other.max_corner();
        (0..3).all(|axis| {
            other.origin[axis] >= self.origin[axis] && other_max[axis] <= self_max[axis]
        })
    }

    /// Whether this box's x/y footprint strictly contains `other`'s.
    #[must_use]
    pub fn footprint_strictly_contains(&self, other: &Self) -> bool {
        let self_max = self.max_corner();
        let other_max = other.max_corner();
        (0..2).all(|axis| {
            other.origin[axis] > self.origin[axis] && other_max[axis] < self_max[axis]
        })
    }
}

/// Rule mapping patch dimensions to the substrate footprint and the
/// clearance between the substrate and the radiation boundary.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MarginPolicy {
    /// Substrate = patch + k·h per axis; clearance = k·h/2 per side.
    AdditiveThicknessMultiple {
        /// Substrate-thickness multiple k (finite, > 0).
        k: Scalar,
    },
    /// Substrate = k × patch; clearance = (k − 1)·min(W, L)/2 per side.
    ScaleFactor {
        /// Footprint scale factor k (finite, > 1).
        k: Scalar,
    },
    /// Substrate keeps the 6·h additive footprint; clearance is the
    /// free-space quarter wavelength rounded to whole millimetres.
    #[default]
    QuarterWavelength,
}

impl MarginPolicy {
    /// The conventional additive preset, six substrate thicknesses.
    pub const SIX_THICKNESSES: Self = Self::AdditiveThicknessMultiple { k: 6.0 };
    /// The conventional scale preset, substrate twice the patch.
    pub const DOUBLE_PATCH: Self = Self::ScaleFactor { k: 2.0 };
}

/// Substrate, ground, and radiation boxes for one design.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnclosureGeometry {
    /// Dielectric slab, z ∈ [0, h].
    pub substrate: Box3,
    /// Ground metallization at z = 0: a zero-height sheet for
    /// infinitesimally thin conductors, a slab z ∈ [−t, 0] otherwise.
    pub ground: Box3,
    /// Open-boundary radiation volume rising from the ground plane.
    pub radiation: Box3,
    /// Per-side clearance between substrate footprint and radiation wall.
    pub clearance_mm: Scalar,
}

/// Sizes substrate, ground, and radiation volumes around a solved patch.
///
/// # Errors
///
/// Returns [`SynthesisError::InvalidParameter`] when the policy parameter is
/// out of range, and [`SynthesisError::DegenerateGeometry`] when the
/// clearance collapses below the degeneracy threshold (a quarter-wave margin
/// rounds to zero above roughly 150 GHz).
pub fn size_enclosure(
    dimensions: &PatchDimensions,
    substrate: SubstrateGeometry,
    frequency: DesignFrequency,
    policy: MarginPolicy,
    config: &SynthesisConfig,
) -> Result<EnclosureGeometry, SynthesisError> {
    config.validate()?;

    let width_mm = dimensions.width_mm;
    let length_mm = dimensions.length_mm;
    let h_mm = substrate.thickness_mm();
    let rounding = config.rounding;

    let (substrate_w_mm, substrate_l_mm, clearance_mm) = match policy {
        MarginPolicy::AdditiveThicknessMultiple { k } => {
            if !k.is_finite() || k <= 0.0 {
                return Err(SynthesisError::InvalidParameter {
                    name: "margin_thickness_multiple",
                    value: k,
                    reason: "must be a finite positive number",
                });
            }
            (
                rounding.round_length(width_mm + k * h_mm),
                rounding.round_length(length_mm + k * h_mm),
                rounding.round_length(k * h_mm / 2.0),
            )
        }
        MarginPolicy::ScaleFactor { k } => {
            if !k.is_finite() || k <= 1.0 {
                return Err(SynthesisError::InvalidParameter {
                    name: "margin_scale_factor",
                    value: k,
                    reason: "must be a finite number greater than 1",
                });
            }
            (
                rounding.round_length(k * width_mm),
                rounding.round_length(k * length_mm),
                rounding.round_length((k - 1.0) * width_mm.min(length_mm) / 2.0),
            )
        }
        MarginPolicy::QuarterWavelength => {
            let k = 6.0;
            (
                rounding.round_length(width_mm + k * h_mm),
                rounding.round_length(length_mm + k * h_mm),
                (frequency.free_space_wavelength_mm() / 4.0).round(),
            )
        }
    };

    if clearance_mm <= config.degeneracy_epsilon {
        return Err(SynthesisError::DegenerateGeometry {
            context: "radiation clearance",
            value: clearance_mm,
            epsilon: config.degeneracy_epsilon,
        });
    }

    let substrate_box = Box3::new(
        R3::new(-substrate_w_mm / 2.0, -substrate_l_mm / 2.0, 0.0),
        R3::new(substrate_w_mm, substrate_l_mm, h_mm),
    );
    let ground_box = match substrate.conductor() {
        ConductorModel::InfinitesimallyThin => Box3::new(
            R3::new(-substrate_w_mm / 2.0, -substrate_l_mm / 2.0, 0.0),
            R3::new(substrate_w_mm, substrate_l_mm, 0.0),
        ),
        ConductorModel::FiniteThickness { thickness_mm } => Box3::new(
            R3::new(-substrate_w_mm / 2.0, -substrate_l_mm / 2.0, -thickness_mm),
            R3::new(substrate_w_mm, substrate_l_mm, thickness_mm),
        ),
    };
    let radiation_w_mm = substrate_w_mm + 2.0 * clearance_mm;
    let radiation_l_mm = substrate_l_mm + 2.0 * clearance_mm;
    let radiation_box = Box3::new(
        R3::new(-radiation_w_mm / 2.0, -radiation_l_mm / 2.0, 0.0),
        R3::new(
            radiation_w_mm,
            radiation_l_mm,
            substrate.patch_top_mm() + clearance_mm,
        ),
    );

    Ok(EnclosureGeometry {
        substrate: substrate_box,
        ground: ground_box,
        radiation: radiation_box,
        clearance_mm,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::frequency::DesignFrequency;
    use crate::materials::SubstrateMaterial;
    use crate::patch::solve_dimensions;

    fn fr4_case() -> (PatchDimensions, SubstrateGeometry, DesignFrequency) {
        let f0 = DesignFrequency::from_ghz(1.575).unwrap();
        let substrate = SubstrateGeometry::new(1.6).unwrap();
        let dims = solve_dimensions(
            SubstrateMaterial::FR4_EPOXY,
            f0,
            substrate,
            &SynthesisConfig::default(),
        )
        .unwrap();
        (dims, substrate, f0)
    }

    #[test]
    fn additive_policy_grows_each_axis_by_six_thicknesses() {
        let (dims, substrate, f0) = fr4_case();
        let enclosure = size_enclosure(
            &dims,
            substrate,
            f0,
            MarginPolicy::SIX_THICKNESSES,
            &SynthesisConfig::default(),
        )
        .unwrap();
        assert_relative_eq!(enclosure.substrate.size.x, 67.560_058_995_255_67, epsilon = 1.0e-9);
        assert_relative_eq!(enclosure.substrate.size.y, 54.734_877_543_760_035, epsilon = 1.0e-9);
        assert_relative_eq!(enclosure.substrate.size.z, 1.6);
        assert_relative_eq!(enclosure.clearance_mm, 4.8, epsilon = 1.0e-9);
        assert_relative_eq!(enclosure.radiation.size.z, 6.4, epsilon = 1.0e-9);
    }

    #[test]
    fn scale_policy_doubles_the_patch_footprint() {
        let (dims, substrate, f0) = fr4_case();
        let enclosure = size_enclosure(
            &dims,
            substrate,
            f0,
            MarginPolicy::DOUBLE_PATCH,
            &SynthesisConfig::default(),
        )
        .unwrap();
        assert_relative_eq!(enclosure.substrate.size.x, 115.920_117_990_511_36, epsilon = 1.0e-9);
        assert_relative_eq!(enclosure.substrate.size.y, 90.269_755_087_520_07, epsilon = 1.0e-9);
        assert_relative_eq!(enclosure.clearance_mm, 22.567_438_771_880_017, epsilon = 1.0e-9);
    }

    #[test]
    fn quarter_wavelength_policy_rounds_the_clearance_to_whole_millimetres() {
        let (dims, substrate, f0) = fr4_case();
        let enclosure = size_enclosure(
            &dims,
            substrate,
            f0,
            MarginPolicy::QuarterWavelength,
            &SynthesisConfig::default(),
        )
        .unwrap();
        assert_relative_eq!(enclosure.clearance_mm, 48.0);
        assert_relative_eq!(enclosure.substrate.size.x, 67.560_058_995_255_67, epsilon = 1.0e-9);
        assert_relative_eq!(enclosure.radiation.size.x, 163.560_058_995_255_67, epsilon = 1.0e-9);
        assert_relative_eq!(enclosure.radiation.size.z, 49.6, epsilon = 1.0e-9);
        assert_relative_eq!(enclosure.radiation.origin.z, 0.0);
    }

    #[test]
    fn every_policy_strictly_contains_the_substrate_footprint() {
        let (dims, substrate, f0) = fr4_case();
        for policy in [
            MarginPolicy::SIX_THICKNESSES,
            MarginPolicy::DOUBLE_PATCH,
            MarginPolicy::QuarterWavelength,
        ] {
            let enclosure =
                size_enclosure(&dims, substrate, f0, policy, &SynthesisConfig::default()).unwrap();
            assert!(enclosure
                .radiation
                .footprint_strictly_contains(&enclosure.substrate));
            assert!(enclosure
                .radiation
                .footprint_strictly_contains(&enclosure.ground));
            assert!(enclosure.substrate.contains(&enclosure.ground) || enclosure.ground.origin.z < 0.0);
            assert!(enclosure.clearance_mm > 0.0);
        }
    }

    #[test]
    fn finite_conductors_sink_the_ground_slab_below_the_dielectric() {
        let (dims, _, f0) = fr4_case();
        let substrate = SubstrateGeometry::with_conductor(
            1.6,
            ConductorModel::FiniteThickness { thickness_mm: 0.035 },
        )
        .unwrap();
        let enclosure = size_enclosure(
            &dims,
            substrate,
            f0,
            MarginPolicy::QuarterWavelength,
            &SynthesisConfig::default(),
        )
        .unwrap();
        assert_relative_eq!(enclosure.ground.origin.z, -0.035);
        assert_relative_eq!(enclosure.ground.size.z, 0.035);
        assert_relative_eq!(enclosure.radiation.size.z, 1.635 + 48.0, epsilon = 1.0e-9);
    }

    #[test]
    fn millimetre_wave_quarter_wave_margin_is_degenerate() {
        let dims = PatchDimensions {
            width_mm: 0.6,
            length_mm: 0.5,
            effective_permittivity: 1.9,
            effective_length_mm: 0.55,
            fringing_extension_mm: 0.025,
        };
        let substrate = SubstrateGeometry::new(0.1).unwrap();
        let f0 = DesignFrequency::from_ghz(200.0).unwrap();
        let err = size_enclosure(
            &dims,
            substrate,
            f0,
            MarginPolicy::QuarterWavelength,
            &SynthesisConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SynthesisError::DegenerateGeometry {
                context: "radiation clearance",
                ..
            }
        ));
    }

    #[test]
    fn out_of_range_policy_parameters_are_rejected() {
        let (dims, substrate, f0) = fr4_case();
        let config = SynthesisConfig::default();
        assert!(matches!(
            size_enclosure(
                &dims,
                substrate,
                f0,
                MarginPolicy::ScaleFactor { k: 1.0 },
                &config,
            ),
            Err(SynthesisError::InvalidParameter {
                name: "margin_scale_factor",
                ..
            })
        ));
        assert!(matches!(
            size_enclosure(
                &dims,
                substrate,
                f0,
                MarginPolicy::AdditiveThicknessMultiple { k: 0.0 },
                &config,
            ),
            Err(SynthesisError::InvalidParameter {
                name: "margin_thickness_multiple",
                ..
            })
        ));
    }
}
