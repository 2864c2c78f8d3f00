//! End-to-end synthesis pipeline.

use crate::config::SynthesisConfig;
use crate::enclosure::{size_enclosure, EnclosureGeometry, MarginPolicy};
use crate::errors::SynthesisError;
use crate::feed::{probe_feed, FeedPoint};
use crate::frequency::DesignFrequency;
use crate::materials::{MaterialCatalog, SubstrateMaterial};
use crate::patch::{solve_dimensions, PatchDimensions};
use crate::substrate::SubstrateGeometry;
use crate::truncation::{corner_truncation, TruncationSize};

/// Polarization the synthesized patch radiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polarization {
    /// Plain rectangular patch, no corner perturbation.
    Linear,
    /// Corners truncated for right-hand circular polarization.
    #[default]
    RightHandCircular,
}

/// Everything a synthesis run consumes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DesignInput {
    /// Label of the substrate material, carried through to reports.
    pub material_name: String,
    /// Substrate material properties.
    pub material: SubstrateMaterial,
    /// Target resonant frequency.
    pub frequency: DesignFrequency,
    /// Substrate stack-up.
    pub substrate: SubstrateGeometry,
    /// Enclosure margin policy.
    pub margin: MarginPolicy,
    /// Requested polarization.
    pub polarization: Polarization,
}

impl DesignInput {
    /// Creates an input with the default quarter-wave margin and circular
    /// polarization.
    #[must_use]
    pub fn new(
        material_name: impl Into<String>,
        material: SubstrateMaterial,
        frequency: DesignFrequency,
        substrate: SubstrateGeometry,
    ) -> Self {
        Self {
            material_name: material_name.into(),
            material,
            frequency,
            substrate,
            margin: MarginPolicy::default(),
            polarization: Polarization::default(),
        }
    }

    /// Creates an input by resolving `material_name` against a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::MaterialNotFound`] when the name is not in
    /// the catalog.
    pub fn from_catalog(
        catalog: &MaterialCatalog,
        material_name: &str,
        frequency: DesignFrequency,
        substrate: SubstrateGeometry,
    ) -> Result<Self, SynthesisError> {
        let material = catalog.resolve(material_name)?;
        Ok(Self::new(material_name, material, frequency, substrate))
    }
}

/// Complete synthesized design: the input echoed back plus every derived
/// quantity. Two runs over the same input and configuration produce
/// bit-identical values.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PatchDesign {
    /// Label of the substrate material.
    pub material_name: String,
    /// Substrate material properties.
    pub material: SubstrateMaterial,
    /// Target resonant frequency.
    pub frequency: DesignFrequency,
    /// Substrate stack-up.
    pub substrate: SubstrateGeometry,
    /// Patch dimensions from the transmission-line model.
    pub patch: PatchDimensions,
    /// Coaxial probe location.
    pub feed: FeedPoint,
    /// Corner truncation, present for circularly polarized designs.
    pub truncation: Option<TruncationSize>,
    /// Substrate, ground, and radiation volumes.
    pub enclosure: EnclosureGeometry,
}

/// Runs the synthesis cascade: dimensions, feed, truncation, enclosure.
///
/// Stages run in dependency order over immutable inputs; the first failed
/// precondition aborts the run with that stage's error.
///
/// # Errors
///
/// Propagates [`SynthesisError`] from the first failing stage.
pub fn synthesize(
    input: &DesignInput,
    config: &SynthesisConfig,
) -> Result<PatchDesign, SynthesisError> {
    config.validate()?;

    let patch = solve_dimensions(input.material, input.frequency, input.substrate, config)?;
    let feed = probe_feed(&patch, config);
    let truncation = match input.polarization {
        Polarization::Linear => None,
        Polarization::RightHandCircular => Some(corner_truncation(
            input.material,
            input.frequency,
            input.substrate,
            &patch,
            config,
        )?),
    };
    let enclosure = size_enclosure(&patch, input.substrate, input.frequency, input.margin, config)?;

    Ok(PatchDesign {
        material_name: input.material_name.clone(),
        material: input.material,
        frequency: input.frequency,
        substrate: input.substrate,
        patch,
        feed,
        truncation,
        enclosure,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::config::Rounding;

    fn gps_input() -> DesignInput {
        DesignInput::from_catalog(
            &MaterialCatalog::builtin(),
            "FR4_epoxy",
            DesignFrequency::from_ghz(1.575).unwrap(),
            SubstrateGeometry::new(1.6).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn circular_design_carries_every_derived_quantity() {
        let design = synthesize(&gps_input(), &SynthesisConfig::default()).unwrap();
        assert_eq!(design.material_name, "FR4_epoxy");
        assert_relative_eq!(design.patch.width_mm, 57.960_058_995_255_68, epsilon = 1.0e-9);
        assert_relative_eq!(design.patch.length_mm, 45.134_877_543_760_034, epsilon = 1.0e-9);
        assert_relative_eq!(design.feed.y_mm, -11.520_602_830_411_66, epsilon = 1.0e-9);
        assert_eq!(design.feed.x_mm, 0.0);
        let truncation = design.truncation.expect("circular design truncates corners");
        assert_relative_eq!(truncation.edge_mm, 4.039_277_963_597_028, epsilon = 1.0e-9);
        assert_relative_eq!(design.enclosure.clearance_mm, 48.0);
    }

    #[test]
    fn linear_design_skips_corner_truncation() {
        let input = DesignInput {
            polarization: Polarization::Linear,
            ..gps_input()
        };
        let design = synthesize(&input, &SynthesisConfig::default()).unwrap();
        assert!(design.truncation.is_none());
        assert_relative_eq!(design.patch.width_mm, 57.960_058_995_255_68, epsilon = 1.0e-9);
    }

    #[test]
    fn synthesis_is_idempotent_bit_for_bit() {
        let input = gps_input();
        let config = SynthesisConfig::default();
        let first = synthesize(&input, &config).unwrap();
        let second = synthesize(&input, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn per_stage_design_matches_the_fabrication_sheet() {
        let config = SynthesisConfig {
            rounding: Rounding::PerStage,
            ..SynthesisConfig::default()
        };
        let design = synthesize(&gps_input(), &config).unwrap();
        assert_relative_eq!(design.patch.width_mm, 57.96, epsilon = 1.0e-12);
        assert_relative_eq!(design.patch.length_mm, 45.135, epsilon = 1.0e-12);
        assert_relative_eq!(design.feed.corner_y_mm, 11.047, epsilon = 1.0e-12);
        assert_relative_eq!(design.feed.y_mm, -11.52, epsilon = 1.0e-12);
        assert_eq!(design.feed.x_mm, 0.0);
        let truncation = design.truncation.expect("circular design truncates corners");
        assert_relative_eq!(truncation.edge_mm, 4.04, epsilon = 1.0e-12);
        assert_relative_eq!(design.enclosure.substrate.size.x, 67.56, epsilon = 1.0e-12);
        assert_relative_eq!(design.enclosure.substrate.size.y, 54.735, epsilon = 1.0e-12);
    }

    #[test]
    fn unknown_material_aborts_before_any_stage() {
        let err = DesignInput::from_catalog(
            &MaterialCatalog::builtin(),
            "unobtainium",
            DesignFrequency::from_ghz(1.575).unwrap(),
            SubstrateGeometry::new(1.6).unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, SynthesisError::MaterialNotFound { .. }));
    }

    #[test]
    fn collapsed_length_aborts_the_cascade() {
        let input = DesignInput::new(
            "FR4_epoxy",
            SubstrateMaterial::FR4_EPOXY,
            DesignFrequency::from_ghz(15.0).unwrap(),
            SubstrateGeometry::new(10.0).unwrap(),
        );
        let err = synthesize(&input, &SynthesisConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            SynthesisError::DegenerateGeometry {
                context: "patch length",
                ..
            }
        ));
    }
}
