//! Substrate stack-up geometry.

use crate::errors::SynthesisError;
use crate::math::Scalar;

/// How patch and ground metallization is modeled in the vertical stack-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConductorModel {
    /// Zero-thickness sheets, the usual assumption of the closed-form model.
    #[default]
    InfinitesimallyThin,
    /// Sheets with a physical copper thickness, e.g. 0.035 mm for 1 oz foil.
    FiniteThickness {
        /// Metal thickness in millimetres.
        thickness_mm: Scalar,
    },
}

impl ConductorModel {
    /// Metal thickness contributed by this model, in millimetres.
    #[must_use]
    pub const fn metal_thickness_mm(self) -> Scalar {
        match self {
            Self::InfinitesimallyThin => 0.0,
            Self::FiniteThickness { thickness_mm } => thickness_mm,
        }
    }
}

/// Dielectric slab height plus the conductor model above and below it.
///
/// The slab occupies z ∈ [0, h] with the ground plane at z = 0 and the patch
/// on the top face.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubstrateGeometry {
    thickness_mm: Scalar,
    conductor: ConductorModel,
}

impl SubstrateGeometry {
    /// Creates a substrate of height `thickness_mm` with infinitesimally thin
    /// conductors.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::InvalidParameter`] when the height is not a
    /// finite positive number.
    pub fn new(thickness_mm: Scalar) -> Result<Self, SynthesisError> {
        Self::with_conductor(thickness_mm, ConductorModel::default())
    }

    /// Creates a substrate with an explicit conductor model.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::InvalidParameter`] when the substrate height
    /// is not a finite positive number or a finite conductor thickness is
    /// negative or non-finite.
    pub fn with_conductor(
        thickness_mm: Scalar,
        conductor: ConductorModel,
    ) -> Result<Self, SynthesisError> {
        if !thickness_mm.is_finite() || thickness_mm <= 0.0 {
            return Err(SynthesisError::InvalidParameter {
                name: "substrate_thickness_mm",
                value: thickness_mm,
                reason: "must be a finite positive number",
            });
        }
        if let ConductorModel::FiniteThickness { thickness_mm: t } = conductor {
            if !t.is_finite() || t < 0.0 {
                return Err(SynthesisError::InvalidParameter {
                    name: "conductor_thickness_mm",
                    value: t,
                    reason: "must be a finite non-negative number",
                });
            }
        }
        Ok(Self {
            thickness_mm,
            conductor,
        })
    }

    /// Dielectric height h in millimetres.
    #[inline]
    #[must_use]
    pub const fn thickness_mm(self) -> Scalar {
        self.thickness_mm
    }

    /// Conductor model for patch and ground metallization.
    #[inline]
    #[must_use]
    pub const fn conductor(self) -> ConductorModel {
        self.conductor
    }

    /// Height of the top of the patch metallization above the ground plane.
    #[inline]
    #[must_use]
    pub const fn patch_top_mm(self) -> Scalar {
        self.thickness_mm + self.conductor.metal_thickness_mm()
    }
}
