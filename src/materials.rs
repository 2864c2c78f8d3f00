//! Substrate material properties and the laminate catalog.

use std::collections::BTreeMap;

use crate::errors::SynthesisError;
use crate::math::{CScalar, Scalar};

/// Linear isotropic substrate material parameters.
///
/// Fields are dimensionless relative quantities except `conductivity`, which
/// is in S/m. The closed-form model only consumes `relative_permittivity`;
/// the remaining fields travel with the design for reporting and for the
/// lossy-dielectric representation used by downstream solvers.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubstrateMaterial {
    /// Relative permittivity εᵣ (dimensionless, > 1).
    pub relative_permittivity: Scalar,
    /// Dielectric loss tangent tan δ (dimensionless, ≥ 0).
    pub loss_tangent: Scalar,
    /// Relative permeability μᵣ (dimensionless, > 0).
    pub relative_permeability: Scalar,
    /// Bulk electrical conductivity σ in S/m (≥ 0).
    pub conductivity: Scalar,
}

impl SubstrateMaterial {
    /// FR-4 glass epoxy laminate.
    pub const FR4_EPOXY: Self = Self {
        relative_permittivity: 4.4,
        loss_tangent: 0.02,
        relative_permeability: 1.0,
        conductivity: 0.0,
    };
    /// Rogers RT/duroid 5870 PTFE laminate.
    pub const RT_DUROID_5870: Self = Self {
        relative_permittivity: 2.33,
        loss_tangent: 0.0012,
        relative_permeability: 1.0,
        conductivity: 0.0,
    };
    /// Rogers RT/duroid 5880 PTFE laminate.
    pub const RT_DUROID_5880: Self = Self {
        relative_permittivity: 2.2,
        loss_tangent: 0.0009,
        relative_permeability: 1.0,
        conductivity: 0.0,
    };
    /// Rogers RO4350 hydrocarbon ceramic laminate.
    pub const RO4350: Self = Self {
        relative_permittivity: 3.48,
        loss_tangent: 0.0037,
        relative_permeability: 1.0,
        conductivity: 0.0,
    };
    /// Taconic TLY PTFE laminate.
    pub const TACONIC_TLY: Self = Self {
        relative_permittivity: 2.2,
        loss_tangent: 0.0009,
        relative_permeability: 1.0,
        conductivity: 0.0,
    };

    /// Creates a lossy dielectric with unit permeability and zero bulk
    /// conductivity.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::InvalidParameter`] when a field lies outside
    /// its physical domain.
    pub fn new(relative_permittivity: Scalar, loss_tangent: Scalar) -> Result<Self, SynthesisError> {
        let material = Self {
            relative_permittivity,
            loss_tangent,
            relative_permeability: 1.0,
            conductivity: 0.0,
        };
        material.validate()?;
        Ok(material)
    }

    /// Re-checks every field against its physical domain.
    ///
    /// Solvers call this at their boundary so that hand-built values get the
    /// same scrutiny as values from [`Self::new`].
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::InvalidParameter`] naming the first field
    /// that lies outside its domain.
    pub fn validate(&self) -> Result<(), SynthesisError> {
        if !self.relative_permittivity.is_finite() || self.relative_permittivity <= 1.0 {
            return Err(SynthesisError::InvalidParameter {
                name: "relative_permittivity",
                value: self.relative_permittivity,
                reason: "must be a finite number greater than 1",
            });
        }
        if !self.loss_tangent.is_finite() || self.loss_tangent < 0.0 {
            return Err(SynthesisError::InvalidParameter {
                name: "loss_tangent",
                value: self.loss_tangent,
                reason: "must be a finite non-negative number",
            });
        }
        if !self.relative_permeability.is_finite() || self.relative_permeability <= 0.0 {
            return Err(SynthesisError::InvalidParameter {
                name: "relative_permeability",
                value: self.relative_permeability,
                reason: "must be a finite positive number",
            });
        }
        if !self.conductivity.is_finite() || self.conductivity < 0.0 {
            return Err(SynthesisError::InvalidParameter {
                name: "conductivity",
                value: self.conductivity,
                reason: "must be a finite non-negative number",
            });
        }
        Ok(())
    }

    /// Complex relative permittivity εᵣ·(1 − j·tan δ).
    #[must_use]
    pub fn complex_relative_permittivity(&self) -> CScalar {
        CScalar::new(
            self.relative_permittivity,
            -self.relative_permittivity * self.loss_tangent,
        )
    }
}

/// Name-indexed collection of substrate materials.
///
/// Stands in for a host material library: lookups are case-insensitive
/// against the canonical laminate names, and unknown names surface as
/// [`SynthesisError::MaterialNotFound`] rather than a panic.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    entries: BTreeMap<String, SubstrateMaterial>,
}

impl MaterialCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Creates a catalog stocked with common commercial laminates.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        catalog.insert("FR4_epoxy", SubstrateMaterial::FR4_EPOXY);
        catalog.insert("Rogers RT/duroid 5870 (tm)", SubstrateMaterial::RT_DUROID_5870);
        catalog.insert("Rogers RT/duroid 5880 (tm)", SubstrateMaterial::RT_DUROID_5880);
        catalog.insert("Rogers RO4350 (tm)", SubstrateMaterial::RO4350);
        catalog.insert("Taconic TLY (tm)", SubstrateMaterial::TACONIC_TLY);
        catalog
    }

    /// Registers `material` under `name`, replacing any previous entry with
    /// the same canonical name.
    pub fn insert(&mut self, name: impl Into<String>, material: SubstrateMaterial) {
        self.entries.insert(name.into(), material);
    }

    /// Looks up a material by name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::MaterialNotFound`] carrying the requested
    /// name when no entry matches.
    pub fn resolve(&self, name: &str) -> Result<SubstrateMaterial, SynthesisError> {
        self.entries
            .iter()
            .find(|(canonical, _)| canonical.eq_ignore_ascii_case(name))
            .map(|(_, material)| *material)
            .ok_or_else(|| SynthesisError::MaterialNotFound {
                name: name.to_owned(),
            })
    }

    /// Iterates over the canonical names in the catalog.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered materials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the catalog holds no materials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
