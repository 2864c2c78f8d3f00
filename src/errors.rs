//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// Top-level error type for the crate.
///
/// Synthesis is a cascade of closed-form stages; each stage reports the first
/// violated precondition through one of these variants and the cascade stops.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthesisError {
    /// Raised when a material name cannot be resolved against the catalog.
    #[error("material not found in catalog: {name:?}")]
    MaterialNotFound {
        /// Name the lookup was attempted with.
        name: String,
    },
    /// Raised when an input parameter lies outside its physical domain.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name as exposed in the public API.
        name: &'static str,
        /// Offending value.
        value: Scalar,
        /// Domain constraint that was violated.
        reason: &'static str,
    },
    /// Raised when a derived dimension leaves its realizable range and the
    /// requested geometry cannot be built.
    #[error("degenerate geometry in {context}: {value} mm (limit {epsilon} mm)")]
    DegenerateGeometry {
        /// Stage that produced the degenerate dimension.
        context: &'static str,
        /// Derived value in millimetres.
        value: Scalar,
        /// Limit the value was compared against.
        epsilon: Scalar,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_quantity() {
        let err = SynthesisError::InvalidParameter {
            name: "relative_permittivity",
            value: 0.5,
            reason: "must be greater than 1",
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter relative_permittivity = 0.5: must be greater than 1"
        );

        let err = SynthesisError::MaterialNotFound {
            name: "unobtainium".to_owned(),
        };
        assert!(err.to_string().contains("unobtainium"));
    }
}
