//! Validated design-frequency carrier.

use crate::constants::{free_space_wavelength_mm, ghz_from_hz, hz_from_ghz};
use crate::errors::SynthesisError;
use crate::math::Scalar;

/// Target resonant frequency of a synthesis run.
///
/// The value is stored in hertz and is guaranteed finite and positive by
/// construction, so downstream stages can divide by it freely.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DesignFrequency {
    hz: Scalar,
}

impl DesignFrequency {
    /// Creates a design frequency from a value in hertz.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::InvalidParameter`] when `hz` is not a finite
    /// positive number.
    pub fn from_hz(hz: Scalar) -> Result<Self, SynthesisError> {
        if !hz.is_finite() || hz <= 0.0 {
            return Err(SynthesisError::InvalidParameter {
                name: "frequency_hz",
                value: hz,
                reason: "must be a finite positive number",
            });
        }
        Ok(Self { hz })
    }

    /// Creates a design frequency from a value in gigahertz.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::InvalidParameter`] when `ghz` is not a
    /// finite positive number.
    pub fn from_ghz(ghz: Scalar) -> Result<Self, SynthesisError> {
        Self::from_hz(hz_from_ghz(ghz))
    }

    /// Frequency in hertz.
    #[inline]
    #[must_use]
    pub const fn hz(self) -> Scalar {
        self.hz
    }

    /// Frequency in gigahertz.
    #[inline]
    #[must_use]
    pub fn ghz(self) -> Scalar {
        ghz_from_hz(self.hz)
    }

    /// Free-space wavelength at this frequency, in millimetres.
    #[inline]
    #[must_use]
    pub fn free_space_wavelength_mm(self) -> Scalar {
        free_space_wavelength_mm(self.hz)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn gigahertz_constructor_scales_to_hertz() {
        let f0 = DesignFrequency::from_ghz(1.575).unwrap();
        assert_relative_eq!(f0.hz(), 1.575e9);
        assert_relative_eq!(f0.ghz(), 1.575);
    }

    #[test]
    fn wavelength_uses_millimetre_speed_of_light() {
        let f0 = DesignFrequency::from_ghz(1.575).unwrap();
        assert_relative_eq!(
            f0.free_space_wavelength_mm(),
            190.476_190_476_190_48,
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn non_positive_and_non_finite_frequencies_are_rejected() {
        for hz in [0.0, -1.0e9, Scalar::NAN, Scalar::INFINITY] {
            assert!(matches!(
                DesignFrequency::from_hz(hz),
                Err(SynthesisError::InvalidParameter {
                    name: "frequency_hz",
                    ..
                })
            ));
        }
    }
}
