//! Frequency sweep utilities for batch synthesis.

use crate::config::SynthesisConfig;
use crate::design::{synthesize, DesignInput, PatchDesign};
use crate::errors::SynthesisError;
use crate::frequency::DesignFrequency;
use crate::math::Scalar;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Generates `n` frequencies spanning ±`fractional_band` around `centre_hz`.
///
/// A 10 % band around 1.575 GHz is `band_around(1.575e9, 0.10, n)`, running
/// from 1.4175 to 1.7325 GHz.
#[must_use]
pub fn band_around(centre_hz: Scalar, fractional_band: Scalar, n: usize) -> Vec<Scalar> {
    linspace(
        centre_hz * (1.0 - fractional_band),
        centre_hz * (1.0 + fractional_band),
        n,
    )
}

/// One evaluated grid point of a frequency sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    /// Grid frequency in hertz.
    pub f0_hz: Scalar,
    /// Synthesis outcome at this frequency.
    pub design: Result<PatchDesign, SynthesisError>,
}

/// Re-runs synthesis across a frequency grid, holding everything else fixed.
///
/// Each grid point is evaluated independently: a failure is captured in that
/// point's `design` and the batch continues.
#[must_use]
pub fn frequency_sweep(
    input: &DesignInput,
    frequencies_hz: &[Scalar],
    config: &SynthesisConfig,
) -> Vec<SweepPoint> {
    frequencies_hz
        .iter()
        .map(|&f0_hz| {
            let design = DesignFrequency::from_hz(f0_hz).and_then(|frequency| {
                let point = DesignInput {
                    frequency,
                    ..input.clone()
                };
                synthesize(&point, config)
            });
            SweepPoint { f0_hz, design }
        })
        .collect()
}
