//! Coaxial probe feed placement.

use crate::config::SynthesisConfig;
use crate::math::Scalar;
use crate::patch::PatchDimensions;

/// Probe feed location on the patch.
///
/// The corner-referenced coordinates locate the probe from the patch's
/// lower-left corner; the centre-referenced offsets locate it in the frame
/// whose origin is the patch centroid, which is where the enclosure boxes are
/// centred. `x_mm` is identically `0.0`: the probe sits on the centreline of
/// the radiating edge by construction, and the offset is formed as
/// `W/2 − W/2` so the identity survives every rounding policy.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedPoint {
    /// Probe x-position from the patch corner, in millimetres (W/2).
    pub corner_x_mm: Scalar,
    /// Probe y-position from the patch corner, in millimetres (L/(2√ε_eff)).
    pub corner_y_mm: Scalar,
    /// Offset from the patch centre along x, in millimetres (identically 0).
    pub x_mm: Scalar,
    /// Offset from the patch centre along y, in millimetres.
    pub y_mm: Scalar,
}

/// Places the coaxial probe for a patch fed on its centreline.
///
/// The probe sits at x = W/2 and y = L/(2√ε_eff) from the patch corner, the
/// standard inset that lands near the 50 Ω impedance locus of the
/// transmission-line model. Infallible: every [`PatchDimensions`] produced by
/// the dimension solver yields a probe strictly inside the patch.
#[must_use]
pub fn probe_feed(dimensions: &PatchDimensions, config: &SynthesisConfig) -> FeedPoint {
    let width_mm = dimensions.width_mm;
    let length_mm = dimensions.length_mm;

    let corner_x_mm = width_mm / 2.0;
    let corner_y_mm = config
        .rounding
        .round_length(length_mm / (2.0 * dimensions.effective_permittivity.sqrt()));

    FeedPoint {
        corner_x_mm,
        corner_y_mm,
        x_mm: corner_x_mm - width_mm / 2.0,
        y_mm: config.rounding.round_length(corner_y_mm - length_mm / 2.0),
    }
}
