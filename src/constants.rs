//! Baseline physical constants and frequency utility functions.
//!
//! ## Unit system
//!
//! All geometry in this crate is expressed in millimetres and all frequencies
//! in hertz, so the speed of light is carried in mm/s. The value is the
//! engineering approximation 3 × 10¹¹ mm/s traditionally used in microstrip
//! design formulas rather than the exact SI definition; closed-form patch
//! synthesis is far less precise than the 0.07 % this introduces.
//!
//! ## References
//!
//! - Balanis, C. A. (2016). *Antenna Theory: Analysis and Design*, 4th ed.,
//!   ch. 14 (Microstrip Antennas).
//! - NIST Reference on Constants, Units, and Uncertainty:
//!   <https://physics.nist.gov/cuu/Constants/>

/// Speed of light in vacuum _c_ in millimetres per second (mm/s).
/// Engineering approximation: 3 × 10¹¹ mm/s.
pub const SPEED_OF_LIGHT_MM_PER_S: f64 = 3.0e11;

/// Number of hertz per gigahertz.
pub const HZ_PER_GHZ: f64 = 1.0e9;

/// Returns the free-space wavelength in millimetres for a frequency in hertz.
#[inline]
#[must_use]
pub fn free_space_wavelength_mm(hz: f64) -> f64 {
    SPEED_OF_LIGHT_MM_PER_S / hz
}

/// Converts a frequency in gigahertz to hertz.
#[inline]
#[must_use]
pub fn hz_from_ghz(ghz: f64) -> f64 {
    ghz * HZ_PER_GHZ
}

/// Converts a frequency in hertz to gigahertz.
#[inline]
#[must_use]
pub fn ghz_from_hz(hz: f64) -> f64 {
    hz / HZ_PER_GHZ
}
