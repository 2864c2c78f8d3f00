//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::Vector3;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for three-dimensional real vectors, in millimetres.
pub type R3 = Vector3<Scalar>;
/// Primary complex scalar type, used for lossy material quantities.
pub type CScalar = num_complex::Complex<Scalar>;

/// Rounds `value` to `decimals` decimal places, half away from zero.
#[must_use]
pub fn round_to_decimals(value: Scalar, decimals: u32) -> Scalar {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
