//! Convenience re-exports for building patch synthesis flows.

pub use crate::config::{Rounding, SynthesisConfig};
pub use crate::constants::*;
pub use crate::design::{synthesize, DesignInput, PatchDesign, Polarization};
pub use crate::enclosure::{size_enclosure, Box3, EnclosureGeometry, MarginPolicy};
pub use crate::errors::SynthesisError;
pub use crate::feed::{probe_feed, FeedPoint};
pub use crate::frequency::DesignFrequency;
pub use crate::materials::{MaterialCatalog, SubstrateMaterial};
pub use crate::math::{R3, Scalar};
pub use crate::patch::{solve_dimensions, PatchDimensions};
pub use crate::report::{write_parameter_report, write_sweep_csv};
pub use crate::substrate::{ConductorModel, SubstrateGeometry};
pub use crate::sweep::{band_around, frequency_sweep, linspace, SweepPoint};
pub use crate::truncation::{corner_truncation, TruncationSize};
