#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and frequency unit conversions.
pub mod constants;
/// Synthesis options: rounding policy and degeneracy threshold.
pub mod config;
/// Shared mathematical primitives (scalar and vector aliases, rounding).
pub mod math;
/// Validated design-frequency carrier.
pub mod frequency;
/// Substrate material properties and the laminate catalog.
pub mod materials;
/// Substrate stack-up geometry and conductor models.
pub mod substrate;
/// Transmission-line-model patch dimension solver.
pub mod patch;
/// Coaxial probe feed placement.
pub mod feed;
/// Corner truncation sizing for circular polarization.
pub mod truncation;
/// Substrate, ground, and radiation enclosure sizing.
pub mod enclosure;
/// End-to-end synthesis pipeline.
pub mod design;
/// Frequency sweep builders and batch synthesis.
pub mod sweep;
/// Parameter-sheet and sweep CSV writers.
pub mod report;
/// Error types shared across the crate.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
