use std::io;

use patch_synth::config::SynthesisConfig;
use patch_synth::design::{synthesize, DesignInput};
use patch_synth::frequency::DesignFrequency;
use patch_synth::materials::MaterialCatalog;
use patch_synth::report::write_parameter_report;
use patch_synth::substrate::SubstrateGeometry;

fn main() {
    // GPS L1 patch on 1.6 mm FR-4, coax-fed, corner-truncated for RHCP.
    let catalog = MaterialCatalog::builtin();
    let input = DesignInput::from_catalog(
        &catalog,
        "FR4_epoxy",
        DesignFrequency::from_ghz(1.575).expect("valid frequency"),
        SubstrateGeometry::new(1.6).expect("valid substrate"),
    )
    .expect("material in catalog");

    let design = synthesize(&input, &SynthesisConfig::default()).expect("synthesis succeeds");

    write_parameter_report(io::stdout().lock(), &design).expect("stdout writable");
}
