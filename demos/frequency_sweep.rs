use std::io;

use patch_synth::config::SynthesisConfig;
use patch_synth::design::DesignInput;
use patch_synth::frequency::DesignFrequency;
use patch_synth::materials::SubstrateMaterial;
use patch_synth::report::write_sweep_csv;
use patch_synth::substrate::SubstrateGeometry;
use patch_synth::sweep::{band_around, frequency_sweep};

fn main() {
    // Re-synthesize the GPS patch across a ±10 % band and dump the CSV.
    let input = DesignInput::new(
        "FR4_epoxy",
        SubstrateMaterial::FR4_EPOXY,
        DesignFrequency::from_ghz(1.575).expect("valid frequency"),
        SubstrateGeometry::new(1.6).expect("valid substrate"),
    );

    let grid = band_around(input.frequency.hz(), 0.10, 41);
    let points = frequency_sweep(&input, &grid, &SynthesisConfig::default());

    write_sweep_csv(io::stdout().lock(), &points).expect("stdout writable");
}
