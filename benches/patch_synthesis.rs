use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use patch_synth::config::SynthesisConfig;
use patch_synth::design::{synthesize, DesignInput};
use patch_synth::frequency::DesignFrequency;
use patch_synth::materials::SubstrateMaterial;
use patch_synth::substrate::SubstrateGeometry;
use patch_synth::sweep::{band_around, frequency_sweep};

fn build_gps_input() -> DesignInput {
    DesignInput::new(
        "FR4_epoxy",
        SubstrateMaterial::FR4_EPOXY,
        DesignFrequency::from_ghz(1.575).expect("valid frequency"),
        SubstrateGeometry::new(1.6).expect("valid substrate"),
    )
}

fn bench_single_design(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_design");
    let config = SynthesisConfig::default();

    group.bench_function("fr4_gps", |b| {
        b.iter_batched(
            build_gps_input,
            |input| {
                let _ = synthesize(&input, &config);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_band_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("band_sweep");
    let config = SynthesisConfig::default();
    let grid = band_around(1.575e9, 0.10, 10_000);

    group.bench_function(BenchmarkId::new("fr4_gps", grid.len()), |b| {
        b.iter_batched(
            build_gps_input,
            |input| {
                let _ = frequency_sweep(&input, &grid, &config);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_single_design, bench_band_sweep);
criterion_main!(benches);
