//! Benchmarks for rotor cipher machine operations.
//!
//! Measures machine construction, single-letter translate throughput,
//! and encode throughput scaling across message lengths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rotor_cipher::random::WiringGenerator;
use rotor_cipher::{Key, Machine, MachineBuilder};

/// Seed used consistently across all benchmarks.
const BENCH_SEED: u64 = 2024;

/// Benchmarks machine construction from the preset wiring.
///
/// Covers parsing and validating three rotors, the reflector and the
/// plugboard, including inverse table computation.
fn bench_build_preset(c: &mut Criterion) {
    c.bench_function("build_preset", |b| {
        b.iter(|| black_box(Machine::with_default_wiring().unwrap()));
    });
}

/// Benchmarks machine construction from seeded random wiring.
fn bench_build_random(c: &mut Criterion) {
    c.bench_function("build_random", |b| {
        b.iter(|| {
            let mut source = WiringGenerator::from_seed(black_box(BENCH_SEED));
            black_box(
                MachineBuilder::new()
                    .random_key()
                    .build_with(&mut source)
                    .unwrap(),
            )
        });
    });
}

/// Benchmarks single-letter `translate()` throughput.
///
/// The key advances naturally between iterations, so carries into the
/// middle and slow rotors are included at their real frequency.
fn bench_translate(c: &mut Criterion) {
    let mut machine = Machine::with_default_wiring().unwrap();

    let mut group = c.benchmark_group("translate_single_letter");
    group.throughput(Throughput::Elements(1));

    group.bench_function("preset", |b| {
        b.iter(|| machine.translate(black_box('Q')).unwrap());
    });

    group.finish();
}

/// Benchmarks `encode()` across message lengths.
///
/// Includes normalization and block padding of the raw input.
fn bench_encode_scaling(c: &mut Criterion) {
    let lengths: &[usize] = &[25, 250, 2500];
    let mut machine = Machine::with_default_wiring().unwrap();

    let mut group = c.benchmark_group("encode_scaling");

    for &len in lengths {
        let message: String = "the quick brown fox jumps over the lazy dog "
            .chars()
            .cycle()
            .take(len)
            .collect();

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &message, |b, msg| {
            b.iter(|| machine.encode(black_box(msg), Some(Key::ZERO)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build_preset,
    bench_build_random,
    bench_translate,
    bench_encode_scaling,
);
criterion_main!(benches);
