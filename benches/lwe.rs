// Copyright © 2024 The pq-lwe Authors
//
// This file is part of pq-lwe.
//
// pq-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

use criterion::*;
use pq_lwe::construction::pk_encryption::{enc_bits, par_enc_bits, Lwe, PKEncryption};
use pq_lwe::sample::random_source::ChaChaSource;

/// Performs a full-cycle of gen, enc, dec with [`Lwe`] for `m = 2n`
/// and a modulus large enough to never fail.
fn lwe_cycle(n: usize, rng: &mut ChaChaSource) {
    let lwe = Lwe::new(n, 2 * n, 65521, 2).unwrap();

    let (pk, sk) = lwe.gen(rng);
    let cipher = lwe.enc(&pk, 1, rng);
    let _ = lwe.dec(&sk, &cipher);
}

/// Benchmark [lwe_cycle] with `n = 64`.
///
/// This benchmark can be run with for example:
/// - `cargo criterion Lwe\ n=64`
/// - `cargo bench --bench benchmarks Lwe\ n=64`
/// - `cargo flamegraph --bench benchmarks -- --bench Lwe\ n=64`
///
/// Shorter variants or regex expressions can also be used to specify the
/// benchmark name. The `\ ` is used to escape the space, alternatively,
/// quotation marks can be used.
fn bench_lwe_cycle(c: &mut Criterion) {
    let mut rng = ChaChaSource::seed_from_u64(0);
    c.bench_function("Lwe n=64", |b| b.iter(|| lwe_cycle(64, &mut rng)));
}

/// Benchmark [lwe_cycle] with `n = 16, 32, 64, 128, 256`
///
/// This benchmark can be run with for example:
/// - `cargo criterion "Lwe\ n\ sweep"`
/// - `cargo criterion Lwe\ n\ sweep/n=32` (only run the n=32 benchmark).
/// - `cargo bench --bench benchmarks Lwe\ n\ sweep`
fn bench_lwe_cycle_n_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("Lwe n sweep");
    let mut rng = ChaChaSource::seed_from_u64(1);

    for n in [16, 32, 64, 128, 256].iter() {
        group.bench_function(format!("n={n}"), |b| b.iter(|| lwe_cycle(*n, &mut rng)));
    }

    group.finish();
}

/// Compares sequential and parallel encryption of a 1024-bit message.
///
/// This benchmark can be run with for example:
/// - `cargo criterion "Lwe\ message"`
fn bench_lwe_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("Lwe message");
    let mut rng = ChaChaSource::seed_from_u64(2);
    let lwe = Lwe::new(128, 256, 65521, 2).unwrap();
    let (pk, _) = lwe.gen(&mut rng);
    let bits: Vec<u8> = (0..1024).map(|i| (i % 3 == 0) as u8).collect();

    group.bench_function("sequential", |b| {
        b.iter(|| enc_bits(&lwe, &pk, &bits, &mut rng))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| par_enc_bits(&lwe, &pk, &bits, &mut rng))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lwe_cycle,
    bench_lwe_cycle_n_sweep,
    bench_lwe_message
);
