//! Tableau insertion benchmarks
//!
//! Small enough to finish within a minute locally and on CI.

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rsk_tableau::{
    BuildOptions, Tableau, build_tableau, build_tableaux_parallel, longest_increasing_len,
    robinson_schensted,
};

const SEED: u64 = 417;

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(5))
}

fn random_permutation(n: u32) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut values: Vec<u32> = (0..n).collect();
    values.shuffle(&mut rng);
    values
}

fn bench_single_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_insert");

    for n in [100u32, 1_000, 10_000] {
        let tableau: Tableau<u32> = random_permutation(n).into_iter().collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &tableau, |b, tableau| {
            b.iter_batched(
                || tableau.clone(),
                |mut t| t.insert(black_box(n / 2)),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let values = random_permutation(10_000);

    group.bench_function("tableau_10000", |b| {
        b.iter(|| build_tableau(black_box(&values), BuildOptions::default()))
    });

    group.bench_function("robinson_schensted_10000", |b| {
        b.iter(|| robinson_schensted(black_box(&values).iter().copied()))
    });

    group.bench_function("longest_increasing_10000", |b| {
        b.iter(|| longest_increasing_len(black_box(&values)))
    });

    group.finish();
}

fn bench_build_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_parallel");
    let mut rng = StdRng::seed_from_u64(SEED);
    let sequences: Vec<Vec<i32>> = (0..256)
        .map(|_| (0..2_000).map(|_| rng.gen_range(0..1_000)).collect())
        .collect();

    group.bench_function("sequential_256x2000", |b| {
        b.iter(|| {
            sequences
                .iter()
                .map(|values| build_tableau(values, BuildOptions::default()))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("rayon_256x2000", |b| {
        b.iter(|| build_tableaux_parallel(black_box(&sequences), BuildOptions::default()))
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets =
        bench_single_insert,
        bench_build,
        bench_build_parallel,
}

criterion_main!(benches);
