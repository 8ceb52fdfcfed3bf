//! Criterion benchmarks comparing the three flood traversals.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use deluge_bench::{corridor, open_basin, reference_profile, stress_profile};
use deluge_engine::{Algorithm, FloodEngine};
use deluge_terrain::Terrain;

/// Run `terrain` through every algorithm under `group_name`, resetting the
/// same engine between iterations so allocation is excluded.
fn bench_all_algorithms(c: &mut Criterion, group_name: &str, terrain: &Terrain) {
    let mut group = c.benchmark_group(group_name);
    for alg in Algorithm::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(alg), &alg, |b, &alg| {
            let mut engine = FloodEngine::new(terrain);
            b.iter(|| {
                engine.reset();
                let metrics = engine.run(alg).unwrap();
                black_box(metrics.admitted);
            });
        });
    }
    group.finish();
}

/// 100x100 random terrain, 4 sources.
fn bench_reference_10k(c: &mut Criterion) {
    let terrain = reference_profile(42);
    bench_all_algorithms(c, "flood_reference_10k", &terrain);
}

/// 316x316 random terrain.
fn bench_stress_100k(c: &mut Criterion) {
    let terrain = stress_profile(42);
    bench_all_algorithms(c, "flood_stress_100k", &terrain);
}

/// 256x256 flat basin; every cell floods from the centre.
fn bench_open_basin(c: &mut Criterion) {
    let terrain = open_basin(256);
    bench_all_algorithms(c, "flood_open_basin_64k", &terrain);
}

/// 201x201 serpentine; the recursive variant repeatedly hits its ceiling.
fn bench_corridor(c: &mut Criterion) {
    let terrain = corridor(201);
    bench_all_algorithms(c, "flood_corridor", &terrain);
}

/// Cost of a fresh engine per run, allocation included.
fn bench_fresh_engine(c: &mut Criterion) {
    let terrain = reference_profile(42);
    c.bench_function("flood_fresh_engine_10k", |b| {
        b.iter(|| {
            let mut engine = FloodEngine::new(&terrain);
            engine.run(Algorithm::BreadthFirst).unwrap();
            black_box(engine.into_state());
        });
    });
}

criterion_group!(
    benches,
    bench_reference_10k,
    bench_stress_100k,
    bench_open_basin,
    bench_corridor,
    bench_fresh_engine
);
criterion_main!(benches);
