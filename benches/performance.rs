//! Performance benchmarks for muscle-gen
//!
//! # Running Benchmarks
//!
//! Run all benchmarks:
//! ```bash
//! cargo bench
//! ```
//!
//! Run specific benchmark group:
//! ```bash
//! cargo bench --bench performance profile_mesh
//! cargo bench --bench performance bulge_target
//! cargo bench --bench performance batch
//! ```
//!
//! # Benchmark Groups
//!
//! - **profile_mesh**: fusiform mesh construction at different resolutions
//! - **bulge_target**: bulge target generation for the same meshes
//! - **batch**: full preset rig generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use muscle_gen::generator::{generate_batch, MuscleSpec};
use muscle_gen::mesh::{build_bulge_target, build_profile_mesh};
use muscle_gen::preset::builtin_presets;

/// (label, radial segments, longitudinal rings)
const RESOLUTIONS: [(&str, usize, usize); 4] = [
    ("low", 8, 6),
    ("default", 40, 26),
    ("high", 128, 96),
    ("ultra", 512, 384),
];

fn benchmark_profile_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile_mesh");

    for (name, segments, rings) in RESOLUTIONS {
        group.throughput(Throughput::Elements((segments * (rings + 1)) as u64));
        group.bench_with_input(
            BenchmarkId::new("build", name),
            &(segments, rings),
            |b, &(segments, rings)| {
                b.iter(|| {
                    build_profile_mesh(
                        black_box(1.0),
                        black_box(0.42),
                        black_box(1.9),
                        segments,
                        rings,
                    )
                    .unwrap()
                })
            },
        );
    }

    group.finish();
}

fn benchmark_bulge_target(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulge_target");

    for (name, segments, rings) in RESOLUTIONS {
        let mesh = build_profile_mesh(1.0, 0.42, 1.9, segments, rings).unwrap();
        group.throughput(Throughput::Elements(mesh.num_vertices() as u64));
        group.bench_with_input(BenchmarkId::new("build", name), &mesh, |b, mesh| {
            b.iter(|| build_bulge_target(mesh, black_box(1.4)).unwrap())
        });
    }

    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    let specs: Vec<MuscleSpec> = builtin_presets()
        .iter()
        .cycle()
        .take(60)
        .map(|p| MuscleSpec::from_preset(p, 1.2).unwrap())
        .collect();

    group.throughput(Throughput::Elements(specs.len() as u64));
    group.bench_function("presets_x60", |b| {
        b.iter(|| generate_batch(black_box(&specs)).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_profile_mesh,
    benchmark_bulge_target,
    benchmark_batch
);
criterion_main!(benches);
