//! Benchmarks for shape sampling and dataset builds.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use arbor::prelude::*;

fn bench_samplers(c: &mut Criterion) {
    let mut group = c.benchmark_group("samplers");

    group.bench_function("scatter_position", |b| {
        let mut ctx = SpawnContext::new(0, 1);
        b.iter(|| black_box(ctx.scatter_position(15.0)))
    });

    group.bench_function("tree_position", |b| {
        let mut ctx = SpawnContext::new(0, 1);
        b.iter(|| black_box(ctx.tree_position(12.0, 5.0, 0.2)))
    });

    group.bench_function("spiral_position", |b| {
        let ctx = SpawnContext::new(500, 1000);
        b.iter(|| black_box(ctx.spiral_position(12.0, 5.0, 15.0)))
    });

    group.finish();
}

fn bench_builds(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset_build");

    for count in [1_000u32, 5_000, 20_000] {
        group.bench_with_input(BenchmarkId::new("foliage", count), &count, |b, &count| {
            let config = SceneConfig::new().with_foliage_count(count);
            b.iter(|| black_box(FoliageField::new(&config)))
        });
    }

    group.bench_function("ornaments_400", |b| {
        let config = SceneConfig::new();
        b.iter(|| black_box(OrnamentSet::new(400, OrnamentKind::Sphere, &config)))
    });

    group.finish();
}

fn bench_frame_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_advance");

    group.bench_function("scene_default_counts", |b| {
        let mut scene = Scene::new(SceneConfig::default());
        let mut elapsed = 0.0f32;
        b.iter(|| {
            elapsed += 1.0 / 60.0;
            scene.advance(Mode::Assembled, elapsed, 1.0 / 60.0);
        })
    });

    group.bench_function("ornament_instances", |b| {
        let scene = Scene::new(SceneConfig::default());
        b.iter(|| black_box(scene.spheres.instances()))
    });

    group.finish();
}

criterion_group!(benches, bench_samplers, bench_builds, bench_frame_advance);
criterion_main!(benches);
