//! Projection conversion benchmarks.
//!
//! Covers the per-point cost of every registered projection in both
//! directions, and the full world pipeline the CLI converts through.
//!
//! Run with: cargo bench --package geo-projection --bench projection_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use geo_projection::modified_airocean::MODIFIED_AIROCEAN_LAYOUT;
use geo_projection::world::bte_projection;
use geo_projection::{registry, ModifiedAirocean, Net};
use test_utils::fibonacci_sphere;

const SAMPLE_POINTS: usize = 1_000;

// =============================================================================
// PER-PROJECTION CONVERSIONS
// =============================================================================

fn bench_from_geo(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_geo");
    let points = fibonacci_sphere(SAMPLE_POINTS);
    group.throughput(Throughput::Elements(points.len() as u64));

    for name in registry::names() {
        let proj = registry::lookup(name).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &points, |b, points| {
            b.iter(|| {
                for &(lon, lat) in points {
                    black_box(proj.from_geo(black_box(lon), black_box(lat)));
                }
            });
        });
    }

    group.finish();
}

fn bench_to_geo(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_geo");
    let geo = fibonacci_sphere(SAMPLE_POINTS);
    group.throughput(Throughput::Elements(geo.len() as u64));

    for name in registry::names() {
        let proj = registry::lookup(name).unwrap();
        let planar: Vec<(f64, f64)> = geo
            .iter()
            .map(|&(lon, lat)| proj.from_geo(lon, lat))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(name), &planar, |b, planar| {
            b.iter(|| {
                for &(x, y) in planar {
                    black_box(proj.to_geo(black_box(x), black_box(y)));
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// WORLD PIPELINE
// =============================================================================

fn bench_world_pipeline(c: &mut Criterion) {
    let proj = bte_projection();

    c.bench_function("world_smoke_to_geo", |b| {
        b.iter(|| black_box(proj.to_geo(black_box(3_231_992.0), black_box(-5_296_639.0))))
    });

    c.bench_function("world_tissot", |b| {
        b.iter(|| black_box(proj.tissot(black_box(12.5), black_box(41.9), 1e-7)))
    });
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

fn bench_unfold(c: &mut Criterion) {
    c.bench_function("unfold_modified_airocean", |b| {
        b.iter(|| black_box(Net::unfold(black_box(&MODIFIED_AIROCEAN_LAYOUT))))
    });

    c.bench_function("construct_modified_airocean", |b| {
        b.iter(|| black_box(ModifiedAirocean::new()))
    });
}

criterion_group!(conversion_benches, bench_from_geo, bench_to_geo);

criterion_group!(pipeline_benches, bench_world_pipeline);

criterion_group!(construction_benches, bench_unfold);

criterion_main!(conversion_benches, pipeline_benches, construction_benches);
