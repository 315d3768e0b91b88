//! Benchmarks for gear-measure operations.
//!
//! Run with: cargo bench -p gear-measure
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p gear-measure -- --save-baseline main
//! 2. After changes: cargo bench -p gear-measure -- --baseline main

#![allow(missing_docs)]

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use gear_measure::{GearSpecification, measure, measure_batch};

// =============================================================================
// Test Specification Generation
// =============================================================================

fn external_spur() -> GearSpecification {
    GearSpecification::external(45, 8.0, 20.0, 0.2124).with_pin_diameter(0.2160)
}

fn external_helical() -> GearSpecification {
    GearSpecification::external(127, 12.0, 20.0, 0.1309)
        .with_pin_diameter(0.144)
        .with_helix_angle(10.5)
}

fn internal_spur() -> GearSpecification {
    GearSpecification::internal(36, 12.0, 20.0, 0.1309).with_pin_diameter(0.14)
}

/// A batch of varied, feasible specifications.
fn make_batch(size: usize) -> Vec<GearSpecification> {
    (0..size)
        .map(|i| {
            let teeth = 20 + (i as u32 % 200);
            let dp = 4.0 + (i % 12) as f64;
            let helix = (i % 30) as f64;
            let half_circular_pitch = std::f64::consts::PI / (2.0 * dp);
            GearSpecification::external(teeth, dp, 20.0, half_circular_pitch)
                .with_helix_angle(helix)
        })
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_single_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");

    group.bench_function("external_spur_odd", |b| {
        let spec = external_spur();
        b.iter(|| measure(black_box(&spec)));
    });

    group.bench_function("internal_spur_even", |b| {
        let spec = internal_spur();
        b.iter(|| measure(black_box(&spec)));
    });

    group.bench_function("external_helical", |b| {
        let spec = external_helical();
        b.iter(|| measure(black_box(&spec)));
    });

    group.bench_function("external_spur_estimated_pin", |b| {
        let spec = GearSpecification::external(45, 8.0, 20.0, 0.2124);
        b.iter(|| measure(black_box(&spec)));
    });

    group.finish();
}

fn bench_batch_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure_batch");

    for size in [100, 1_000, 10_000] {
        let specs = make_batch(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &specs, |b, specs| {
            b.iter(|| measure_batch(black_box(specs)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_measure, bench_batch_measure);
criterion_main!(benches);
