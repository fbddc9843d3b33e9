use catrom_curve::{evaluate_sampled_curve, sample_curves, CurveOptions};
use catrom_math::{dvec2, Point2};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// One polyline per record across `axes` parallel axes.
fn build_records(count: usize, axes: usize) -> Vec<Vec<Point2>> {
    (0..count)
        .map(|r| {
            (0..axes)
                .map(|a| {
                    let x = a as f64 * 120.0;
                    let y = ((r * 37 + a * 91) % 500) as f64 + 0.5;
                    dvec2(x, y)
                })
                .collect()
        })
        .collect()
}

fn bench_single_curve(c: &mut Criterion) {
    let points = build_records(1, 8).remove(0);
    let mut group = c.benchmark_group("sample_single_curve");

    for &samples in &[100usize, 1_000usize] {
        group.bench_with_input(BenchmarkId::from_parameter(samples), &samples, |b, &n| {
            b.iter(|| black_box(evaluate_sampled_curve(black_box(&points), false, n, 0.5)))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let records = build_records(2_000, 8);
    let options = CurveOptions::default();

    c.bench_function("sample_curves_2000_records", |b| {
        b.iter(|| black_box(sample_curves(black_box(&records), &options)))
    });
}

criterion_group!(benches, bench_single_curve, bench_batch);
criterion_main!(benches);
