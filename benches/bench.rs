// Criterion benchmarks for Bnuuy Time

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use bnuuy_time::core::{angle_diff, closeness, CoverageReport, Matcher, TargetAngles};
use bnuuy_time::models::Entry;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn create_catalog(size: usize) -> Vec<Entry> {
    (0..size)
        .map(|i| {
            let a = ((i * 37) % 360) as u16;
            let b = ((i * 113 + 45) % 360) as u16;
            Entry::new(format!("bun-{}.jpg", i), a, b)
        })
        .collect()
}

fn bench_angle_diff(c: &mut Criterion) {
    c.bench_function("angle_diff", |b| {
        b.iter(|| angle_diff(black_box(359.0), black_box(12.5)));
    });
}

fn bench_closeness(c: &mut Criterion) {
    let entry = Entry::new("bun.jpg", 305, 60);
    let target = TargetAngles::new(310.0, 55.0);

    c.bench_function("closeness", |b| {
        b.iter(|| closeness(black_box(&target), black_box(&entry)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_thresholds();
    let target = TargetAngles::new(305.0, 60.0);

    let mut group = c.benchmark_group("matching");

    for catalog_size in [10, 100, 1000, 10000].iter() {
        let entries = create_catalog(*catalog_size);

        group.bench_with_input(
            BenchmarkId::new("find_matching_entries", catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| matcher.find_matching_entries(black_box(&entries), black_box(&target)));
            },
        );

        let mut rng = StdRng::seed_from_u64(42);
        group.bench_with_input(
            BenchmarkId::new("find_matching_entry", catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| {
                    matcher.find_matching_entry(black_box(&entries), black_box(&target), &mut rng)
                });
            },
        );
    }

    group.finish();
}

fn bench_coverage(c: &mut Criterion) {
    let matcher = Matcher::with_default_thresholds();
    let entries = create_catalog(100);

    c.bench_function("coverage_report_100_buns", |b| {
        b.iter(|| CoverageReport::build(&matcher, black_box(&entries)));
    });
}

criterion_group!(
    benches,
    bench_angle_diff,
    bench_closeness,
    bench_matching,
    bench_coverage
);

criterion_main!(benches);
