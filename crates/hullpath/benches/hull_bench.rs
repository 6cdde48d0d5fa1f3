//! Criterion benchmarks for the two hull constructions.
//! Brute force is O(n³), so its sizes stay small; quickhull also runs the
//! larger clouds. Results land under target/criterion by default.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullpath::hull::{brute_hull, quick_hull};
use hullpath::rand::{scatter_points, ReplayToken, ScatterCfg};

fn cloud(n: usize, seed: u64) -> Vec<hullpath::Vec2<f64>> {
    let cfg = ScatterCfg {
        count: n,
        ..ScatterCfg::default()
    };
    scatter_points(cfg, ReplayToken { seed, index: 0 })
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[10usize, 50, 100, 200] {
        group.bench_with_input(BenchmarkId::new("brute", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 43),
                |pts| {
                    let _h = brute_hull(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    for &n in &[10usize, 100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("quick", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 44),
                |pts| {
                    let _h = quick_hull(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
