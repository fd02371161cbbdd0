//! Microbenchmark for the rank-sum statistic.
//!
//! Run with:
//! ```bash
//! cargo bench --bench rank_statistic
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rerand::rank_sum;

fn inputs(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let z: Vec<f64> = (0..n).map(|_| f64::from(rng.random_range(0..=1))).collect();
    let y: Vec<f64> = (0..n).map(|_| rng.random_range(-1000.0..1000.0)).collect();
    (z, y)
}

fn bench_rank_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_sum");
    for n in [100usize, 1_000, 10_000, 100_000] {
        let (z, y) = inputs(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| rank_sum(black_box(&z), black_box(&y)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rank_sum);
criterion_main!(benches);
