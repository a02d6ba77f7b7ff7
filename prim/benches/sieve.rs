use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prim::{Sieve, SieveConfig};

fn bench_small_bound(c: &mut Criterion) {
    let sieve = Sieve::new();
    let mut group = c.benchmark_group("sieve_65535");
    group.bench_function("atkin", |b| {
        b.iter(|| sieve.atkin(black_box(65_535)).unwrap())
    });
    group.bench_function("eratosthenes", |b| {
        b.iter(|| sieve.eratosthenes(black_box(65_535)).unwrap())
    });
    group.finish();
}

fn bench_large_bound(c: &mut Criterion) {
    let sieve = Sieve::new();
    let mut group = c.benchmark_group("sieve_1m");
    group.sample_size(20);
    group.bench_function("segmented", |b| {
        b.iter(|| sieve.primes(black_box(1_000_000)).unwrap())
    });
    group.bench_function("eratosthenes", |b| {
        b.iter(|| sieve.eratosthenes(black_box(1_000_000)).unwrap())
    });
    group.finish();
}

fn bench_segment_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_size_1m");
    group.sample_size(20);
    for size in [16_384usize, 65_536, 262_144] {
        let sieve = Sieve::with_config(SieveConfig::new().with_segment_size(size));
        group.bench_function(format!("window_{size}"), |b| {
            b.iter(|| sieve.primes(black_box(1_000_000)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_small_bound,
    bench_large_bound,
    bench_segment_sizes
);
criterion_main!(benches);
