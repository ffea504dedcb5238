use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use zeroq::prelude::*;

fn bench_positional(c: &mut Criterion) {
    let data: Vec<u64> = (0..100_000).collect();

    c.bench_function("skip_take_slice", |b| {
        b.iter(|| {
            from_slice(black_box(&data))
                .skip(1_000)
                .take(50_000)
                .sum()
        })
    });

    c.bench_function("skip_take_iter", |b| {
        b.iter(|| {
            from_iter(black_box(&data).iter().copied())
                .skip(1_000)
                .take(50_000)
                .sum()
        })
    });

    let mut group = c.benchmark_group("take_range_from_end");
    for tail in [16usize, 1_024, 16_384] {
        group.bench_with_input(BenchmarkId::from_parameter(tail), &tail, |b, &tail| {
            b.iter(|| {
                from_iter(black_box(&data).iter().copied())
                    .take_range(Index::Start(10)..Index::End(tail))
                    .count()
            })
        });
    }
    group.finish();

    c.bench_function("take_last_iter", |b| {
        b.iter(|| {
            from_iter(black_box(&data).iter().copied())
                .take_last(256)
                .into_vec()
        })
    });
}

fn bench_shuffle(c: &mut Criterion) {
    let data: Vec<u32> = (0..100_000).collect();
    let mut group = c.benchmark_group("shuffle_take");
    for take in [10isize, 1_000, 60_000] {
        group.bench_with_input(BenchmarkId::from_parameter(take), &take, |b, &take| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| {
                from_slice(black_box(&data))
                    .shuffle_with(&mut rng)
                    .take(take)
                    .into_vec()
            })
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let data: Vec<u32> = (0u32..50_000).map(|i| i.wrapping_mul(2_654_435_761) % 4_096).collect();

    c.bench_function("to_lookup", |b| {
        b.iter(|| from_slice(black_box(&data)).to_lookup(|v| v % 1_024).len())
    });

    c.bench_function("distinct", |b| {
        b.iter(|| from_slice(black_box(&data)).distinct().count())
    });
}

criterion_group!(benches, bench_positional, bench_shuffle, bench_lookup);
criterion_main!(benches);
