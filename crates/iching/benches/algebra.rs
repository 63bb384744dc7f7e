//! Benchmarks for hexagram identity and derivations.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use iching::Hexagram;

fn bench_identity(c: &mut Criterion) {
    let mut group = c.benchmark_group("identity");
    group.throughput(Throughput::Elements(64));

    group.bench_function("from_number_all", |b| {
        b.iter(|| {
            for n in 1..=64u8 {
                black_box(Hexagram::from_number(black_box(n)).ok());
            }
        });
    });

    group.bench_function("from_binary_all", |b| {
        let strings: Vec<String> = Hexagram::all().map(|h| h.binary()).collect();
        b.iter(|| {
            for s in &strings {
                black_box(Hexagram::from_binary(black_box(s)).ok());
            }
        });
    });

    group.finish();
}

fn bench_derivations(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivations");
    group.throughput(Throughput::Elements(1));

    let h = Hexagram::from_binary("100010").unwrap();
    let cast = h
        .with_draws(&[1, 2, 7, 8, 4, 6])
        .unwrap();

    group.bench_function("opposite", |b| b.iter(|| black_box(black_box(h).opposite())));
    group.bench_function("inverse", |b| b.iter(|| black_box(black_box(h).inverse())));
    group.bench_function("nuclear", |b| b.iter(|| black_box(black_box(h).nuclear())));
    group.bench_function("target", |b| b.iter(|| black_box(black_box(cast).target())));
    group.bench_function("cycle", |b| b.iter(|| black_box(black_box(h).cycle())));
    group.bench_function("flower", |b| b.iter(|| black_box(black_box(h).flower())));
    group.bench_function("story", |b| b.iter(|| black_box(black_box(h).story())));

    group.finish();
}

criterion_group!(benches, bench_identity, bench_derivations);
criterion_main!(benches);
