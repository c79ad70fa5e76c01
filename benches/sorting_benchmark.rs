use burst::sort::{counting_sort, radix_sort};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::Rng;
use std::hint::black_box;

fn bench_counting_sort_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Counting sort (u8 keys)");
    group.sample_size(20);

    let mut rng = rand::rng();
    let count = 100_000;
    let input: Vec<u8> = (0..count).map(|_| rng.random()).collect();

    group.bench_function("burst::counting_sort", |b| {
        b.iter_batched(
            || vec![0u8; input.len()],
            |mut output| counting_sort(black_box(&input), |&x| x, &mut output).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_radix_sort_u64(c: &mut Criterion) {
    let mut group = c.benchmark_group("Radix sort (u64 keys)");
    group.sample_size(20);

    let mut rng = rand::rng();
    let count = 100_000;
    let input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    group.bench_function("burst::radix_sort", |b| {
        b.iter_batched(
            || (input.clone(), vec![0u64; input.len()]),
            |(mut data, mut buffer)| radix_sort(black_box(&mut data), &mut buffer, |&x| x).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_radix_sort_already_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("Radix sort (already sorted, short-circuit)");
    group.sample_size(20);

    let count = 100_000;
    let input: Vec<u64> = (0..count as u64).collect();

    group.bench_function("burst::radix_sort", |b| {
        b.iter_batched(
            || (input.clone(), vec![0u64; input.len()]),
            |(mut data, mut buffer)| radix_sort(black_box(&mut data), &mut buffer, |&x| x).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_counting_sort_bytes,
    bench_radix_sort_u64,
    bench_radix_sort_already_sorted
);
criterion_main!(benches);
