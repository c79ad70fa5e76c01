use burst::cursor::{merge, Cursor, SortedRange};
use burst::pool::ParallelPolicy;
use burst::sort::{counting_sort_parallel, radix_sort, radix_sort_parallel};
use rand::Rng;
use std::time::Instant;

#[test]
fn radix_sort_1m_u64_matches_std_sort() {
    let count = 1_000_000;
    println!("Generating {count} random u64 keys...");

    let mut rng = rand::rng();
    let mut input: Vec<u64> = (0..count).map(|_| rng.random()).collect();
    let mut buffer = vec![0u64; count];

    println!("Sorting {count} elements with radix_sort...");
    let start = Instant::now();
    radix_sort(&mut input, &mut buffer, |&x| x).unwrap();
    println!("Sorted {count} elements in {:?}", start.elapsed());

    for window in input.windows(2) {
        assert!(window[0] <= window[1]);
    }
}

#[test]
fn radix_sort_parallel_4m_u32_matches_sequential_radix_sort() {
    let count = 4_000_000;
    println!("Generating {count} random u32 keys...");

    let mut rng = rand::rng();
    let sequential_input: Vec<u32> = (0..count).map(|_| rng.random()).collect();
    let mut parallel_input = sequential_input.clone();
    let mut buffer = vec![0u32; count];

    let mut sequential = sequential_input.clone();
    let seq_start = Instant::now();
    radix_sort(&mut sequential, &mut buffer, |&x| x).unwrap();
    println!("Sequential radix_sort: {:?}", seq_start.elapsed());

    let policy = ParallelPolicy::with_workers(8);
    let par_start = Instant::now();
    radix_sort_parallel(&mut parallel_input, &mut buffer, |&x| x, &policy).unwrap();
    println!("Parallel radix_sort ({} workers): {:?}", policy.workers(), par_start.elapsed());

    assert_eq!(parallel_input, sequential);
}

#[test]
fn counting_sort_parallel_2m_bytes_matches_sequential() {
    let count = 2_000_000;
    let mut rng = rand::rng();
    let input: Vec<u8> = (0..count).map(|_| rng.random()).collect();

    let mut sequential = vec![0u8; count];
    burst::sort::counting_sort(&input, |&x| x, &mut sequential).unwrap();

    let mut parallel = vec![0u8; count];
    let policy = ParallelPolicy::with_workers(8);
    let start = Instant::now();
    counting_sort_parallel(&input, |&x| x, &mut parallel, &policy).unwrap();
    println!("Parallel counting_sort over {count} bytes: {:?}", start.elapsed());

    assert_eq!(parallel, sequential);
}

#[test]
fn merging_many_large_ranges_yields_a_fully_sorted_sequence() {
    let range_count = 64;
    let elements_per_range = 20_000;

    let mut rng = rand::rng();
    let mut owned_ranges: Vec<Vec<i64>> = Vec::with_capacity(range_count);
    for _ in 0..range_count {
        let mut range: Vec<i64> = (0..elements_per_range).map(|_| rng.random_range(0..1_000_000)).collect();
        range.sort_unstable();
        owned_ranges.push(range);
    }

    let cursors: Vec<SortedRange<i64>> = owned_ranges.iter().map(|r| SortedRange::new(r)).collect();

    let start = Instant::now();
    let merged: Vec<i64> = merge::merge(cursors).collect();
    println!(
        "Merged {} ranges of {} elements each in {:?}",
        range_count,
        elements_per_range,
        start.elapsed()
    );

    assert_eq!(merged.len(), range_count * elements_per_range as usize);
    for window in merged.windows(2) {
        assert!(window[0] <= window[1]);
    }
}
