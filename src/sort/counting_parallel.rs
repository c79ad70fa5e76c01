//! Parallel counting sort (spec §4.2).
//!
//! Grounded on the teacher's `pool.rs` chunking (`chunk_bounds`/`run_chunked`) for the
//! "static contiguous chunks, join before return" shape, and on
//! `examples/original_source/include/burst/algorithm/counting_sort_copy_par.hpp` for the
//! two-phase histogram/prefix-sum-then-scatter structure that the parallel variant adds
//! on top of §4.1: each worker builds its own row of counters over its chunk, the rows
//! are combined into per-worker starting offsets (horizontal prefix sum per row, then a
//! vertical running offset per column), and each worker scatters its chunk using its own
//! starting offsets.

use super::CountingKey;
use crate::error::{Error, Result};
use crate::pool::{chunk_bounds, run_chunked, ParallelPolicy, PARALLEL_THRESHOLD};

/// A raw pointer wrapper asserting that concurrent writers touch disjoint elements.
///
/// Each worker only ever writes to the positions this module itself computed for that
/// worker's key buckets, and those position ranges never overlap between workers (see
/// [`scatter_offsets`]), so sharing the output buffer this way is sound.
struct DisjointWrites<T>(*mut T);
unsafe impl<T> Send for DisjointWrites<T> {}
unsafe impl<T> Sync for DisjointWrites<T> {}

/// Sorts `input` by `key` into `output` using up to `policy.workers()` threads.
///
/// Produces bit-identical output to [`super::counting_sort`] for the same input and key,
/// including the returned one-past-the-end write position. Falls back to the sequential
/// sort when `policy.is_sequential()` or when `input` is below [`PARALLEL_THRESHOLD`].
pub fn counting_sort_parallel<T, K, F>(
    input: &[T],
    key: F,
    output: &mut [T],
    policy: &ParallelPolicy,
) -> Result<usize>
where
    T: Clone + Send + Sync,
    K: CountingKey,
    F: Fn(&T) -> K + Sync,
{
    if output.len() < input.len() {
        return Err(Error::BufferTooSmall {
            need: input.len(),
            have: output.len(),
        });
    }
    if policy.is_sequential() || input.len() < PARALLEL_THRESHOLD {
        return super::counting_sort(input, key, output);
    }

    let chunks = chunk_bounds(input.len(), policy.workers());
    log::trace!(
        "parallel counting sort: {} element(s) across {} chunk(s)",
        input.len(),
        chunks.len()
    );

    // Phase 1: each chunk's local histogram, gathered under the pool so the expensive
    // per-element counting work is itself parallel.
    let value_range = K::VALUE_RANGE;
    let mut rows: Vec<Vec<usize>> = vec![vec![0usize; value_range]; chunks.len()];
    {
        let row_ptrs: Vec<DisjointWrites<usize>> =
            rows.iter_mut().map(|r| DisjointWrites(r.as_mut_ptr())).collect();
        run_chunked(policy, &chunks, |chunk_index, start, end| {
            let row = row_ptrs[chunk_index].0;
            for item in &input[start..end] {
                let slot = key(item).as_index();
                // SAFETY: `chunk_index` uniquely owns `rows[chunk_index]`.
                unsafe {
                    *row.add(slot) += 1;
                }
            }
        });
    }

    // Phase 2: turn the per-chunk histograms into per-chunk, per-key starting offsets.
    // `offsets[t][k]` is where chunk `t`'s first element with key `k` must land.
    let mut offsets = vec![vec![0usize; value_range]; chunks.len()];
    let mut running = 0usize;
    for k in 0..value_range {
        for (t, _) in chunks.iter().enumerate() {
            offsets[t][k] = running;
            running += rows[t][k];
        }
    }

    // Phase 3: each worker scatters its chunk using its own offsets, which by
    // construction never overlap another worker's destination range.
    let out_ptr = DisjointWrites(output.as_mut_ptr());
    let offset_ptrs: Vec<DisjointWrites<usize>> =
        offsets.iter_mut().map(|o| DisjointWrites(o.as_mut_ptr())).collect();
    run_chunked(policy, &chunks, |chunk_index, start, end| {
        let cursor = offset_ptrs[chunk_index].0;
        let out = out_ptr.0;
        for item in &input[start..end] {
            let slot = key(item).as_index();
            // SAFETY: every (chunk, slot) position range is disjoint from every other
            // worker's, by the prefix-sum construction above.
            unsafe {
                let position = *cursor.add(slot);
                *cursor.add(slot) = position + 1;
                // `output` holds caller-supplied, already-initialized elements (it's a
                // logically full slice, not raw memory), so the slot this scatters into
                // holds a live value that must be dropped before we overwrite it —
                // matching the sequential path's `output[..] = item.clone()` assignment.
                let dest = out.add(position);
                std::ptr::drop_in_place(dest);
                std::ptr::write(dest, item.clone());
            }
        }
    });

    Ok(input.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_sequential_output() {
        let input: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();
        let mut sequential = vec![0u8; input.len()];
        super::super::counting_sort(&input, |&x| x, &mut sequential).unwrap();

        let mut parallel = vec![0u8; input.len()];
        counting_sort_parallel(&input, |&x| x, &mut parallel, &ParallelPolicy::with_workers(4))
            .unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn preserves_stability_across_chunks() {
        let input: Vec<(u8, usize)> = (0..20_000usize).map(|i| ((i % 4) as u8, i)).collect();
        let mut output = input.clone();
        counting_sort_parallel(
            &input,
            |(k, _)| *k,
            &mut output,
            &ParallelPolicy::with_workers(6),
        )
        .unwrap();

        for group in output.chunk_by(|a, b| a.0 == b.0) {
            assert!(group.windows(2).all(|w| w[0].1 < w[1].1));
        }
    }

    #[test]
    fn scatter_drops_the_output_slot_it_overwrites() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        #[derive(Clone)]
        struct Tracked(u8, Arc<AtomicUsize>);

        impl Drop for Tracked {
            fn drop(&mut self) {
                self.1.fetch_add(1, Ordering::SeqCst);
            }
        }

        let drops = Arc::new(AtomicUsize::new(0));
        let len = PARALLEL_THRESHOLD + 1;

        let input: Vec<Tracked> = (0..len as u32)
            .map(|i| Tracked((i % 251) as u8, drops.clone()))
            .collect();
        // Every output slot starts out holding a live value of its own, distinct from
        // anything in `input`, the way a caller's pre-filled buffer would.
        let mut output: Vec<Tracked> = (0..len as u32).map(|i| Tracked(0, drops.clone())).collect();

        counting_sort_parallel(
            &input,
            |Tracked(k, _)| *k,
            &mut output,
            &ParallelPolicy::with_workers(4),
        )
        .unwrap();

        // Every pre-existing output element must have been dropped exactly once when
        // its slot was overwritten; none of `input`'s elements have been dropped yet.
        assert_eq!(drops.load(Ordering::SeqCst), len);
    }

    #[test]
    fn falls_back_below_threshold() {
        let input = [3u8, 1, 2];
        let mut output = [0u8; 3];
        counting_sort_parallel(&input, |&x| x, &mut output, &ParallelPolicy::with_workers(8))
            .unwrap();
        assert_eq!(output, [1, 2, 3]);
    }
}
