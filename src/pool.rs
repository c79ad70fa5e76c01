//! Bounded worker pool used only by the parallel sort entry points (spec §5/§6).
//!
//! The source library depends on a bespoke thread pool; per the Design Notes this is
//! replaced with `rayon`'s `ThreadPool`, addressed with explicit scoped jobs rather than
//! `par_iter`, so the chunking and join shape stays the one the spec describes: static
//! contiguous chunks, one job per chunk, join before returning.

use std::num::NonZeroUsize;

/// Configuration for a parallel sort: exactly one knob, the worker count.
///
/// `ParallelPolicy::new(1)` is a legitimate, if wasteful, way to ask for the sequential
/// fallback explicitly; `sequential()` is the named shorthand for it.
#[derive(Debug, Clone, Copy)]
pub struct ParallelPolicy {
    workers: NonZeroUsize,
}

impl ParallelPolicy {
    pub fn new(workers: NonZeroUsize) -> Self {
        ParallelPolicy { workers }
    }

    /// A policy requesting `workers` threads, falling back to 1 if `workers == 0`.
    pub fn with_workers(workers: usize) -> Self {
        ParallelPolicy {
            workers: NonZeroUsize::new(workers).unwrap_or(NonZeroUsize::MIN),
        }
    }

    pub fn sequential() -> Self {
        ParallelPolicy {
            workers: NonZeroUsize::MIN,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    pub fn is_sequential(&self) -> bool {
        self.workers() < 2
    }
}

impl Default for ParallelPolicy {
    fn default() -> Self {
        Self::with_workers(rayon::current_num_threads())
    }
}

/// Below this input length, parallel dispatch overhead outweighs the work, so the
/// parallel entry points fall back to the sequential path regardless of policy.
pub const PARALLEL_THRESHOLD: usize = 1 << 14;

/// Splits `len` into `workers` contiguous, roughly-equal chunk boundaries.
///
/// Grounded on spec §4.2's "shape" step: `ceil(len / workers)`-sized chunks, the last
/// one possibly shorter. Returns the `(start, end)` bounds of each non-empty chunk.
pub(crate) fn chunk_bounds(len: usize, workers: usize) -> Vec<(usize, usize)> {
    if workers <= 1 || len == 0 {
        return vec![(0, len)];
    }
    let chunk_size = len.div_ceil(workers);
    let mut bounds = Vec::with_capacity(workers);
    let mut start = 0;
    while start < len {
        let end = (start + chunk_size).min(len);
        bounds.push((start, end));
        start = end;
    }
    bounds
}

/// Runs `job` for each chunk on a bounded pool sized to `policy.workers()`, blocking
/// until every job completes. Grounded on spec §5's "post work to a pool and join it
/// before returning" contract.
pub(crate) fn run_chunked<F>(policy: &ParallelPolicy, chunks: &[(usize, usize)], job: F)
where
    F: Fn(usize, usize, usize) + Sync,
{
    log::trace!(
        "dispatching {} chunk(s) across {} worker(s)",
        chunks.len(),
        policy.workers()
    );
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(policy.workers())
        .build()
        .expect("failed to build bounded worker pool");
    pool.scope(|scope| {
        for (index, &(start, end)) in chunks.iter().enumerate() {
            scope.spawn(move |_| job(index, start, end));
        }
    });
}
