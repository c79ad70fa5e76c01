//! Sequential counting sort (spec §4.1), grounded on
//! `examples/original_source/include/burst/algorithm/detail/counting_sort.hpp`: a
//! counters array one slot larger than the key's value range (the leading sentinel
//! slot), filled by frequency count, turned into a prefix sum, then used to scatter each
//! element straight to its final position. Stable: equal keys keep their relative order
//! because the scatter pass is a single forward walk over the input.

use super::CountingKey;
use crate::error::{Error, Result};

/// Sorts `input` by `key` into `output`, which must be at least as long as `input`.
///
/// Returns the position one past the last element written to `output`, per spec §4.1.
///
/// `K::VALUE_RANGE` bounds the memory this allocates for counters, so `K` is
/// deliberately restricted to small dense key types (`u8`, `u16`) rather than anything
/// implementing [`crate::key::OrderedIntegral`] — sorting on an `i64`-sized range
/// directly would allocate an infeasible counters array. [`crate::sort::radix_sort`]
/// is what widens this to arbitrary integral keys, by running this one byte at a time.
pub fn counting_sort<T, K, F>(input: &[T], key: F, output: &mut [T]) -> Result<usize>
where
    T: Clone,
    K: CountingKey,
    F: Fn(&T) -> K,
{
    if output.len() < input.len() {
        return Err(Error::BufferTooSmall {
            need: input.len(),
            have: output.len(),
        });
    }

    let mut counters = collect_counters(input, &key);
    dispose(input, &key, &mut counters, &mut output[..input.len()]);
    Ok(input.len())
}

/// Builds the prefix-summed counters array: `counters[i]` starts out as the number of
/// elements with key `< i`, then gets incremented in place by [`dispose`] as each
/// element is placed, so it always points at the next free slot for key `i`.
pub(crate) fn collect_counters<T, K, F>(input: &[T], key: &F) -> Vec<usize>
where
    K: CountingKey,
    F: Fn(&T) -> K,
{
    let mut counters = vec![0usize; K::VALUE_RANGE + 1];
    for item in input {
        counters[key(item).as_index() + 1] += 1;
    }
    for i in 1..counters.len() {
        counters[i] += counters[i - 1];
    }
    counters
}

pub(crate) fn dispose<T, K, F>(input: &[T], key: &F, counters: &mut [usize], output: &mut [T])
where
    T: Clone,
    K: CountingKey,
    F: Fn(&T) -> K,
{
    for item in input {
        let index = key(item).as_index();
        output[counters[index]] = item.clone();
        counters[index] += 1;
    }
}
