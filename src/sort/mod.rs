//! Integer sorts (spec §4.1-§4.4): counting sort and LSD radix sort, each in a
//! sequential and a worker-pool-parallel flavor.
//!
//! Grounded on `examples/original_source/include/burst/algorithm/detail/counting_sort.hpp`
//! and `.../detail/radix_sort.hpp`; the teacher's `algo.rs` supplies the byte-at-a-time
//! histogram/prefix-sum/scatter shape and its `cuneiform`-aligned counters struct.

mod counting;
mod counting_parallel;
mod radix;
mod radix_parallel;

pub use counting::counting_sort;
pub use counting_parallel::counting_sort_parallel;
pub use radix::{radix_sort, radix_sort_by, RadixDigits};
pub use radix_parallel::radix_sort_parallel;

/// A key whose range of values is small and densely packed enough to drive a counting
/// sort directly (256 for a single byte, 65536 for two).
///
/// Grounded on the source's `counting_sort_traits::value_range`: the source derives this
/// from the type the key-extracting map returns; here it's a small closed trait instead
/// of a type-level constant-folding trick.
pub trait CountingKey: Copy {
    /// Number of distinct values this key can take.
    const VALUE_RANGE: usize;

    fn as_index(self) -> usize;
}

impl CountingKey for u8 {
    const VALUE_RANGE: usize = 1 << 8;

    #[inline(always)]
    fn as_index(self) -> usize {
        self as usize
    }
}

impl CountingKey for u16 {
    const VALUE_RANGE: usize = 1 << 16;

    #[inline(always)]
    fn as_index(self) -> usize {
        self as usize
    }
}
