//! Subsequence enumerator (spec §4.12 "subsequence enumerator"), grounded on
//! `examples/original_source/include/burst/iterator/subsequence_iterator.hpp`: the same
//! chain mechanism as [`super::subset`], but `find_next` is plain positional succession,
//! so distinct positions are always distinct choices even when their values are equal.

use super::ChainCursor;

/// Enumerates every non-empty subsequence of `source` (positions matter; equal values at
/// different positions are distinct choices), ascending by size and then lexicographic by
/// position within a size. Unlike [`super::subset::subsets`], `source` need not be
/// sorted and no comparator is required.
pub fn subsequences<T>(
    source: &[T],
) -> ChainCursor<'_, T, impl Fn(&[T], usize, &T) -> Option<usize>> {
    ChainCursor::new(source, |src: &[T], index: usize, _value: &T| {
        let next = index + 1;
        if next < src.len() {
            Some(next)
        } else {
            None
        }
    })
}
