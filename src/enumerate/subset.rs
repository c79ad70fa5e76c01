//! Subset enumerator (spec §4.12 "subset enumerator"), grounded on
//! `examples/original_source/burst/algorithm/next_subset.hpp` and
//! `burst/iterator/subset_iterator.hpp`: `find_next` is an `upper_bound` over the
//! remaining source, so that a run of elements equal under the comparator is treated as
//! a single choice rather than `|run|` distinct ones.

use super::ChainCursor;
use std::cmp::Ordering;

/// Enumerates every non-empty subset of `source` (treated as a set: runs of elements
/// equal under `compare` collapse to one choice), ascending by size and then
/// lexicographic by position within a size.
///
/// `source` must already be sorted under `compare`. For a source of `n` *distinct*
/// elements this yields exactly `2^n - 1` subsets.
pub fn subsets<'a, T, F>(
    source: &'a [T],
    compare: F,
) -> ChainCursor<'a, T, impl Fn(&'a [T], usize, &T) -> Option<usize>>
where
    F: Fn(&T, &T) -> Ordering + 'a,
{
    ChainCursor::new(source, move |src: &'a [T], index: usize, value: &T| {
        let rest = &src[index + 1..];
        let offset = rest.partition_point(|x| compare(x, value) != Ordering::Greater);
        if offset < rest.len() {
            Some(index + 1 + offset)
        } else {
            None
        }
    })
}

/// As [`subsets`], using `T`'s natural [`Ord`] as the comparator.
pub fn subsets_by_ord<T: Ord>(
    source: &[T],
) -> ChainCursor<'_, T, impl Fn(&[T], usize, &T) -> Option<usize>> {
    subsets(source, |a, b| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_distinct_elements_matches_spec_example() {
        let source = [1, 2, 3];
        let subsets: Vec<Vec<i32>> = subsets_by_ord(&source)
            .map(|view| view.into_iter().copied().collect())
            .collect();
        assert_eq!(
            subsets,
            vec![
                vec![1],
                vec![2],
                vec![3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
                vec![1, 2, 3],
            ]
        );
    }

    #[test]
    fn yields_two_to_the_n_minus_one_subsets_for_distinct_elements() {
        let source: Vec<i32> = (0..6).collect();
        let count = subsets_by_ord(&source).count();
        assert_eq!(count, (1 << source.len()) - 1);
    }

    #[test]
    fn duplicate_elements_collapse_to_a_single_choice() {
        let source = [1, 1, 2];
        let subsets: Vec<Vec<i32>> = subsets_by_ord(&source)
            .map(|view| view.into_iter().copied().collect())
            .collect();
        // Only two distinct values, so 2^2 - 1 = 3 subsets, never picking both 1s.
        assert_eq!(subsets, vec![vec![1], vec![2], vec![1, 2]]);
    }

    #[test]
    fn single_element_yields_one_subset() {
        let source = [42];
        let subsets: Vec<Vec<i32>> = subsets_by_ord(&source)
            .map(|view| view.into_iter().copied().collect())
            .collect();
        assert_eq!(subsets, vec![vec![42]]);
    }
}
