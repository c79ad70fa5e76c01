//! Immutable k-ary search set (spec §4.14), grounded on
//! `examples/original_source/burst/container/k_ary_search_set.hpp`: a complete,
//! breadth-first-packed k-ary search tree stored flat in a `Vec`, built bottom-up from a
//! sorted, duplicate-free input by an explicit stack of `(index, size, height,
//! preceding_elements)` branches — no recursion, matching the source's own choice of an
//! explicit `std::stack` over the call stack.

use std::cmp::Ordering;

/// The source's `default_arity`: 33 keys-per-node slots (32-way branching), chosen
/// there as a reasonable default for cache-line-sized nodes.
pub const DEFAULT_ARITY: usize = 33;

struct Branch {
    index: usize,
    size: usize,
    height: usize,
    preceding_elements: usize,
}

fn perfect_tree_size(arity: usize, height: usize) -> usize {
    arity.saturating_pow(height as u32).saturating_sub(1)
}

/// Smallest `h` with `perfect_tree_size(arity, h) >= size` — spec's
/// `h = ceil(log_k(n+1))`.
fn perfect_tree_height(arity: usize, size: usize) -> usize {
    let mut height = 0usize;
    while perfect_tree_size(arity, height) < size {
        height += 1;
    }
    height
}

fn perfect_tree_child_index(arity: usize, parent_index: usize, child_number: usize) -> usize {
    parent_index * arity + (child_number + 1) * (arity - 1)
}

/// An immutable, duplicate-free set backed by a flat, breadth-first k-ary search tree.
///
/// Lookup is `O(log_k n)`: each node holds up to `arity - 1` sorted keys and branches
/// `arity` ways, so descending one level rules out roughly `arity` times as many
/// elements as a binary search tree would at the same depth.
pub struct KArySearchSet<T, F> {
    values: Vec<T>,
    arity: usize,
    compare: F,
}

impl<T: Clone, F: Fn(&T, &T) -> Ordering> KArySearchSet<T, F> {
    /// Builds the set from `sorted`, which must already be sorted and duplicate-free
    /// under `compare`. Skips the sort/dedup pass [`Self::new`] would otherwise need.
    pub fn from_sorted_unique(sorted: &[T], arity: usize, compare: F) -> Self {
        debug_assert!(arity >= 2, "k-ary search set arity must be at least 2");
        debug_assert!(
            sorted.windows(2).all(|w| compare(&w[0], &w[1]) == Ordering::Less),
            "input to from_sorted_unique must be strictly sorted and duplicate-free"
        );
        let mut set = KArySearchSet {
            values: Vec::new(),
            arity,
            compare,
        };
        set.initialize_trusted(sorted);
        set
    }

    /// Builds the set from `input`, sorting and deduplicating first if it isn't already
    /// sorted under `compare`.
    pub fn new(input: &[T], arity: usize, compare: F) -> Self {
        let already_sorted = input.windows(2).all(|w| compare(&w[0], &w[1]) == Ordering::Less);
        if already_sorted {
            Self::from_sorted_unique(input, arity, compare)
        } else {
            let mut buffer = input.to_vec();
            buffer.sort_by(|a, b| compare(a, b));
            buffer.dedup_by(|a, b| compare(a, b) == Ordering::Equal);
            Self::from_sorted_unique(&buffer, arity, compare)
        }
    }

    /// BFS-stack tree construction. Grounded on the source's `initialize_trusted`.
    fn initialize_trusted(&mut self, sorted: &[T]) {
        let n = sorted.len();
        if n == 0 {
            return;
        }
        self.values = sorted.to_vec();

        let mut stack = vec![Branch {
            index: 0,
            size: n,
            height: perfect_tree_height(self.arity, n),
            preceding_elements: 0,
        }];

        while let Some(branch) = stack.pop() {
            let counters = self.fill_counters(&branch);
            self.fill_node(&branch, &counters, sorted);

            if counters[0] > 0 {
                stack.push(Branch {
                    index: perfect_tree_child_index(self.arity, branch.index, 0),
                    size: counters[0],
                    height: branch.height - 1,
                    preceding_elements: branch.preceding_elements,
                });
            }
            for i in 1..counters.len() {
                let gap = counters[i].saturating_sub(counters[i - 1] + 1);
                if gap == 0 {
                    break;
                }
                stack.push(Branch {
                    index: perfect_tree_child_index(self.arity, branch.index, i),
                    size: gap,
                    height: branch.height - 1,
                    preceding_elements: branch.preceding_elements + counters[i - 1] + 1,
                });
            }
        }
    }

    /// For each of the (up to `arity - 1`) keys this branch's node will hold, the count
    /// of elements in the branch strictly smaller than that key. Grounded on the
    /// source's `fill_counters`.
    fn fill_counters(&self, branch: &Branch) -> Vec<usize> {
        let max_subtree_height = branch.height.saturating_sub(1);
        let min_subtree_elements = perfect_tree_size(self.arity, max_subtree_height.saturating_sub(1));
        let max_subtree_elements = perfect_tree_size(self.arity, max_subtree_height);
        let elements_in_last_row = branch.size - perfect_tree_size(self.arity, branch.height.saturating_sub(1));

        let count = self.arity.min(branch.size + 1);
        let mut counters = vec![0usize; count];
        for (i, counter) in counters.iter_mut().enumerate() {
            *counter = i
                + ((i + 1) * min_subtree_elements + elements_in_last_row).min((i + 1) * max_subtree_elements);
        }
        counters
    }

    /// Copies each key of this branch's node from its position in `sorted`. Grounded on
    /// the source's `fill_node`.
    fn fill_node(&mut self, branch: &Branch, counters: &[usize], sorted: &[T]) {
        for (element_index, &counter) in counters[..counters.len() - 1].iter().enumerate() {
            let index_in_sorted = branch.preceding_elements + counter;
            self.values[branch.index + element_index] = sorted[index_in_sorted].clone();
        }
    }

    /// Looks up `value`. `O(log_k n)`.
    pub fn find(&self, value: &T) -> Option<&T> {
        let mut node_index = 0usize;
        while node_index < self.values.len() {
            let node_end = (node_index + self.arity - 1).min(self.values.len());
            let node = &self.values[node_index..node_end];
            let offset = node.partition_point(|x| (self.compare)(x, value) == Ordering::Less);
            if offset < node.len() && (self.compare)(&node[offset], value) == Ordering::Equal {
                return Some(&node[offset]);
            }
            node_index = perfect_tree_child_index(self.arity, node_index, offset);
        }
        None
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over every element in breadth-first tree layout order, which is *not*
    /// the set's sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }
}

impl<T: Clone + Ord> KArySearchSet<T, fn(&T, &T) -> Ordering> {
    /// As [`Self::new`], using `T`'s natural [`Ord`] as the comparator and the source's
    /// [`DEFAULT_ARITY`].
    pub fn from_ord(input: &[T]) -> Self {
        Self::new(input, DEFAULT_ARITY, T::cmp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_every_element_of_a_small_set() {
        let values: Vec<i32> = (0..50).collect();
        let set = KArySearchSet::from_sorted_unique(&values, 4, i32::cmp);
        for v in &values {
            assert_eq!(set.find(v), Some(v));
        }
        assert_eq!(set.find(&-1), None);
        assert_eq!(set.find(&50), None);
    }

    #[test]
    fn builds_correctly_across_several_arities() {
        let values: Vec<i32> = (0..200).collect();
        for arity in [2usize, 3, 8, 33, 64] {
            let set = KArySearchSet::from_sorted_unique(&values, arity, i32::cmp);
            assert_eq!(set.len(), values.len());
            for v in &values {
                assert_eq!(set.find(v), Some(v), "arity {arity} missed {v}");
            }
        }
    }

    #[test]
    fn unsorted_input_is_sorted_and_deduplicated() {
        let input = [5, 3, 1, 3, 5, 2, 4, 1];
        let set = KArySearchSet::new(&input, 3, i32::cmp);
        assert_eq!(set.len(), 5);
        for v in 1..=5 {
            assert!(set.contains(&v));
        }
    }

    #[test]
    fn empty_set_finds_nothing() {
        let values: Vec<i32> = Vec::new();
        let set = KArySearchSet::from_sorted_unique(&values, DEFAULT_ARITY, i32::cmp);
        assert!(set.is_empty());
        assert_eq!(set.find(&0), None);
    }

    #[test]
    fn from_ord_uses_default_arity() {
        let values = ["a", "b", "c", "d", "e"];
        let set = KArySearchSet::from_ord(&values);
        assert!(set.contains(&"c"));
        assert!(!set.contains(&"z"));
    }
}
