//! Subset / subsequence / chain enumerators (spec §4.12), grounded on
//! `examples/original_source/include/burst/algorithm/next_chain.hpp` (`fill_chain`,
//! `next_fixed_size_chain`, `next_chain`): a single generic "chain" mechanism
//! parameterized by a `find_next(source, from_index, current_value) -> Option<index>`
//! function, with [`subset`] and [`subsequence`] as two instantiations of it.

pub mod subset;
pub mod subsequence;

pub use subsequence::subsequences;
pub use subset::{subsets, subsets_by_ord};

/// Enumerates every selection of `source`, size ascending then lexicographic by
/// position, where the rule for "the next element after position `i`" is supplied by
/// `find_next`. [`subset::SubsetCursor`] instantiates this with an `upper_bound`-style
/// `find_next` that skips over runs of equal elements; [`subsequence::SubsequenceCursor`]
/// instantiates it with plain positional succession. Other instantiations (e.g.
/// strictly-increasing subsequences of an unsorted source) are just a different
/// `find_next` closure away.
///
/// Each yielded selection is a `Vec<&T>`: a view built from references into `source`,
/// not clones of its elements.
pub struct ChainCursor<'a, T, N> {
    source: &'a [T],
    find_next: N,
    indices: Vec<usize>,
    done: bool,
}

impl<'a, T, N> ChainCursor<'a, T, N>
where
    N: Fn(&'a [T], usize, &T) -> Option<usize>,
{
    pub fn new(source: &'a [T], find_next: N) -> Self {
        let mut cursor = ChainCursor {
            source,
            find_next,
            indices: Vec::new(),
            done: false,
        };
        if !cursor.grow_and_fill(1) {
            cursor.done = true;
        }
        cursor
    }

    /// Fills `indices[from..from + count]` by taking `source[start]` and then repeatedly
    /// applying `find_next`, stopping (and reporting failure) the moment `find_next`
    /// can't produce another index. Grounded on the source's `fill_chain`.
    fn fill_slots(&self, start: usize, count: usize) -> Option<Vec<usize>> {
        if count == 0 {
            return Some(Vec::new());
        }
        if start >= self.source.len() {
            return None;
        }
        let mut filled = Vec::with_capacity(count);
        let mut current = start;
        filled.push(current);
        for _ in 1..count {
            current = (self.find_next)(self.source, current, &self.source[current])?;
            filled.push(current);
        }
        Some(filled)
    }

    /// Attempts to replace the current selection with the lexicographically next one of
    /// the same size, trying to advance the rightmost slot first and re-filling the
    /// tail, falling back to an earlier slot when the tail can't be filled. Grounded on
    /// the source's `next_fixed_size_chain`.
    fn advance_same_size(&mut self) -> bool {
        let size = self.indices.len();
        for i in (0..size).rev() {
            let current_index = self.indices[i];
            if let Some(next_index) =
                (self.find_next)(self.source, current_index, &self.source[current_index])
            {
                if let Some(tail) = self.fill_slots(next_index, size - i) {
                    self.indices[i..].copy_from_slice(&tail);
                    return true;
                }
            }
        }
        false
    }

    /// Grows the selection to `size` and fills it from the start of `source`. Grounded
    /// on the source's `next_chain`'s "grow past the current size" branch.
    fn grow_and_fill(&mut self, size: usize) -> bool {
        if size > self.source.len() {
            return false;
        }
        match self.fill_slots(0, size) {
            Some(filled) => {
                self.indices = filled;
                true
            }
            None => false,
        }
    }

    /// The current selection, as a view of references into the source (no copying of
    /// elements).
    fn current(&self) -> Vec<&'a T> {
        self.indices.iter().map(|&i| &self.source[i]).collect()
    }
}

impl<'a, T, N> Iterator for ChainCursor<'a, T, N>
where
    N: Fn(&'a [T], usize, &T) -> Option<usize>,
{
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Vec<&'a T>> {
        if self.done {
            return None;
        }
        let result = self.current();
        if !self.advance_same_size() {
            let mut size = self.indices.len() + 1;
            loop {
                if size > self.source.len() {
                    self.done = true;
                    break;
                }
                if self.grow_and_fill(size) {
                    break;
                }
                size += 1;
            }
        }
        Some(result)
    }
}
