//! Lazy concatenation cursor (spec §4.13), grounded on
//! `examples/original_source/include/burst/iterator/detail/join_iterator.hpp`.
//!
//! Concatenates `K` sub-ranges end to end without copying: the invariant is that the
//! current sub-range (if any remain) is never empty, so `front`/`advance_begin` never
//! have to look past it. Advancing past the end of one sub-range moves on to the next
//! non-empty one, skipping any that are empty outright (the source's
//! `maintain_invariant`/`find_if_not`).

use super::Cursor;

pub struct JoinCursor<C> {
    ranges: Vec<C>,
    outer: usize,
}

impl<C: Cursor> JoinCursor<C> {
    pub fn new(ranges: Vec<C>) -> Self {
        let mut cursor = JoinCursor { ranges, outer: 0 };
        cursor.maintain_invariant();
        cursor
    }

    fn maintain_invariant(&mut self) {
        while self.outer < self.ranges.len() && self.ranges[self.outer].is_empty() {
            self.outer += 1;
        }
    }
}

impl<C: Cursor> Cursor for JoinCursor<C> {
    type Item = C::Item;

    fn is_empty(&self) -> bool {
        self.outer >= self.ranges.len()
    }

    fn front(&self) -> &C::Item {
        self.ranges[self.outer].front()
    }

    fn advance_begin(&mut self, n: usize) {
        let mut remaining = n;
        while remaining > 0 && self.outer < self.ranges.len() {
            // When the current sub-range can report its length cheaply (e.g. a
            // `SortedRange`), jump past it in one call rather than one element at a
            // time — grounded on the source's random-access specialization, which
            // tracks `m_items_remaining` for exactly this reason.
            let take = match self.ranges[self.outer].len_hint() {
                Some(available) => remaining.min(available),
                None => 1,
            };
            self.ranges[self.outer].advance_begin(take);
            remaining -= take;
            if self.ranges[self.outer].is_empty() {
                self.outer += 1;
            }
        }
        self.maintain_invariant();
    }
}

impl<C> Iterator for JoinCursor<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if Cursor::is_empty(self) {
            return None;
        }
        let item = self.front().clone();
        self.advance_begin(1);
        Some(item)
    }
}

pub fn join<C: Cursor>(ranges: Vec<C>) -> JoinCursor<C> {
    JoinCursor::new(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::SortedRange;

    fn joined(ranges: Vec<&[i32]>) -> Vec<i32> {
        let ranges: Vec<_> = ranges.into_iter().map(SortedRange::new).collect();
        join(ranges).collect()
    }

    #[test]
    fn concatenates_ranges_in_order() {
        assert_eq!(joined(vec![&[1, 2], &[3], &[4, 5]]), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn skips_empty_ranges() {
        assert_eq!(joined(vec![&[], &[1], &[], &[2, 3], &[]]), vec![1, 2, 3]);
    }

    #[test]
    fn all_empty_yields_empty() {
        let empty: Vec<i32> = vec![];
        assert_eq!(joined(vec![&[], &[]]), empty);
    }
}
