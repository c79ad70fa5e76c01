//! Multi-way union cursor (spec §4.6), grounded on
//! `examples/original_source/include/burst/iterator/union_iterator.hpp`: sub-ranges kept
//! sorted by front element; each step advances every sub-range whose front equals the
//! current minimum, drops the ones that emptied out, and re-sorts.
//!
//! Unlike [`crate::cursor::merge`], a key present in several sub-ranges is emitted only
//! once per step — but it still counts multiplicity *within* a single sub-range, since a
//! sub-range's repeated fronts are consumed one at a time across separate steps.

use super::Cursor;
use std::cmp::Ordering;

pub struct UnionCursor<C, F> {
    ranges: Vec<C>,
    compare: F,
}

impl<C, F> UnionCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item, &C::Item) -> Ordering,
{
    pub fn new(mut ranges: Vec<C>, compare: F) -> Self {
        ranges.retain(|r| !r.is_empty());
        ranges.sort_by(|a, b| compare(a.front(), b.front()));
        UnionCursor { ranges, compare }
    }

    fn maintain_invariant(&mut self) {
        self.ranges.retain(|r| !r.is_empty());
        let compare = &self.compare;
        self.ranges.sort_by(|a, b| compare(a.front(), b.front()));
    }
}

impl<C, F> Cursor for UnionCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item, &C::Item) -> Ordering,
{
    type Item = C::Item;

    fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    fn front(&self) -> &C::Item {
        self.ranges[0].front()
    }

    fn advance_begin(&mut self, n: usize) {
        for _ in 0..n {
            if self.ranges.is_empty() {
                break;
            }
            // Every range whose front equals the current minimum is tied for "current".
            let boundary = self
                .ranges
                .iter()
                .position(|r| (self.compare)(self.ranges[0].front(), r.front()) != Ordering::Equal)
                .unwrap_or(self.ranges.len());
            for range in &mut self.ranges[..boundary] {
                range.advance_begin(1);
            }
            self.maintain_invariant();
        }
    }
}

impl<C, F> Iterator for UnionCursor<C, F>
where
    C: Cursor,
    C::Item: Clone,
    F: Fn(&C::Item, &C::Item) -> Ordering,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.is_empty() {
            return None;
        }
        let item = self.front().clone();
        self.advance_begin(1);
        Some(item)
    }
}

pub fn union<C>(ranges: Vec<C>) -> UnionCursor<C, fn(&C::Item, &C::Item) -> Ordering>
where
    C: Cursor,
    C::Item: Ord,
{
    UnionCursor::new(ranges, C::Item::cmp)
}

pub fn union_by<C, F>(ranges: Vec<C>, compare: F) -> UnionCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item, &C::Item) -> Ordering,
{
    UnionCursor::new(ranges, compare)
}
