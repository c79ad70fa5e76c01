//! Multi-way symmetric difference cursor (spec §4.9), grounded on
//! `examples/original_source/include/burst/iterator/symmetric_difference_iterator.hpp`:
//! keeps the sub-ranges that currently share the minimum front element, but only as long
//! as an odd count of them agree — an even-sized tie is a wash and gets skipped entirely
//! before the invariant is considered restored.

use super::Cursor;
use std::cmp::Ordering;

pub struct SymmetricDifferenceCursor<C, F> {
    ranges: Vec<C>,
    min_count: usize,
    compare: F,
}

impl<C, F> SymmetricDifferenceCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item, &C::Item) -> Ordering,
{
    pub fn new(mut ranges: Vec<C>, compare: F) -> Self {
        ranges.retain(|r| !r.is_empty());
        let mut cursor = SymmetricDifferenceCursor {
            ranges,
            min_count: 0,
            compare,
        };
        cursor.settle();
        cursor
    }

    /// Moves every sub-range tied for the smallest front element to the front of
    /// `self.ranges` and records how many there are in `self.min_count`.
    ///
    /// Grounded on the source's `select_min`: a partial selection bringing the minimum
    /// group to the front without fully sorting the rest.
    fn partition_minimum_to_front(&mut self) {
        if self.ranges.is_empty() {
            self.min_count = 0;
            return;
        }
        let compare = &self.compare;
        let min_index = (1..self.ranges.len()).fold(0, |min, i| {
            if compare(self.ranges[i].front(), self.ranges[min].front()) == Ordering::Less {
                i
            } else {
                min
            }
        });
        self.ranges.swap(0, min_index);
        let mut boundary = 1;
        for i in 1..self.ranges.len() {
            if compare(self.ranges[i].front(), self.ranges[0].front()) == Ordering::Equal {
                self.ranges.swap(i, boundary);
                boundary += 1;
            }
        }
        self.min_count = boundary;
    }

    fn settle(&mut self) {
        self.ranges.retain(|r| !r.is_empty());
        self.partition_minimum_to_front();
        while self.min_count > 0 && self.min_count % 2 == 0 {
            for range in &mut self.ranges[..self.min_count] {
                range.advance_begin(1);
            }
            self.ranges.retain(|r| !r.is_empty());
            self.partition_minimum_to_front();
        }
    }
}

impl<C, F> Cursor for SymmetricDifferenceCursor<C, F>
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
                return;
            }
            for range in &mut self.ranges[..self.min_count] {
                range.advance_begin(1);
            }
            self.settle();
        }
    }
}

impl<C, F> Iterator for SymmetricDifferenceCursor<C, F>
where
    C: Cursor,
    C::Item: Clone,
    F: Fn(&C::Item, &C::Item) -> Ordering,
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

pub fn symmetric_difference<C>(
    ranges: Vec<C>,
) -> SymmetricDifferenceCursor<C, fn(&C::Item, &C::Item) -> Ordering>
where
    C: Cursor,
    C::Item: Ord,
{
    SymmetricDifferenceCursor::new(ranges, C::Item::cmp)
}

pub fn symmetric_difference_by<C, F>(ranges: Vec<C>, compare: F) -> SymmetricDifferenceCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item, &C::Item) -> Ordering,
{
    SymmetricDifferenceCursor::new(ranges, compare)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::SortedRange;

    fn symmetric_diffed(ranges: Vec<&[i32]>) -> Vec<i32> {
        let ranges: Vec<_> = ranges.into_iter().map(SortedRange::new).collect();
        symmetric_difference(ranges).collect()
    }

    #[test]
    fn keeps_elements_present_in_an_odd_number_of_ranges() {
        assert_eq!(
            symmetric_diffed(vec![&[1, 2, 3], &[2, 3, 4], &[3]]),
            vec![1, 3, 4]
        );
    }

    #[test]
    fn element_in_two_ranges_is_dropped() {
        let empty: Vec<i32> = vec![];
        assert_eq!(symmetric_diffed(vec![&[1], &[1]]), empty);
    }

    #[test]
    fn single_range_is_identity() {
        assert_eq!(symmetric_diffed(vec![&[1, 2, 3]]), vec![1, 2, 3]);
    }
}
