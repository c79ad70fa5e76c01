//! Multi-way semiintersection cursor (spec §4.9 "semiintersect" variant of §4.7),
//! grounded on
//! `examples/original_source/include/burst/iterator/semiintersect_iterator.hpp`.
//!
//! A semiintersection with threshold `M` yields elements present in at least `M` of the
//! `N` sub-ranges (`M=1` degenerates to [`crate::cursor::union`], `M=N` to
//! [`crate::cursor::intersect`]). The invariant partitions the `M`-th range (by front
//! element) into place — everything left of it is `<=` its front, everything right is
//! `>=` — then widens the "equal to the candidate" group rightward until it stops
//! growing.

use super::{skip_to_lower_bound, Cursor};
use std::cmp::Ordering;

pub struct SemiintersectCursor<C, F> {
    ranges: Vec<C>,
    min_items: usize,
    equal_count: usize,
    compare: F,
    exhausted: bool,
}

impl<C, F> SemiintersectCursor<C, F>
where
    C: Cursor,
    C::Item: Clone,
    F: Fn(&C::Item, &C::Item) -> Ordering,
{
    pub fn new(ranges: Vec<C>, min_items: usize, compare: F) -> Self {
        assert!(min_items > 0, "semiintersection threshold must be at least 1");
        let mut cursor = SemiintersectCursor {
            ranges,
            min_items,
            equal_count: 0,
            compare,
            exhausted: false,
        };
        cursor.settle();
        cursor
    }

    fn candidate_index(&self) -> usize {
        self.min_items - 1
    }

    /// Brings the `min_items`-th smallest-fronted range to `candidate_index()` without
    /// fully sorting the rest, then widens the equal-to-candidate run rightward.
    fn maintain_invariant(&mut self) {
        let candidate = self.candidate_index();
        nth_element_by_front(&mut self.ranges, candidate, &self.compare);
        let mut boundary = candidate + 1;
        for i in boundary..self.ranges.len() {
            if (self.compare)(self.ranges[i].front(), self.ranges[candidate].front()) == Ordering::Equal {
                self.ranges.swap(i, boundary);
                boundary += 1;
            }
        }
        self.equal_count = boundary - candidate;
    }

    fn settle(&mut self) {
        self.ranges.retain(|r| !r.is_empty());
        if self.ranges.len() < self.min_items {
            self.exhausted = true;
            return;
        }
        self.maintain_invariant();
        self.find_next_semiintersection();
    }

    fn find_next_semiintersection(&mut self) {
        loop {
            if self.ranges.len() < self.min_items {
                self.exhausted = true;
                return;
            }
            let candidate = self.candidate_index();
            let candidate_front = self.ranges[candidate].front().clone();
            let mut restart = false;
            for i in 0..candidate {
                if (self.compare)(self.ranges[i].front(), &candidate_front) == Ordering::Less {
                    skip_to_lower_bound(&mut self.ranges[i], &candidate_front, |a, b| {
                        (self.compare)(a, b) == Ordering::Less
                    });
                    if self.ranges[i].is_empty() {
                        self.ranges.remove(i);
                        restart = true;
                        break;
                    }
                    if (self.compare)(&candidate_front, self.ranges[i].front()) == Ordering::Less {
                        restart = true;
                        break;
                    }
                }
            }
            if !restart {
                return;
            }
            if self.ranges.len() < self.min_items {
                self.exhausted = true;
                return;
            }
            self.maintain_invariant();
        }
    }
}

/// Partial selection: after this call, `ranges[index]` holds the element that would sit
/// at `index` in a full sort-by-front, every earlier slot is `<=` it, every later slot
/// is `>=` it. Grounded on the source's use of `std::nth_element`, which
/// `slice::select_nth_unstable_by` is the direct Rust equivalent of.
fn nth_element_by_front<C, F>(ranges: &mut [C], index: usize, compare: &F)
where
    C: Cursor,
    F: Fn(&C::Item, &C::Item) -> Ordering,
{
    if ranges.len() > 1 {
        ranges.select_nth_unstable_by(index, |a, b| compare(a.front(), b.front()));
    }
}

impl<C, F> Cursor for SemiintersectCursor<C, F>
where
    C: Cursor,
    C::Item: Clone,
    F: Fn(&C::Item, &C::Item) -> Ordering,
{
    type Item = C::Item;

    fn is_empty(&self) -> bool {
        self.exhausted
    }

    fn front(&self) -> &C::Item {
        self.ranges[self.candidate_index()].front()
    }

    fn advance_begin(&mut self, n: usize) {
        for _ in 0..n {
            if self.exhausted {
                return;
            }
            let end = self.candidate_index() + self.equal_count;
            for range in &mut self.ranges[..end] {
                range.advance_begin(1);
            }
            self.settle();
        }
    }
}

impl<C, F> Iterator for SemiintersectCursor<C, F>
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

pub fn semiintersect<C>(
    ranges: Vec<C>,
    min_items: usize,
) -> SemiintersectCursor<C, fn(&C::Item, &C::Item) -> Ordering>
where
    C: Cursor,
    C::Item: Ord + Clone,
{
    SemiintersectCursor::new(ranges, min_items, C::Item::cmp)
}

pub fn semiintersect_by<C, F>(ranges: Vec<C>, min_items: usize, compare: F) -> SemiintersectCursor<C, F>
where
    C: Cursor,
    C::Item: Clone,
    F: Fn(&C::Item, &C::Item) -> Ordering,
{
    SemiintersectCursor::new(ranges, min_items, compare)
}
