//! Two-range set difference cursor (spec §4.8), grounded on
//! `examples/original_source/burst/iterator/difference_iterator.hpp`.
//!
//! Invariant: either the cursor is exhausted, or the minuend's front is strictly less
//! than the subtrahend's front. Each step advances the minuend by one and restores the
//! invariant by walking both ranges forward past any elements they share.

use super::{skip_to_lower_bound, Cursor};
use std::cmp::Ordering;

pub struct DifferenceCursor<M, S, F> {
    minuend: M,
    subtrahend: S,
    compare: F,
}

impl<M, S, F> DifferenceCursor<M, S, F>
where
    M: Cursor,
    M::Item: Clone,
    S: Cursor<Item = M::Item>,
    F: Fn(&M::Item, &M::Item) -> Ordering,
{
    pub fn new(minuend: M, subtrahend: S, compare: F) -> Self {
        let mut cursor = DifferenceCursor {
            minuend,
            subtrahend,
            compare,
        };
        cursor.maintain_invariant();
        cursor
    }

    fn drop_subtrahend_head(&mut self) {
        if !self.minuend.is_empty()
            && !self.subtrahend.is_empty()
            && (self.compare)(self.subtrahend.front(), self.minuend.front()) == Ordering::Less
        {
            let target = self.minuend.front().clone();
            skip_to_lower_bound(&mut self.subtrahend, &target, |a, b| {
                (self.compare)(a, b) == Ordering::Less
            });
        }
    }

    fn maintain_invariant(&mut self) {
        while !self.subtrahend.is_empty()
            && !self.minuend.is_empty()
            && (self.compare)(self.minuend.front(), self.subtrahend.front()) != Ordering::Less
        {
            if (self.compare)(self.subtrahend.front(), self.minuend.front()) != Ordering::Less {
                self.minuend.advance_begin(1);
                self.subtrahend.advance_begin(1);
            }
            self.drop_subtrahend_head();
        }
    }
}

impl<M, S, F> Cursor for DifferenceCursor<M, S, F>
where
    M: Cursor,
    M::Item: Clone,
    S: Cursor<Item = M::Item>,
    F: Fn(&M::Item, &M::Item) -> Ordering,
{
    type Item = M::Item;

    fn is_empty(&self) -> bool {
        self.minuend.is_empty()
    }

    fn front(&self) -> &M::Item {
        self.minuend.front()
    }

    fn advance_begin(&mut self, n: usize) {
        for _ in 0..n {
            if self.minuend.is_empty() {
                return;
            }
            self.minuend.advance_begin(1);
            self.maintain_invariant();
        }
    }
}

impl<M, S, F> Iterator for DifferenceCursor<M, S, F>
where
    M: Cursor,
    M::Item: Clone,
    S: Cursor<Item = M::Item>,
    F: Fn(&M::Item, &M::Item) -> Ordering,
{
    type Item = M::Item;

    fn next(&mut self) -> Option<M::Item> {
        if Cursor::is_empty(self) {
            return None;
        }
        let item = self.front().clone();
        self.advance_begin(1);
        Some(item)
    }
}

pub fn difference<M, S>(minuend: M, subtrahend: S) -> DifferenceCursor<M, S, fn(&M::Item, &M::Item) -> Ordering>
where
    M: Cursor,
    M::Item: Ord + Clone,
    S: Cursor<Item = M::Item>,
{
    DifferenceCursor::new(minuend, subtrahend, M::Item::cmp)
}

pub fn difference_by<M, S, F>(minuend: M, subtrahend: S, compare: F) -> DifferenceCursor<M, S, F>
where
    M: Cursor,
    M::Item: Clone,
    S: Cursor<Item = M::Item>,
    F: Fn(&M::Item, &M::Item) -> Ordering,
{
    DifferenceCursor::new(minuend, subtrahend, compare)
}
