//! Stable priority frontier for uniform-cost search.
//!
//! Entries are stored in a min-heap keyed by `(rank, insertion_order)`.
//! The lowest rank pops first and equal ranks pop in the order they were
//! pushed. Entries are never deduplicated: the same item may be pushed
//! several times and it is up to the caller to skip stale ones.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<E> {
    item: E,
    rank: i32,
    /// Push counter; orders entries of equal rank.
    seq: u64,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.seq == other.seq
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Natural order; the heap wraps entries in `Reverse`.
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A min-priority queue with FIFO tie-breaking.
#[derive(Debug)]
pub struct PriorityFrontier<E> {
    heap: BinaryHeap<Reverse<Entry<E>>>,
    seq: u64,
}

impl<E> PriorityFrontier<E> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Push an item at the given rank.
    pub fn push(&mut self, item: E, rank: i32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { item, rank, seq }));
    }

    /// Pop the item with the lowest rank (ties broken FIFO).
    pub fn pop(&mut self) -> Option<E> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }

    /// Pop the item with the lowest rank, also returning the rank.
    pub fn pop_with_rank(&mut self) -> Option<(E, i32)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.rank))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of pending entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<E> Default for PriorityFrontier<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cheapest_cell_comes_out_first() {
        let mut open = PriorityFrontier::new();
        for (cell, dist) in [(12usize, 3), (4, 1), (9, 2)] {
            open.push(cell, dist);
        }
        let order: Vec<usize> = std::iter::from_fn(|| open.pop()).collect();
        assert_eq!(order, vec![4, 9, 12]);
    }

    #[test]
    fn equal_distances_keep_push_order() {
        let mut open = PriorityFrontier::new();
        open.push(10, 1);
        open.push(3, 1);
        open.push(7, 0);
        open.push(1, 1);

        assert_eq!(open.pop_with_rank(), Some((7, 0)));
        let rest: Vec<usize> = std::iter::from_fn(|| open.pop()).collect();
        assert_eq!(rest, vec![10, 3, 1]);
    }

    #[test]
    fn stale_entries_are_kept() {
        let mut open = PriorityFrontier::default();
        open.push(7usize, 4);
        open.push(7, 2);
        assert_eq!(open.len(), 2);
        assert_eq!(open.pop_with_rank(), Some((7, 2)));
        assert_eq!(open.pop_with_rank(), Some((7, 4)));
        assert!(open.is_empty());
    }
}
