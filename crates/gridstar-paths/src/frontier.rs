use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridstar_core::Point;

/// One frontier entry.
#[derive(Clone, Copy, Debug)]
pub struct FrontierEntry {
    pub pos: Point,
    pub f: f64,
    pub h: f64,
    seq: u64,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed throughout so BinaryHeap (max-heap) pops the smallest f,
        // then the smallest h, then the oldest push.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Min-priority queue of cells keyed by `f`.
///
/// Improving a cell's cost pushes a fresh entry and leaves the old one in
/// place; the engine drops superseded entries when they surface. `len` is
/// therefore not a bound on the work left.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pos: Point, f: f64, h: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry { pos, f, h, seq });
    }

    /// Remove and return the entry with the lowest `f`.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
