use crate::cost::{cmp, Cost};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A cost-ordered min-heap.
///
/// The teacher's own priority queue (`astarpa/src/bucket_queue.rs`'s
/// `BucketQueue`/`ShiftQueue`) bucket-sorts on an integer-valued `Cost =
/// i32`, which does not fit a generic — possibly floating-point — cost
/// type. `ordered-float` was considered and rejected for the same reason:
/// it targets float costs specifically, whereas this crate's `Cost` must
/// stay generic over both integer and float callbacks. A plain
/// `std::collections::BinaryHeap` wrapped in a `partial_cmp`-based min-heap
/// entry covers both without picking a representation tied to one.
pub(crate) struct MinHeap<C: Cost, D> {
    heap: BinaryHeap<Entry<C, D>>,
}

struct Entry<C: Cost, D> {
    cost: C,
    data: D,
}

impl<C: Cost, D> PartialEq for Entry<C, D> {
    fn eq(&self, other: &Self) -> bool {
        cmp(self.cost, other.cost) == Ordering::Equal
    }
}
impl<C: Cost, D> Eq for Entry<C, D> {}

impl<C: Cost, D> PartialOrd for Entry<C, D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Cost, D> Ord for Entry<C, D> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: `BinaryHeap` is a max-heap, and we want the smallest
        // cost to come out first.
        cmp(other.cost, self.cost)
    }
}

impl<C: Cost, D> MinHeap<C, D> {
    pub(crate) fn new() -> Self {
        Self { heap: BinaryHeap::new() }
    }

    pub(crate) fn push(&mut self, cost: C, data: D) {
        self.heap.push(Entry { cost, data });
    }

    pub(crate) fn pop(&mut self) -> Option<(C, D)> {
        self.heap.pop().map(|e| (e.cost, e.data))
    }
}
