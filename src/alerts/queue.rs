//! Priority Queue Module
//!
//! Min-priority queue over anything with a numeric urgency. Lower
//! priority values pop first; equal priorities pop in insertion order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Items that carry an urgency. Lower is more urgent.
pub trait Prioritized {
    fn priority(&self) -> u8;
}

#[derive(Debug)]
struct Slot<T> {
    priority: u8,
    seq: u64,
    item: T,
}

impl<T> Slot<T> {
    fn rank(&self) -> (u8, u64) {
        (self.priority, self.seq)
    }
}

impl<T> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}

impl<T> Eq for Slot<T> {}

impl<T> PartialOrd for Slot<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Slot<T> {
    // Reversed so the max-heap yields the smallest (priority, seq).
    fn cmp(&self, other: &Self) -> Ordering {
        other.rank().cmp(&self.rank())
    }
}

// == Alert Queue ==
/// Stable min-heap, optionally bounded.
#[derive(Debug)]
pub struct AlertQueue<T> {
    heap: BinaryHeap<Slot<T>>,
    next_seq: u64,
    limit: Option<usize>,
}

impl<T: Prioritized> Default for AlertQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Prioritized> AlertQueue<T> {
    /// Unbounded queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            limit: None,
        }
    }

    /// Queue holding at most `limit` items (minimum 1).
    pub fn bounded(limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::new()
        }
    }

    // == Push ==
    /// Enqueues `item`.
    ///
    /// On a full bounded queue, the least urgent item (latest among equals)
    /// is displaced when `item` is strictly more urgent; otherwise `item` is
    /// turned away. Either way the item that did not fit is returned.
    pub fn push(&mut self, item: T) -> Option<T> {
        let slot = Slot {
            priority: item.priority(),
            seq: self.next_seq,
            item,
        };
        self.next_seq += 1;

        if let Some(limit) = self.limit {
            if self.heap.len() >= limit {
                return self.displace(slot);
            }
        }

        self.heap.push(slot);
        None
    }

    fn displace(&mut self, incoming: Slot<T>) -> Option<T> {
        let worst = match self.heap.iter().map(Slot::rank).max() {
            Some(rank) => rank,
            None => return Some(incoming.item),
        };
        if incoming.priority >= worst.0 {
            return Some(incoming.item);
        }

        let mut slots = std::mem::take(&mut self.heap).into_vec();
        let displaced = slots
            .iter()
            .position(|s| s.rank() == worst)
            .map(|pos| slots.swap_remove(pos).item);
        self.heap = BinaryHeap::from(slots);
        self.heap.push(incoming);
        displaced
    }

    /// Removes and returns the most urgent item.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|slot| slot.item)
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|slot| &slot.item)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Empties the queue, most urgent first.
    pub fn drain_sorted(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.heap.len());
        while let Some(item) = self.pop() {
            out.push(item);
        }
        out
    }
}
