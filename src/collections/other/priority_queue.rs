//! `PriorityQueue` — the heap engine behind a queue-shaped surface.
//!
//! A transparent wrapper over [`BinaryHeap`]: `push` enqueues, `shift`
//! dequeues the highest-priority value. Wrap the comparator in
//! [`Reversed`](crate::order::Reversed) for a min-priority queue.

use core::fmt;

use crate::collections::other::BinaryHeap;
use crate::error::{Error, InsertError};
use crate::order::{Comparator, NaturalOrder};

/// A priority queue ordered by a comparator strategy.
pub struct PriorityQueue<T, C = NaturalOrder> {
    heap: BinaryHeap<T, C>,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue with zero capacity and the default comparator.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` values.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`BinaryHeap::with_capacity`].
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            heap: BinaryHeap::with_capacity(capacity)?,
        })
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// Creates an empty queue prioritized by `comparator`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`BinaryHeap::with_capacity`].
    pub fn with_comparator(comparator: C, capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            heap: BinaryHeap::with_comparator(comparator, capacity)?,
        })
    }

    /// Number of queued values.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Borrows the highest-priority value without dequeuing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Drops every queued value, keeping the committed capacity.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    /// Enqueues a value. O(log n).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`BinaryHeap::push`].
    pub fn push(&mut self, value: T) -> Result<(), InsertError<T>> {
        self.heap.push(value)
    }

    /// Dequeues the highest-priority value. `None` on an empty queue.
    pub fn shift(&mut self) -> Option<T> {
        self.heap.pop()
    }
}

impl<T, C: Default> Default for PriorityQueue<T, C> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::default(),
        }
    }
}

impl<T, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.len())
            .finish()
    }
}
