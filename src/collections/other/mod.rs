//! Structures layered over the buffer engine.

pub mod binary_heap;
pub mod priority_queue;

pub use binary_heap::{BinaryHeap, HeapifyError};
pub use priority_queue::PriorityQueue;
