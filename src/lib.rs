//! # `cairn` - Comparator-Driven Storage Primitives
//!
//! A small toolkit of storage primitives built around one contract: a
//! pluggable total-order comparator over owned values. The buffer at the
//! bottom treats capacity as policy rather than as an amortization detail,
//! and the heap on top of it is nothing but that buffer plus an ordering
//! invariant.
//!
//! ## The pieces
//!
//! 1. **[`GrowVec`]** — a growable buffer with an explicit capacity policy:
//!    grows by a configurable `expand_rate` step exactly when full, sheds a
//!    step as soon as a full step of slack opens up, refuses to pass
//!    [`MAX_CAPACITY`], and reports allocation failure as an error instead
//!    of aborting. Positional insert/remove, front/back push/pop, `join`/
//!    `split`, comparator search, and visitor traversal.
//!
//! 2. **[`BinaryHeap`]** — a max-heap by comparator order using a `GrowVec`
//!    as its backing store. Insert, peek, extract-max, replace-root,
//!    in-place heapification of an arbitrary buffer, and two combination
//!    algorithms: non-destructive `meld` (inputs preserved, values cloned)
//!    and destructive `merge` (donor drained).
//!
//! 3. **[`PriorityQueue`]** — the heap behind a queue-shaped surface.
//!
//! ## Ordering as a strategy
//!
//! Containers carry a [`Comparator`] value the way hash maps carry a
//! hasher. [`NaturalOrder`] (the default) delegates to `T: Ord`;
//! [`FnComparator`] wraps a plain function pointer and supports the
//! equality test `join`/`meld`/`merge` use to refuse mixing differently
//! ordered containers; [`Reversed`] flips any comparator, which turns the
//! max-heap machinery into a min-heap.
//!
//! ## Failure model
//!
//! Precondition violations never mutate; capacity overflow is detected
//! before allocating; operations that take ownership hand the value back
//! inside [`InsertError`] when they fail. See [`Error`] for the full
//! taxonomy. Everything is single-threaded: `&mut self` is the exclusivity
//! mechanism, and there are no locks or atomics anywhere.
//!
//! ## Example
//!
//! ```rust
//! use cairn::{BinaryHeap, GrowVec};
//!
//! let mut heap = BinaryHeap::new();
//! for v in [5, 1, 8, 3] {
//!     heap.push(v).unwrap();
//! }
//! assert_eq!(heap.pop(), Some(8));
//!
//! let storage: GrowVec<i32> = (1..=5).collect();
//! let mut heap = BinaryHeap::heapify(storage).unwrap();
//! assert_eq!(heap.pop(), Some(5));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod order;

pub use collections::{
    BinaryHeap,
    GrowVec,
    HeapifyError,
    PriorityQueue,
    DEFAULT_EXPAND_RATE,
    MAX_CAPACITY,
};
pub use error::{Error, InsertError};
pub use order::{Comparator, FnComparator, NaturalOrder, Reversed};

// Compile-time layout checks: the comparator-as-strategy design must stay
// free with the default strategy, and the capacity bookkeeping must not
// bloat the containers beyond a handful of words.
const _: () = {
    use core::mem;

    // `NaturalOrder` is a ZST.
    assert!(mem::size_of::<NaturalOrder>() == 0);

    // Buffer = Vec (3 words) + capacity + expand_rate.
    assert!(mem::size_of::<GrowVec<u64>>() == mem::size_of::<usize>() * 5);

    // The heap and queue are pure wrappers, no added state.
    assert!(mem::size_of::<BinaryHeap<u64>>() == mem::size_of::<GrowVec<u64>>());
    assert!(mem::size_of::<PriorityQueue<u64>>() == mem::size_of::<BinaryHeap<u64>>());
};
