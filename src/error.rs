//! Failure taxonomy shared by every container in the crate.
//!
//! Precondition violations (bad index, empty-when-nonempty-required,
//! mismatched comparators) never mutate the container. Capacity overflow is
//! detected before any allocation is attempted, and allocation failure is
//! surfaced through [`Vec::try_reserve_exact`] instead of aborting the
//! process.

use core::fmt;
use std::collections::TryReserveError;

use thiserror::Error;

/// Errors reported by [`GrowVec`](crate::GrowVec),
/// [`BinaryHeap`](crate::BinaryHeap) and [`PriorityQueue`](crate::PriorityQueue)
/// operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// An index argument does not address a live slot.
    #[error("position {position} is out of bounds for length {len}")]
    OutOfBounds {
        /// The offending index.
        position: usize,
        /// Live element count at the time of the call.
        len: usize,
    },

    /// The operation requires a non-empty container.
    #[error("container is empty")]
    Empty,

    /// A half-open range was given with `from >= to`.
    #[error("invalid range: from {from} is not below to {to}")]
    InvalidRange {
        /// Inclusive start of the requested range.
        from: usize,
        /// Exclusive end of the requested range.
        to: usize,
    },

    /// Growing would push the capacity past [`MAX_CAPACITY`](crate::MAX_CAPACITY).
    #[error("capacity would exceed the maximum representable slot count")]
    CapacityOverflow,

    /// The allocator declined the reservation.
    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),

    /// `expand` was asked for a capacity at or below the current one.
    #[error("new capacity {requested} does not exceed current capacity {current}")]
    CapacityNotLarger {
        /// The capacity that was requested.
        requested: usize,
        /// The capacity the container already has.
        current: usize,
    },

    /// `shrink_to_fit` found capacity and length already equal.
    #[error("capacity already matches length")]
    AlreadyCompact,

    /// Two containers with different comparators cannot be combined.
    #[error("comparators of the two containers differ")]
    ComparatorMismatch,

    /// The container holds too few elements for the operation to be
    /// meaningful (splitting or heapifying a single slot, for instance).
    #[error("operation needs at least {required} elements, container has {len}")]
    TooShort {
        /// Live element count at the time of the call.
        len: usize,
        /// Minimum element count the operation accepts.
        required: usize,
    },
}

/// A value-carrying rejection for operations that take ownership of their
/// argument.
///
/// When `push_back`, `insert_at`, `push` and friends fail, the container is
/// left untouched and the value the caller handed over comes back inside
/// this wrapper rather than being dropped.
///
/// ```
/// use cairn::GrowVec;
///
/// let mut buf: GrowVec<i32> = GrowVec::new();
/// let err = buf.insert_at(3, 42).unwrap_err();
/// assert_eq!(err.into_value(), 42);
/// ```
#[derive(Debug)]
pub struct InsertError<T> {
    value: T,
    kind: Error,
}

impl<T> InsertError<T> {
    pub(crate) fn new(value: T, kind: Error) -> Self {
        Self { value, kind }
    }

    /// Recovers the value that was rejected.
    pub fn into_value(self) -> T {
        self.value
    }

    /// The underlying failure.
    pub fn kind(&self) -> &Error {
        &self.kind
    }

    /// Splits the rejection into the value and the failure.
    pub fn into_parts(self) -> (T, Error) {
        (self.value, self.kind)
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl<T: fmt::Debug> std::error::Error for InsertError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
