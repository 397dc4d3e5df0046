//! Vector-shaped storage.

pub mod grow_vec;

pub use grow_vec::{GrowVec, DEFAULT_EXPAND_RATE, MAX_CAPACITY};
