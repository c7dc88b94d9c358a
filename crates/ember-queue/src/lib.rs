//! # ember-queue
//!
//! Array-backed binary min-heap over `(key, value, priority)` entries,
//! augmented with a key → position index.
//! Lookup by key is O(1); insert, pop, removal, and re-prioritization
//! in either direction are O(log n).

pub mod entry;
pub mod queue;

pub use entry::Entry;
pub use queue::IndexedPriorityQueue;
