//! # ember-decay
//!
//! Bounded, time-decayed key scoring.
//! Each observation of a key adds a fixed unit of energy; energy halves every
//! half-life. A key's heap priority is its kill-time, the instant its energy
//! falls to the kill threshold. When full, the key closest to its kill-time
//! is evicted to make room.

pub mod collection;
pub mod formula;
pub mod overflow;
pub mod snapshot;

pub use collection::DecayCollection;
pub use formula::DecayCurve;
pub use overflow::OverflowThrottle;
pub use snapshot::{DecaySnapshot, EntrySnapshot};
