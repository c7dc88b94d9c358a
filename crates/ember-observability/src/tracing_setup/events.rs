//! Structured log events for decay collection operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the creation of a decay collection.
pub fn collection_created(label: &str, max_size: usize, half_life_ms: i64) {
    tracing::info!(
        event = "collection_created",
        label = %label,
        max_size = max_size,
        half_life_ms = half_life_ms,
        "decay collection created"
    );
}

/// Log a forced eviction of a key that had not expired yet.
///
/// Callers throttle this themselves; see `DecayCollection::cleanup_collection`.
pub fn overflow_eviction(label: &str, key: i64, killed_early_ms: i64, warnings: u64) {
    tracing::warn!(
        event = "overflow_eviction",
        label = %label,
        key = key,
        killed_early_ms = killed_early_ms,
        warnings = warnings,
        "collection full, evicted key before its kill-time"
    );
}

/// Log the eviction of an already expired key.
pub fn expired_eviction(label: &str, key: i64, expired_for_ms: i64) {
    tracing::debug!(
        event = "expired_eviction",
        label = %label,
        key = key,
        expired_for_ms = expired_for_ms,
        "evicted expired key"
    );
}
