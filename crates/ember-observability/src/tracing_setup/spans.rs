//! Span definitions for decay collection operations.

/// Create an update span.
#[macro_export]
macro_rules! update_span {
    ($label:expr, $key:expr) => {
        tracing::trace_span!("ember.update", label = %$label, key = $key)
    };
}

/// Create a cleanup span.
#[macro_export]
macro_rules! cleanup_span {
    ($label:expr, $size:expr) => {
        tracing::trace_span!("ember.cleanup", label = %$label, size = $size)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const UPDATE: &str = "ember.update";
    pub const CLEANUP: &str = "ember.cleanup";
}
