//! # ember-observability
//!
//! Structured logging for Ember: subscriber setup, span macros, and the
//! event helpers the decay collection emits through.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
