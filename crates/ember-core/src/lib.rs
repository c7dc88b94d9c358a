//! # ember-core
//!
//! Foundation crate for the Ember decay tracker.
//! Defines the shared errors, config, traits, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{DecayConfig, EmberConfig};
pub use errors::{ConfigError, EmberError, EmberResult, QueueError};
pub use traits::IDecayTracker;
