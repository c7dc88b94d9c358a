//! Error handling for Ember.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod ember_error;
pub mod error_code;
pub mod queue_error;

pub use config_error::ConfigError;
pub use ember_error::{EmberError, EmberResult};
pub use error_code::EmberErrorCode;
pub use queue_error::QueueError;
