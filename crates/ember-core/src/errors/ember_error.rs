use super::error_code::EmberErrorCode;
use super::{ConfigError, QueueError};

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmberError {
    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl EmberErrorCode for EmberError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Queue(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type EmberResult<T> = Result<T, EmberError>;
