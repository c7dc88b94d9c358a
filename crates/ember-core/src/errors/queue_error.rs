//! Indexed priority queue errors.

use super::error_code::{self, EmberErrorCode};

/// Precondition violations and integrity failures of the indexed priority queue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("key {key} is already present in the queue")]
    DuplicateKey { key: i64 },

    #[error("cannot {operation} an empty queue")]
    Empty { operation: &'static str },

    #[error("key {key} is not present in the queue")]
    KeyNotFound { key: i64 },

    #[error("queue index corrupted: {details}")]
    CorruptIndex { details: String },
}

impl EmberErrorCode for QueueError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateKey { .. } => error_code::QUEUE_DUPLICATE_KEY,
            Self::Empty { .. } => error_code::QUEUE_EMPTY,
            Self::KeyNotFound { .. } => error_code::QUEUE_KEY_NOT_FOUND,
            Self::CorruptIndex { .. } => error_code::QUEUE_CORRUPT,
        }
    }
}
