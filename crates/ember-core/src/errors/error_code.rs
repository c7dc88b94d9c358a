//! EmberErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// that embedding systems can match on without parsing messages.
pub trait EmberErrorCode {
    /// Returns the error code string (e.g., "QUEUE_EMPTY").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const QUEUE_DUPLICATE_KEY: &str = "QUEUE_DUPLICATE_KEY";
pub const QUEUE_EMPTY: &str = "QUEUE_EMPTY";
pub const QUEUE_KEY_NOT_FOUND: &str = "QUEUE_KEY_NOT_FOUND";
pub const QUEUE_CORRUPT: &str = "QUEUE_CORRUPT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
