/// Text returned for the kill-time of a key that is not tracked.
pub const ABSENT_KILL_TIME: &str = "0";

/// Factor applied to the overflow warning threshold after each emitted warning.
pub const OVERFLOW_WARNING_BACKOFF: u64 = 2;

/// Name of the environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "EMBER_LOG";
