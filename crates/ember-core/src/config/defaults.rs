// Single source of truth for all default values.

// --- Decay ---
pub const DEFAULT_LABEL: &str = "ember";
pub const DEFAULT_MAX_SIZE: usize = 10_000;
pub const DEFAULT_ENERGY_UNIT: f64 = 1.0;
pub const DEFAULT_KILL_THRESHOLD: f64 = 1.0;
pub const DEFAULT_HALF_LIFE_MS: i64 = 3_600_000; // 1 hour

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
