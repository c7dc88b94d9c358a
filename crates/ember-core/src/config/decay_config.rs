use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Decay collection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Name used in diagnostics and log events only.
    pub label: String,
    /// Maximum number of keys retained at once.
    pub max_size: usize,
    /// Energy added to a key on every observation.
    pub energy_unit: f64,
    /// Energy level at which a key is considered expired.
    pub kill_threshold: f64,
    /// Time for energy to decay by half (milliseconds).
    pub half_life_ms: i64,
}

impl DecayConfig {
    /// Build a config with the given capacity and decay parameters.
    pub fn new(
        label: impl Into<String>,
        max_size: usize,
        energy_unit: f64,
        kill_threshold: f64,
        half_life_ms: i64,
    ) -> Self {
        Self {
            label: label.into(),
            max_size,
            energy_unit,
            kill_threshold,
            half_life_ms,
        }
    }

    /// Reject parameters that would produce NaN or infinite kill-times.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_size == 0 {
            return Err(invalid("decay.max_size", "must be at least 1"));
        }
        if !(self.energy_unit.is_finite() && self.energy_unit > 0.0) {
            return Err(invalid(
                "decay.energy_unit",
                "must be a finite value greater than 0",
            ));
        }
        if !(self.kill_threshold.is_finite() && self.kill_threshold > 0.0) {
            return Err(invalid(
                "decay.kill_threshold",
                "must be a finite value greater than 0",
            ));
        }
        if self.half_life_ms <= 0 {
            return Err(invalid("decay.half_life_ms", "must be greater than 0"));
        }
        Ok(())
    }
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            label: defaults::DEFAULT_LABEL.to_string(),
            max_size: defaults::DEFAULT_MAX_SIZE,
            energy_unit: defaults::DEFAULT_ENERGY_UNIT,
            kill_threshold: defaults::DEFAULT_KILL_THRESHOLD,
            half_life_ms: defaults::DEFAULT_HALF_LIFE_MS,
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
