use std::f64::consts::LN_2;

use ember_core::config::DecayConfig;

/// Closed-form conversion between energy and kill-time.
///
/// ```text
/// energy(killTime, now) = killThreshold × 2^((killTime − now) / halfLife)
/// killTime(energy, now) = now + trunc(halfLife × log2(energy / killThreshold))
/// ```
///
/// The exponent uses floating-point division. The kill-time offset is
/// truncated toward zero, never rounded, so results stay bit-comparable
/// with other implementations of the same curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayCurve {
    kill_threshold: f64,
    half_life_ms: i64,
}

impl DecayCurve {
    pub fn new(kill_threshold: f64, half_life_ms: i64) -> Self {
        Self {
            kill_threshold,
            half_life_ms,
        }
    }

    pub fn from_config(config: &DecayConfig) -> Self {
        Self::new(config.kill_threshold, config.half_life_ms)
    }

    /// Energy left at `now` for an entry that dies at `kill_time`.
    pub fn energy_from_kill_time(&self, kill_time: i64, now: i64) -> f64 {
        let exponent = kill_time.saturating_sub(now) as f64 / self.half_life_ms as f64;
        self.kill_threshold * 2f64.powf(exponent)
    }

    /// Instant at which `energy`, held at `now`, decays to the kill threshold.
    pub fn kill_time_from_energy(&self, energy: f64, now: i64) -> i64 {
        let offset = self.half_life_ms as f64 * log2(energy / self.kill_threshold);
        // `as` truncates toward zero and saturates on overflow.
        now.saturating_add(offset as i64)
    }
}

fn log2(x: f64) -> f64 {
    x.ln() / LN_2
}
