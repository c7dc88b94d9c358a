use crate::errors::EmberResult;

/// Bounded, time-decayed key scoring.
///
/// Implementations recharge a key's energy on every observation and let it
/// decay with time, evicting the key closest to expiry when full.
pub trait IDecayTracker {
    /// Record an observation of `key` at `now` (UTC milliseconds).
    /// Returns the key's new kill-time.
    fn observe(&mut self, key: i64, now: i64) -> EmberResult<i64>;

    /// Current kill-time of `key`, if tracked.
    fn kill_time_of(&self, key: i64) -> Option<i64>;

    /// Number of tracked keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
