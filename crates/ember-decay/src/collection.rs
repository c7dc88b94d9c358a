use std::fmt;

use ember_core::config::DecayConfig;
use ember_core::constants::ABSENT_KILL_TIME;
use ember_core::errors::{ConfigError, EmberResult};
use ember_core::traits::IDecayTracker;
use ember_observability::tracing_setup::events;
use ember_queue::{Entry, IndexedPriorityQueue};

use crate::formula::DecayCurve;
use crate::overflow::OverflowThrottle;
use crate::snapshot::{DecaySnapshot, EntrySnapshot};

/// Capacity-bounded store of per-key energy, ordered by kill-time.
///
/// Holds at most `max_size` keys. Inserting a new key into a full collection,
/// or while the soonest-to-die key has already expired, evicts that key first.
///
/// Not internally synchronized; mutation takes `&mut self`.
#[derive(Debug)]
pub struct DecayCollection<V> {
    config: DecayConfig,
    curve: DecayCurve,
    queue: IndexedPriorityQueue<V>,
    overflow: OverflowThrottle,
}

impl<V: Default> DecayCollection<V> {
    /// Create an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationFailed`] if any capacity or decay
    /// parameter is out of range.
    pub fn new(config: DecayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        events::collection_created(&config.label, config.max_size, config.half_life_ms);
        Ok(Self {
            curve: DecayCurve::from_config(&config),
            queue: IndexedPriorityQueue::with_capacity(config.max_size),
            overflow: OverflowThrottle::new(),
            config,
        })
    }

    /// Record an observation of `key` at `now` (UTC milliseconds).
    ///
    /// Recharges the key's decayed energy by one `energy_unit` and moves its
    /// kill-time accordingly. Unseen keys start from zero energy with a
    /// default payload, after making room via [`cleanup_collection`](Self::cleanup_collection).
    pub fn update(&mut self, key: i64, now: i64) -> EmberResult<&Entry<V>> {
        let _span = ember_observability::update_span!(self.config.label, key).entered();

        let current = self
            .queue
            .get(key)
            .map(|entry| self.curve.energy_from_kill_time(entry.priority, now));
        let energy = current.unwrap_or(0.0) + self.config.energy_unit;
        let kill_time = self.curve.kill_time_from_energy(energy, now);

        if current.is_some() {
            return Ok(self.queue.set_priority(key, kill_time)?);
        }

        self.cleanup_collection(now)?;
        Ok(self.queue.add(Entry::new(key, V::default(), kill_time))?)
    }
}

impl<V> DecayCollection<V> {
    /// Evict the soonest-to-die entry if the collection is full or that
    /// entry has already expired. At most one entry is evicted per call.
    ///
    /// Evicting a live entry only because the collection is full counts as
    /// an overflow; overflows are logged with exponential backoff.
    pub fn cleanup_collection(&mut self, now: i64) -> EmberResult<Option<Entry<V>>> {
        let _span =
            ember_observability::cleanup_span!(self.config.label, self.queue.len()).entered();

        let smallest = match self.queue.peek() {
            Some(entry) => entry.priority,
            None => return Ok(None),
        };
        if self.queue.len() < self.config.max_size && smallest >= now {
            return Ok(None);
        }

        let evicted = self.queue.pop()?;
        if evicted.priority >= now {
            if let Some(warnings) = self.overflow.record() {
                events::overflow_eviction(
                    &self.config.label,
                    evicted.key,
                    evicted.priority.saturating_sub(now),
                    warnings,
                );
            }
        } else {
            events::expired_eviction(
                &self.config.label,
                evicted.key,
                now.saturating_sub(evicted.priority),
            );
        }
        Ok(Some(evicted))
    }

    /// Energy an entry dying at `kill_time` holds at `now`.
    pub fn find_energy_for_kill_time(&self, kill_time: i64, now: i64) -> f64 {
        self.curve.energy_from_kill_time(kill_time, now)
    }

    /// Kill-time of `energy` held at `now`.
    pub fn kill_time_from_energy(&self, energy: f64, now: i64) -> i64 {
        self.curve.kill_time_from_energy(energy, now)
    }

    /// Current decayed energy of `key`, if tracked.
    pub fn energy_of(&self, key: i64, now: i64) -> Option<f64> {
        self.queue
            .get(key)
            .map(|entry| self.curve.energy_from_kill_time(entry.priority, now))
    }

    /// Kill-time of `key` as text, or `"0"` if it is not tracked.
    pub fn to_string_kill_time(&self, key: i64) -> String {
        self.queue
            .get(key)
            .map_or_else(|| ABSENT_KILL_TIME.to_string(), |entry| entry.priority.to_string())
    }

    pub fn get(&self, key: i64) -> Option<&Entry<V>> {
        self.queue.get(key)
    }

    /// Mutable access to a tracked payload. Kill-times are untouched.
    pub fn value_mut(&mut self, key: i64) -> Option<&mut V> {
        self.queue.value_mut(key)
    }

    /// Read-only view of the underlying queue.
    pub fn queue(&self) -> &IndexedPriorityQueue<V> {
        &self.queue
    }

    pub fn config(&self) -> &DecayConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of live entries evicted only because the collection was full.
    pub fn num_overflow_warnings(&self) -> u64 {
        self.overflow.warnings()
    }

    /// Configuration and all entries, sorted ascending by kill-time.
    pub fn snapshot(&self) -> DecaySnapshot {
        let mut entries: Vec<EntrySnapshot> = self
            .queue
            .iter()
            .map(|entry| EntrySnapshot {
                key: entry.key,
                kill_time: entry.priority,
            })
            .collect();
        entries.sort_unstable_by_key(|e| (e.kill_time, e.key));

        DecaySnapshot {
            label: self.config.label.clone(),
            max_size: self.config.max_size,
            energy_unit: self.config.energy_unit,
            kill_threshold: self.config.kill_threshold,
            half_life_ms: self.config.half_life_ms,
            size: entries.len(),
            num_overflow_warnings: self.overflow.warnings(),
            entries,
        }
    }
}

impl<V> fmt::Display for DecayCollection<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}

impl<V: Default> IDecayTracker for DecayCollection<V> {
    fn observe(&mut self, key: i64, now: i64) -> EmberResult<i64> {
        self.update(key, now).map(|entry| entry.priority)
    }

    fn kill_time_of(&self, key: i64) -> Option<i64> {
        self.queue.get(key).map(|entry| entry.priority)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
