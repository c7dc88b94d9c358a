use std::fmt;

use serde::{Deserialize, Serialize};

/// Point-in-time dump of a decay collection, entries sorted by kill-time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecaySnapshot {
    pub label: String,
    pub max_size: usize,
    pub energy_unit: f64,
    pub kill_threshold: f64,
    pub half_life_ms: i64,
    pub size: usize,
    pub num_overflow_warnings: u64,
    pub entries: Vec<EntrySnapshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySnapshot {
    pub key: i64,
    pub kill_time: i64,
}

impl fmt::Display for DecaySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "DecayCollection[{}] maxSize={} energyUnit={} killThreshold={} halfLife={}ms size={} overflowWarnings={}",
            self.label,
            self.max_size,
            self.energy_unit,
            self.kill_threshold,
            self.half_life_ms,
            self.size,
            self.num_overflow_warnings,
        )?;
        for entry in &self.entries {
            writeln!(f, "  key={} killTime={}", entry.key, entry.kill_time)?;
        }
        Ok(())
    }
}
