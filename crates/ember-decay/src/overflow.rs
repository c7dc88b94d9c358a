use ember_core::constants::OVERFLOW_WARNING_BACKOFF;

/// Exponential backoff for overflow eviction warnings.
///
/// Every forced eviction is counted, but only the 1st, 2nd, 4th, 8th, ...
/// are reported, so sustained overflow produces O(log n) log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverflowThrottle {
    warnings: u64,
    next_warning: u64,
}

impl OverflowThrottle {
    pub fn new() -> Self {
        Self {
            warnings: 0,
            next_warning: 1,
        }
    }

    /// Count one forced eviction.
    /// Returns the running count when this eviction should be reported.
    pub fn record(&mut self) -> Option<u64> {
        self.warnings += 1;
        if self.warnings != self.next_warning {
            return None;
        }
        self.next_warning = self.next_warning.saturating_mul(OVERFLOW_WARNING_BACKOFF);
        Some(self.warnings)
    }

    /// Total forced evictions counted so far.
    pub fn warnings(&self) -> u64 {
        self.warnings
    }

    /// Count at which the next report fires.
    pub fn next_warning(&self) -> u64 {
        self.next_warning
    }
}

impl Default for OverflowThrottle {
    fn default() -> Self {
        Self::new()
    }
}
