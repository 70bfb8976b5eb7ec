use std::time::Duration;

use tracing::debug;

use crate::config::TierConfig;

/// Largest client-supplied sleep honoured before falling back to the default.
pub const MAX_REQUESTED_SLEEP: i64 = 10;

/// Turns a client-requested sleep into the duration a tier actually waits.
///
/// Requests outside `0..=MAX_REQUESTED_SLEEP` are replaced by the default,
/// then the tier's increment is added. The clamp only ever looks at the value
/// this tier received, so totals grow as a request walks down the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepPolicy {
    default_sleep: i64,
    incremental_sleep: i64,
}

impl SleepPolicy {
    pub fn new(default_sleep: i64, incremental_sleep: i64) -> Self {
        Self {
            default_sleep,
            incremental_sleep,
        }
    }

    pub fn from_config(config: &TierConfig) -> Self {
        Self::new(config.default_sleep(), config.incremental_sleep())
    }

    pub fn total_seconds(&self, requested: i64) -> i64 {
        let base = if (0..=MAX_REQUESTED_SLEEP).contains(&requested) {
            requested
        } else {
            debug!(
                requested,
                default = self.default_sleep,
                "sleep request out of range, using default"
            );
            self.default_sleep
        };
        base.saturating_add(self.incremental_sleep)
    }

    /// Negative totals (possible only with a negative configured default or
    /// increment) do not sleep at all.
    pub fn duration(total_seconds: i64) -> Duration {
        Duration::from_secs(u64::try_from(total_seconds).unwrap_or(0))
    }
}
