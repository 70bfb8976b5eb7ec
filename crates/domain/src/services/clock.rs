use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::model::HealthReport;

/// Captures when the process started so health endpoints can report uptime
/// without touching any shared mutable state.
#[derive(Debug, Clone, Copy)]
pub struct ProcessClock {
    started: Instant,
    booted_at: DateTime<Utc>,
}

impl ProcessClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            booted_at: Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    pub fn booted_at(&self) -> DateTime<Utc> {
        self.booted_at
    }

    pub fn health_report(&self) -> HealthReport {
        HealthReport::ok(self.uptime_seconds(), self.booted_at)
    }
}

impl Default for ProcessClock {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_grows_monotonically() {
        let clock = ProcessClock::start();
        let first = clock.uptime_seconds();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(clock.uptime_seconds() > first);
        assert!(clock.booted_at() <= Utc::now());
    }

    #[test]
    fn report_carries_boot_time() {
        let clock = ProcessClock::start();
        let report = clock.health_report();
        assert_eq!(report.status, "OK");
        assert_eq!(report.boottime, clock.booted_at());
        assert!(report.uptime >= 0.0);
    }
}
