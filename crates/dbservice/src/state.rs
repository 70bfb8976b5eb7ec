use std::sync::Arc;

use tier_domain::services::{ProcessClock, SleepPolicy};
use tier_domain::{QueryProbe, TierConfig};

#[derive(Clone)]
pub struct AppState {
    config: Arc<TierConfig>,
    storage: Arc<dyn QueryProbe>,
    clock: ProcessClock,
    sleep_policy: SleepPolicy,
}

impl AppState {
    pub fn new(config: TierConfig, storage: Arc<dyn QueryProbe>, clock: ProcessClock) -> Self {
        let sleep_policy = SleepPolicy::from_config(&config);
        Self {
            config: Arc::new(config),
            storage,
            clock,
            sleep_policy,
        }
    }

    pub fn config(&self) -> &TierConfig {
        self.config.as_ref()
    }

    pub fn storage(&self) -> &dyn QueryProbe {
        self.storage.as_ref()
    }

    pub fn clock(&self) -> &ProcessClock {
        &self.clock
    }

    pub fn sleep_policy(&self) -> &SleepPolicy {
        &self.sleep_policy
    }
}
