use std::sync::Arc;

use tier_domain::services::{ProcessClock, SleepPolicy};
use tier_domain::TierConfig;
use tier_relay::RelayClient;

#[derive(Clone)]
pub struct AppState {
    config: Arc<TierConfig>,
    relay: RelayClient,
    clock: ProcessClock,
    sleep_policy: SleepPolicy,
}

impl AppState {
    pub fn new(config: TierConfig, relay: RelayClient, clock: ProcessClock) -> Self {
        let sleep_policy = SleepPolicy::from_config(&config);
        Self {
            config: Arc::new(config),
            relay,
            clock,
            sleep_policy,
        }
    }

    pub fn config(&self) -> &TierConfig {
        self.config.as_ref()
    }

    pub fn relay(&self) -> &RelayClient {
        &self.relay
    }

    pub fn clock(&self) -> &ProcessClock {
        &self.clock
    }

    pub fn sleep_policy(&self) -> &SleepPolicy {
        &self.sleep_policy
    }

    /// Data tier URL for `path`.
    pub fn db_service_url(&self, path: &str) -> String {
        format!("{}{}", self.config.db_service(), path)
    }
}
