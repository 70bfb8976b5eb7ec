use actix_web::{middleware::Logger, web, App, HttpServer};
use thiserror::Error;
use tracing::info;

use tier_domain::config::ConfigError;
use tier_domain::services::{init_telemetry, ProcessClock, TelemetryConfig, TelemetryError};
use tier_domain::{Tier, TierConfig};
use tier_relay::{RelayClient, RelayError};

use crate::{handlers::configure, state::AppState};

pub async fn run() -> Result<(), BootstrapError> {
    // 1. Configuration
    let config = TierConfig::load_from_env(Tier::Backend)?;

    // 2. Telemetry
    let telemetry = init_telemetry(&TelemetryConfig::for_tier(Tier::Backend))?;

    // 3. Outbound client towards the data tier
    let relay = RelayClient::new()?;

    let bind_address = config.bind_address();
    let state = AppState::new(config, relay, ProcessClock::start());
    info!(
        bind_address = %bind_address,
        db_service = state.config().db_service(),
        incremental_sleep = state.config().incremental_sleep(),
        "starting backend"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(telemetry.clone()))
            .wrap(Logger::default())
            .configure(configure)
    })
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("relay error: {0}")]
    Relay(#[from] RelayError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
