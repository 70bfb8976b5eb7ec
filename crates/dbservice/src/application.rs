use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use thiserror::Error;
use tracing::info;

use tier_domain::config::ConfigError;
use tier_domain::services::{init_telemetry, ProcessClock, TelemetryConfig, TelemetryError};
use tier_domain::{StorageConfig, StorageError, Tier, TierConfig};
use tier_storage::SeaOrmStorage;

use crate::{handlers::configure, state::AppState};

pub async fn run() -> Result<(), BootstrapError> {
    // 1. Configuration
    let config = TierConfig::load_from_env(Tier::DbService)?;
    let storage_config = StorageConfig::load_from_env()?;

    // 2. Telemetry
    let telemetry = init_telemetry(&TelemetryConfig::for_tier(Tier::DbService))?;

    // 3. Embedded store
    let storage = SeaOrmStorage::connect(storage_config.database_url()).await?;

    let bind_address = config.bind_address();
    let state = AppState::new(config, Arc::new(storage), ProcessClock::start());
    info!(
        bind_address = %bind_address,
        database_url = storage_config.database_url(),
        incremental_sleep = state.config().incremental_sleep(),
        "starting db service"
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
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
