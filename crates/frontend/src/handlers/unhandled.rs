//! A route whose failures are never translated into a JSON error body. They
//! surface through actix-web's default error rendering so unhandled-error
//! tooling has something to observe.

use actix_web::{web, HttpResponse, ResponseError};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use tier_domain::config::ConfigError;
use tier_domain::model::Envelope;
use tier_relay::json_with_status;

use crate::state::AppState;

#[derive(Debug, Error)]
pub enum UnhandledError {
    #[error("configuration lookup failed: {0}")]
    Lookup(#[from] ConfigError),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

// Default rendering: 500 with the error's text as a plain body.
impl ResponseError for UnhandledError {}

pub async fn unhandled_exception_handler(
    state: web::Data<AppState>,
) -> Result<HttpResponse, UnhandledError> {
    let destination = format!("{}/dummy", state.config().dummy_service()?);
    info!(destination_api = %destination, "forwarding request");

    let response = state.relay().http().get(&destination).send().await?;
    let status = i64::from(response.status().as_u16());
    let body: Value = response.json().await?;
    Ok(json_with_status(status, &Envelope::new(body, status)))
}
