pub mod query;
pub mod sleep;

pub use query::{db_query_handler, slow_db_query_handler};
pub use sleep::sleep_handler;

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use thiserror::Error;

use tier_domain::model::{Envelope, ErrorBody, ServiceIdentity};
use tier_domain::{StorageError, Tier};
use tier_relay::metrics_handler;

use crate::state::AppState;

const ROUNDTRIP_MESSAGE: &str = "Returning 200 from DB Service";

/// Binds every data tier route exactly once.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(identity_handler))
        .route("/roundtrip", web::get().to(round_trip_handler))
        .route("/dbquery", web::get().to(db_query_handler))
        .route("/slowdbquery", web::get().to(slow_db_query_handler))
        .route("/sleep/{seconds}", web::get().to(sleep_handler))
        .route("/health", web::get().to(health_handler))
        .route("/metrics", web::get().to(metrics_handler));
}

pub async fn identity_handler() -> HttpResponse {
    HttpResponse::Ok().json(ServiceIdentity::new(Tier::DbService.identity()))
}

/// Acknowledges without touching the store.
pub async fn round_trip_handler() -> HttpResponse {
    HttpResponse::Ok().json(Envelope::new(ROUNDTRIP_MESSAGE, 200))
}

pub async fn health_handler(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.clock().health_report())
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self.to_string()))
    }
}
