pub mod chain;
pub mod failure;

pub use chain::{db_query_handler, round_trip_handler, sleep_handler, slow_db_handler};
pub use failure::failed_flow_handler;

use actix_web::{web, HttpResponse};
use tier_domain::model::ServiceIdentity;
use tier_domain::Tier;
use tier_relay::metrics_handler;

use crate::state::AppState;

/// Binds every backend route exactly once. `/slowdb` is served by
/// `slow_db_handler`, which targets the data tier's `/slowdbquery`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(identity_handler))
        .route("/roundtrip", web::get().to(round_trip_handler))
        .route("/failedflow", web::get().to(failed_flow_handler))
        .route("/dbquery", web::get().to(db_query_handler))
        .route("/slowdb", web::get().to(slow_db_handler))
        .route("/sleep/{seconds}", web::get().to(sleep_handler))
        .route("/health", web::get().to(health_handler))
        .route("/metrics", web::get().to(metrics_handler));
}

pub async fn identity_handler() -> HttpResponse {
    HttpResponse::Ok().json(ServiceIdentity::new(Tier::Backend.identity()))
}

pub async fn health_handler(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.clock().health_report())
}
