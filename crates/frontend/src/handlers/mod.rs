pub mod chain;
pub mod custom;
pub mod health;
pub mod unhandled;

pub use chain::{failed_flow_handler, round_trip_handler, sleep_handler, slow_db_handler};
pub use custom::custom_code_handler;
pub use health::{backend_health_handler, db_service_health_handler, frontend_health_handler};
pub use unhandled::unhandled_exception_handler;

use actix_web::{web, HttpResponse};
use tier_domain::model::ServiceIdentity;
use tier_domain::Tier;
use tier_relay::metrics_handler;

/// Binds every frontend route exactly once.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(identity_handler))
        .route("/roundtrip", web::get().to(round_trip_handler))
        .route("/failedflow", web::get().to(failed_flow_handler))
        .route(
            "/unhandledexception",
            web::get().to(unhandled_exception_handler),
        )
        .route("/custom/{code}", web::get().to(custom_code_handler))
        .route("/slowdb", web::get().to(slow_db_handler))
        .route("/sleep/{seconds}", web::get().to(sleep_handler))
        .route("/frontend/health", web::get().to(frontend_health_handler))
        .route("/backend/health", web::get().to(backend_health_handler))
        .route(
            "/dbservice/health",
            web::get().to(db_service_health_handler),
        )
        .route("/metrics", web::get().to(metrics_handler));
}

pub async fn identity_handler() -> HttpResponse {
    HttpResponse::Ok().json(ServiceIdentity::new(Tier::Frontend.identity()))
}
