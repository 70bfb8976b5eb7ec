use actix_web::{web, HttpResponse};

use crate::state::AppState;

pub async fn frontend_health_handler(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.clock().health_report())
}

pub async fn backend_health_handler(state: web::Data<AppState>) -> HttpResponse {
    state
        .relay()
        .forward(&state.backend_url("/health"))
        .await
        .into_passthrough()
}

pub async fn db_service_health_handler(state: web::Data<AppState>) -> HttpResponse {
    state
        .relay()
        .forward(&state.db_service_url("/health"))
        .await
        .into_passthrough()
}
