use actix_web::HttpResponse;
use metrics::counter;
use tier_domain::model::Envelope;
use tracing::warn;

const FAILED_FLOW_MESSAGE: &str = "Returning default code 500 from BackEnd Service";

/// Always fails, without calling anything downstream.
pub async fn failed_flow_handler() -> HttpResponse {
    warn!("induced failure requested");
    counter!("induced_failures_total").increment(1);
    HttpResponse::InternalServerError().json(Envelope::new(FAILED_FLOW_MESSAGE, 500))
}
