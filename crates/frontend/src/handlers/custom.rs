use actix_web::{web, HttpResponse};
use tier_domain::model::Envelope;
use tier_relay::json_with_status;

const CUSTOM_CODE_MESSAGE: &str = "Responding back with input HTTP response code";

/// Answers with whatever status the caller asked for. The requested code is
/// always echoed in the body, even when it cannot be used as the status.
pub async fn custom_code_handler(path: web::Path<i64>) -> HttpResponse {
    let code = path.into_inner();
    json_with_status(code, &Envelope::new(CUSTOM_CODE_MESSAGE, code))
}
