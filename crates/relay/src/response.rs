use actix_web::{http::StatusCode, web::Data, HttpResponse};
use serde::Serialize;
use tracing::warn;

use tier_domain::services::TelemetryGuard;

/// Maps an arbitrary integer onto an HTTP status. Codes outside what the
/// framework can put on the wire (100..=999) become 500.
pub fn status_or_internal(code: i64) -> StatusCode {
    u16::try_from(code)
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or_else(|| {
            warn!(code, "status code cannot be represented, answering 500");
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// JSON response with an explicit status code.
pub fn json_with_status<T: Serialize>(code: i64, body: &T) -> HttpResponse {
    HttpResponse::build(status_or_internal(code)).json(body)
}

pub async fn metrics_handler(telemetry: Data<TelemetryGuard>) -> HttpResponse {
    let body = telemetry.render_metrics();
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn representable_codes_pass_through() {
        assert_eq!(status_or_internal(200), StatusCode::OK);
        assert_eq!(status_or_internal(418).as_u16(), 418);
        assert_eq!(status_or_internal(999).as_u16(), 999);
    }

    #[test]
    fn unrepresentable_codes_become_500() {
        for code in [-1, 0, 42, 1000, i64::MAX] {
            assert_eq!(status_or_internal(code), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
