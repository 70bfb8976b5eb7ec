use std::fmt::Display;

use actix_web::{body::BoxBody, HttpRequest, HttpResponse, Responder};
use metrics::counter;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

use tier_domain::model::{Envelope, ErrorBody};

use crate::response::json_with_status;

/// Outbound client every forwarding endpoint goes through.
///
/// Certificate validation is disabled: peers in the demo topology are
/// addressed by service name and commonly run with self-signed certificates.
/// No timeout is configured beyond the transport defaults and nothing is
/// retried.
#[derive(Clone)]
pub struct RelayClient {
    http: reqwest::Client,
}

impl RelayClient {
    pub fn new() -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self { http })
    }

    /// Raw client, for callers that need to see transport errors themselves.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// GETs `destination` and translates the outcome.
    pub async fn forward(&self, destination: &str) -> RelayOutcome {
        self.dispatch(destination, destination.to_string()).await
    }

    /// GETs `destination/param`. Error bodies still name the bare destination.
    pub async fn forward_with_param(&self, destination: &str, param: impl Display) -> RelayOutcome {
        self.dispatch(destination, format!("{destination}/{param}"))
            .await
    }

    async fn dispatch(&self, destination: &str, url: String) -> RelayOutcome {
        info!(destination_api = %destination, url = %url, "forwarding request");

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(err) => return unreachable(destination, err),
        };

        let status = response.status().as_u16();
        if status != 200 {
            let text = response.text().await.unwrap_or_default();
            warn!(
                destination_api = %destination,
                status,
                body = %text,
                "upstream returned non-200"
            );
            counter!("relay_requests_total", "outcome" => "rejected").increment(1);
            return RelayOutcome::Rejected {
                destination: destination.to_string(),
                status,
            };
        }

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => return unreachable(destination, err),
        };

        counter!("relay_requests_total", "outcome" => "delivered").increment(1);
        RelayOutcome::Delivered {
            status,
            body: decode_body(&bytes),
        }
    }
}

fn unreachable(destination: &str, err: reqwest::Error) -> RelayOutcome {
    error!(destination_api = %destination, error = %err, "internal service error");
    counter!("relay_requests_total", "outcome" => "unreachable").increment(1);
    RelayOutcome::Unreachable
}

/// Upstream bodies are normally JSON; anything else is relayed as a string.
fn decode_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

/// Result of one forwarded call.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayOutcome {
    Delivered { status: u16, body: Value },
    Rejected { destination: String, status: u16 },
    Unreachable,
}

impl RelayOutcome {
    /// Status code this hop answers with.
    pub fn status(&self) -> u16 {
        match self {
            RelayOutcome::Delivered { status, .. } => *status,
            RelayOutcome::Rejected { status, .. } => *status,
            RelayOutcome::Unreachable => 500,
        }
    }

    /// Renders the standard envelope.
    pub fn into_response(self) -> HttpResponse {
        match self {
            RelayOutcome::Delivered { status, body } => {
                json_with_status(i64::from(status), &Envelope::new(body, i64::from(status)))
            }
            other => other.into_error_response(),
        }
    }

    /// Relays a successful upstream body as-is instead of wrapping it.
    pub fn into_passthrough(self) -> HttpResponse {
        match self {
            RelayOutcome::Delivered { status, body } => json_with_status(i64::from(status), &body),
            other => other.into_error_response(),
        }
    }

    fn into_error_response(self) -> HttpResponse {
        match self {
            RelayOutcome::Rejected {
                destination,
                status,
            } => json_with_status(
                i64::from(status),
                &ErrorBody::upstream(&destination, status),
            ),
            _ => json_with_status(500, &ErrorBody::internal()),
        }
    }
}

impl Responder for RelayOutcome {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        self.into_response()
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{unreachable_base_url, StubRoute, StubUpstream};
    use actix_web::body::to_bytes;
    use serde_json::json;

    async fn upstream() -> StubUpstream {
        StubUpstream::spawn(vec![
            StubRoute::json("/roundtrip", 200, json!({"response": "ok", "ReturnCode": 200})),
            StubRoute::json("/broken", 503, json!({"detail": "down"})),
            StubRoute::text("/plain", 200, "hello"),
        ])
        .await
    }

    async fn body_json(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn delivered_bodies_are_wrapped() {
        let upstream = upstream().await;
        let client = RelayClient::new().unwrap();
        let outcome = client.forward(&upstream.url("/roundtrip")).await;
        assert_eq!(outcome.status(), 200);

        let response = outcome.into_response();
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(
            body_json(response).await,
            json!({"response": {"response": "ok", "ReturnCode": 200}, "ReturnCode": 200})
        );
    }

    #[actix_web::test]
    async fn non_200_keeps_code_and_names_destination() {
        let upstream = upstream().await;
        let destination = upstream.url("/broken");
        let outcome = RelayClient::new().unwrap().forward(&destination).await;

        let response = outcome.into_response();
        assert_eq!(response.status().as_u16(), 503);
        assert_eq!(
            body_json(response).await,
            json!({"Error": format!("From: {destination} ReturnCode: 503")})
        );
    }

    #[actix_web::test]
    async fn unreachable_peer_is_internal_error() {
        let destination = format!("{}/roundtrip", unreachable_base_url());
        let outcome = RelayClient::new().unwrap().forward(&destination).await;
        assert_eq!(outcome, RelayOutcome::Unreachable);

        let response = outcome.into_response();
        assert_eq!(response.status().as_u16(), 500);
        assert_eq!(
            body_json(response).await,
            json!({"Error": "Internal Service Error"})
        );
    }

    #[actix_web::test]
    async fn param_is_appended_but_not_reported() {
        let upstream = StubUpstream::spawn(vec![StubRoute::json(
            "/sleep/6",
            500,
            json!({"detail": "boom"}),
        )])
        .await;
        let destination = upstream.url("/sleep");
        let outcome = RelayClient::new()
            .unwrap()
            .forward_with_param(&destination, 6)
            .await;

        assert_eq!(upstream.hits(), vec!["/sleep/6".to_string()]);
        assert_eq!(
            outcome,
            RelayOutcome::Rejected {
                destination,
                status: 500
            }
        );
    }

    #[actix_web::test]
    async fn passthrough_does_not_wrap() {
        let upstream = StubUpstream::spawn(vec![StubRoute::json(
            "/health",
            200,
            json!({"Status": "OK", "uptime": 1.0}),
        )])
        .await;
        let outcome = RelayClient::new()
            .unwrap()
            .forward(&upstream.url("/health"))
            .await;

        let response = outcome.into_passthrough();
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(
            body_json(response).await,
            json!({"Status": "OK", "uptime": 1.0})
        );
    }

    #[actix_web::test]
    async fn non_json_bodies_become_strings() {
        let upstream = upstream().await;
        let outcome = RelayClient::new()
            .unwrap()
            .forward(&upstream.url("/plain"))
            .await;
        assert_eq!(
            outcome,
            RelayOutcome::Delivered {
                status: 200,
                body: json!("hello")
            }
        );
    }
}
