use std::collections::HashMap;

use actix_web::{
    dev::ServiceResponse,
    http::StatusCode,
    test::{self, TestRequest},
    web, App,
};
use serde_json::{json, Value};
use tier_domain::services::ProcessClock;
use tier_domain::{Tier, TierConfig};
use tier_relay::test_util::{unreachable_base_url, StubRoute, StubUpstream};
use tier_relay::RelayClient;

use crate::handlers::configure;
use crate::state::AppState;

fn state_with(pairs: &[(&str, &str)]) -> AppState {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let config = TierConfig::from_lookup(Tier::Backend, |key| env.get(key).cloned())
        .expect("config loads");
    AppState::new(
        config,
        RelayClient::new().expect("client builds"),
        ProcessClock::start(),
    )
}

async fn get(state: AppState, uri: &str) -> ServiceResponse {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;
    test::call_service(&app, TestRequest::get().uri(uri).to_request()).await
}

async fn json_body(resp: ServiceResponse) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("json body")
}

#[actix_web::test]
async fn root_identifies_the_backend() {
    let resp = get(state_with(&[]), "/").await;
    assert_eq!(json_body(resp).await, json!({"Microservice": "BackEnd"}));
}

#[actix_web::test]
async fn failed_flow_never_calls_downstream() {
    let db = StubUpstream::spawn(vec![]).await;
    let state = state_with(&[("_DB_SERVICE", db.base_url())]);

    let resp = get(state, "/failedflow").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(resp).await,
        json!({"response": "Returning default code 500 from BackEnd Service", "ReturnCode": 500})
    );
    assert!(db.hits().is_empty());
}

#[actix_web::test]
async fn roundtrip_wraps_db_acknowledgement() {
    let ack = json!({"response": "Returning 200 from DB Service", "ReturnCode": 200});
    let db = StubUpstream::spawn(vec![StubRoute::json("/roundtrip", 200, ack.clone())]).await;
    let state = state_with(&[("_DB_SERVICE", db.base_url())]);

    let resp = get(state, "/roundtrip").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        json!({"response": ack, "ReturnCode": 200})
    );
}

#[actix_web::test]
async fn slowdb_targets_slowdbquery() {
    let timing = json!({"time_taken": 0.25, "ReturnCode": 200});
    let db = StubUpstream::spawn(vec![StubRoute::json("/slowdbquery", 200, timing.clone())]).await;
    let state = state_with(&[("_DB_SERVICE", db.base_url())]);

    let resp = get(state, "/slowdb").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        json!({"response": timing, "ReturnCode": 200})
    );
    assert_eq!(db.hits(), vec!["/slowdbquery".to_string()]);
}

#[actix_web::test]
async fn dbquery_relays_upstream_failure_code() {
    let db = StubUpstream::spawn(vec![StubRoute::json("/dbquery", 502, json!({}))]).await;
    let state = state_with(&[("_DB_SERVICE", db.base_url())]);

    let resp = get(state, "/dbquery").await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        json_body(resp).await,
        json!({"Error": format!("From: {}/dbquery ReturnCode: 502", db.base_url())})
    );
}

#[actix_web::test]
async fn roundtrip_with_db_down_is_internal_error() {
    let db = unreachable_base_url();
    let resp = get(state_with(&[("_DB_SERVICE", db.as_str())]), "/roundtrip").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(resp).await,
        json!({"Error": "Internal Service Error"})
    );
}

#[actix_web::test]
async fn sleep_adds_its_increment_before_forwarding() {
    let db = StubUpstream::spawn(vec![StubRoute::json(
        "/sleep/1",
        200,
        json!({"response": "Responding back from DB Service after sleep: 4 seconds", "ReturnCode": 200}),
    )])
    .await;
    let state = state_with(&[
        ("_DB_SERVICE", db.base_url()),
        ("_DEFAULT_SLEEP", "0"),
        ("_INCREMENTAL_SLEEP", "1"),
    ]);

    let resp = get(state, "/sleep/0").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(db.hits(), vec!["/sleep/1".to_string()]);
    assert_eq!(json_body(resp).await["ReturnCode"], 200);
}

#[actix_web::test]
async fn negative_sleep_falls_back_to_default() {
    let db = StubUpstream::spawn(vec![StubRoute::json("/sleep/0", 200, json!({}))]).await;
    let state = state_with(&[
        ("_DB_SERVICE", db.base_url()),
        ("_DEFAULT_SLEEP", "0"),
        ("_INCREMENTAL_SLEEP", "0"),
    ]);

    let resp = get(state, "/sleep/-7").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(db.hits(), vec!["/sleep/0".to_string()]);
}

#[actix_web::test]
async fn health_reports_ok() {
    let resp = get(state_with(&[]), "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["Status"], "OK");
    assert!(body["uptime"].is_number());
}
