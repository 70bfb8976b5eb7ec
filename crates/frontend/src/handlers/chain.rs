//! Endpoints that walk the call chain through the backend.

use actix_web::web;
use tier_relay::{pause, RelayOutcome};

use crate::state::AppState;

pub async fn round_trip_handler(state: web::Data<AppState>) -> RelayOutcome {
    state.relay().forward(&state.backend_url("/roundtrip")).await
}

pub async fn failed_flow_handler(state: web::Data<AppState>) -> RelayOutcome {
    state.relay().forward(&state.backend_url("/failedflow")).await
}

pub async fn slow_db_handler(state: web::Data<AppState>) -> RelayOutcome {
    state.relay().forward(&state.backend_url("/slowdb")).await
}

/// Sleeps locally, then asks the backend to sleep for the total this tier
/// slept.
pub async fn sleep_handler(state: web::Data<AppState>, path: web::Path<i64>) -> RelayOutcome {
    let total = pause(state.sleep_policy(), path.into_inner()).await;
    state
        .relay()
        .forward_with_param(&state.backend_url("/sleep"), total)
        .await
}
