use actix_web::web;
use tier_relay::{pause, RelayOutcome};

use crate::state::AppState;

pub async fn round_trip_handler(state: web::Data<AppState>) -> RelayOutcome {
    state.relay().forward(&state.db_service_url("/roundtrip")).await
}

pub async fn db_query_handler(state: web::Data<AppState>) -> RelayOutcome {
    state.relay().forward(&state.db_service_url("/dbquery")).await
}

pub async fn slow_db_handler(state: web::Data<AppState>) -> RelayOutcome {
    state
        .relay()
        .forward(&state.db_service_url("/slowdbquery"))
        .await
}

pub async fn sleep_handler(state: web::Data<AppState>, path: web::Path<i64>) -> RelayOutcome {
    let total = pause(state.sleep_policy(), path.into_inner()).await;
    state
        .relay()
        .forward_with_param(&state.db_service_url("/sleep"), total)
        .await
}
