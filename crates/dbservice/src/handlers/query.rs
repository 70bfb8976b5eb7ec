use actix_web::{web, HttpResponse};
use metrics::histogram;
use tier_domain::model::QueryReport;
use tier_domain::ProbeQuery;

use crate::state::AppState;

use super::ApiError;

pub async fn db_query_handler(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    timed_probe(&state, ProbeQuery::Trivial).await
}

pub async fn slow_db_query_handler(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    timed_probe(&state, ProbeQuery::Slow).await
}

async fn timed_probe(state: &AppState, query: ProbeQuery) -> Result<HttpResponse, ApiError> {
    let timing = state.storage().run_probe(query).await?;
    let time_taken = timing.elapsed.as_secs_f64();
    histogram!("db_query_seconds", "query" => query.label()).record(time_taken);

    Ok(HttpResponse::Ok().json(QueryReport {
        time_taken,
        return_code: 200,
    }))
}
