use actix_web::{web, HttpResponse};
use tier_domain::model::Envelope;
use tier_relay::pause;

use crate::state::AppState;

pub async fn sleep_handler(state: web::Data<AppState>, path: web::Path<i64>) -> HttpResponse {
    let total = pause(state.sleep_policy(), path.into_inner()).await;
    HttpResponse::Ok().json(Envelope::new(
        format!("Responding back from DB Service after sleep: {total} seconds"),
        200,
    ))
}
