use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::services::stats;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

/// Cached sentence; empty until the first recompute has finished.
async fn get_average_attempts(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let message = stats::get_average_attempts(&app_state).await;
    Ok(HttpResponse::Ok().json(MessageResponse { message }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/average_attempts", web::get().to(get_average_attempts));
}
