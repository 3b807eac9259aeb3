use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::services::scores as score_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct HighScoresQuery {
    #[serde(default)]
    pub limit: Option<i64>,
}

async fn get_scores(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let scores = score_service::get_scores(&app_state).await?;
    Ok(HttpResponse::Ok().json(scores))
}

async fn get_high_scores(
    app_state: web::Data<AppState>,
    query: web::Query<HighScoresQuery>,
) -> Result<HttpResponse, AppError> {
    let scores = score_service::get_high_scores(&app_state, query.limit).await?;
    Ok(HttpResponse::Ok().json(scores))
}

async fn get_user_rankings(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let ranks = score_service::get_user_rankings(&app_state).await?;
    Ok(HttpResponse::Ok().json(ranks))
}

/// Mounted under `/api/scores`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(get_scores)))
        .service(web::resource("/high").route(web::get().to(get_high_scores)));
}

/// Mounted under `/api/rankings`.
pub fn configure_rankings(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(get_user_rankings)));
}
