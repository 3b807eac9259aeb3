use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::{games as game_service, scores as score_service, users as user_service};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub user_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct UserGamesResponse {
    pub game_ids: Vec<i64>,
}

async fn create_user(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let db = require_db(&app_state)?;
    let (_, message) = user_service::create_user(db, &body.user_name, body.email.as_deref()).await?;
    Ok(HttpResponse::Created().json(MessageResponse { message }))
}

async fn get_user_games(
    app_state: web::Data<AppState>,
    user_name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let game_ids = game_service::get_user_games(&app_state, &user_name).await?;
    Ok(HttpResponse::Ok().json(UserGamesResponse { game_ids }))
}

async fn get_user_scores(
    app_state: web::Data<AppState>,
    user_name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let scores = score_service::get_user_scores(&app_state, &user_name).await?;
    Ok(HttpResponse::Ok().json(scores))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_user)))
        .service(web::resource("/{user_name}/games").route(web::get().to(get_user_games)))
        .service(web::resource("/{user_name}/scores").route(web::get().to(get_user_scores)));
}
