//! Game HTTP routes.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::{GameId, ValidatedJson};
use crate::services::games as game_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct NewGameRequest {
    pub user_name: String,
    /// `easy`, `normal` or `hard`; anything else plays as normal.
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub guess: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub game_id: i64,
    pub items: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CancelResponse {
    pub message: &'static str,
}

/// POST /api/games
async fn new_game(
    app_state: web::Data<AppState>,
    body: ValidatedJson<NewGameRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let mode = body.mode.as_deref().unwrap_or("normal");
    let view = game_service::new_game(&app_state, &body.user_name, mode).await?;
    Ok(HttpResponse::Created().json(view))
}

/// GET /api/games/{game_id}
async fn get_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = game_service::get_game(&app_state, game_id.0).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// PUT /api/games/{game_id}
///
/// Repeat guesses and guesses on finished games are 200 with an explanatory
/// message; only an empty guess is rejected.
async fn make_move(
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<MoveRequest>,
) -> Result<HttpResponse, AppError> {
    let result = game_service::make_move(&app_state, game_id.0, &body.guess).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// DELETE /api/games/{game_id}
async fn cancel_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let message = game_service::cancel_game(&app_state, game_id.0).await?;
    Ok(HttpResponse::Ok().json(CancelResponse { message }))
}

/// GET /api/games/{game_id}/history
async fn get_game_history(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let items = game_service::get_game_history(&app_state, game_id.0).await?;
    Ok(HttpResponse::Ok().json(HistoryResponse {
        game_id: game_id.0,
        items,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(new_game)))
        .service(
            web::resource("/{game_id}")
                .route(web::get().to(get_game))
                .route(web::put().to(make_move))
                .route(web::delete().to(cancel_game)),
        )
        .service(web::resource("/{game_id}/history").route(web::get().to(get_game_history)));
}
