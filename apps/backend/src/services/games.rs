//! Game use cases: start, inspect, guess, cancel and replay.
//!
//! Every write runs inside one transaction via `with_txn`; the game row is
//! written back with a compare-and-swap on its lock version.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::{debug, info};

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::{CancelOutcome, Difficulty, GameState, GuessKind};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::games::{self as games_repo, Game};
use crate::repos::scores as scores_repo;
use crate::repos::users as users_repo;
use crate::services::stats;
use crate::state::app_state::AppState;

/// Outbound representation of one game plus the message for the last action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameView {
    pub game_id: i64,
    pub user_name: String,
    pub attempts_count: i32,
    pub game_over: bool,
    pub message: String,
    pub guess_string: String,
    /// Guessed letters in submission order.
    pub history: Vec<String>,
}

impl GameView {
    fn build(game: &Game, user_name: String, message: String, guess_string: String) -> Self {
        Self {
            game_id: game.id,
            user_name,
            attempts_count: game.state.attempts_count,
            game_over: game.state.game_over,
            message,
            guess_string,
            history: game
                .state
                .history
                .letters()
                .iter()
                .map(char::to_string)
                .collect(),
        }
    }
}

/// Result of a guess: the game as it stands afterwards and what kind of step it was.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveResult {
    pub outcome: GuessKind,
    #[serde(flatten)]
    pub game: GameView,
}

async fn owner_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<String, AppError> {
    users_repo::find_by_ids(conn, vec![user_id])
        .await?
        .into_iter()
        .next()
        .map(|u| u.name)
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::User, users_repo::MSG_USER_NOT_FOUND).into()
        })
}

/// Start a game for `user_name`. Unknown difficulty labels fall back to normal.
pub async fn new_game(
    state: &AppState,
    user_name: &str,
    difficulty_label: &str,
) -> Result<GameView, AppError> {
    let difficulty = Difficulty::from_label(difficulty_label);
    let word = state.words.pick()?;
    let user_name = user_name.to_string();

    let view = with_txn(state, |txn| {
        Box::pin(async move {
            let user = users_repo::require_by_name(txn, &user_name).await?;
            let (initial, start_message) = GameState::start(difficulty, &word);
            let game = games_repo::create_game(txn, user.id, &initial).await?;

            info!(
                game_id = game.id,
                user_id = user.id,
                difficulty = ?difficulty,
                attempts_limit = game.state.attempts_limit,
                "Game created"
            );

            let blank = game.state.masked();
            Ok(GameView::build(
                &game,
                user.name,
                start_message.to_string(),
                blank,
            ))
        })
    })
    .await?;

    stats::spawn_recompute(state);
    Ok(view)
}

/// Live status of a game without changing it.
pub async fn get_game(state: &AppState, game_id: i64) -> Result<GameView, AppError> {
    let db = require_db(state)?;
    let game = games_repo::require_game(db, game_id).await?;
    let user_name = owner_name(db, game.user_id).await?;
    let message = game.state.status_message()?;
    let masked = game.state.masked();
    Ok(GameView::build(&game, user_name, message, masked))
}

/// Apply one guess. The game update and, on a terminal step, the score
/// insert share a transaction; a stale lock version aborts both.
pub async fn make_move(state: &AppState, game_id: i64, guess: &str) -> Result<MoveResult, AppError> {
    let guess = guess.to_string();

    let result = with_txn(state, |txn| {
        Box::pin(async move {
            let mut game = games_repo::require_game(txn, game_id).await?;
            let outcome = game.state.submit_guess(&guess)?;

            if outcome.mutated() {
                let updated =
                    games_repo::update_game(txn, game.id, game.lock_version, &game.state).await?;
                if let Some(score) = &outcome.score {
                    let recorded =
                        scores_repo::create_score(txn, updated.user_id, updated.id, score).await?;
                    info!(
                        game_id = updated.id,
                        user_id = updated.user_id,
                        outcome = ?outcome.kind,
                        norm_score = recorded.norm_score,
                        "Game finished"
                    );
                }
                game = updated;
            }

            debug!(
                game_id = game.id,
                outcome = ?outcome.kind,
                attempts_count = game.state.attempts_count,
                attempts_progress = game.state.attempts_progress,
                "Guess processed"
            );

            let user_name = owner_name(txn, game.user_id).await?;
            Ok(MoveResult {
                outcome: outcome.kind,
                game: GameView::build(&game, user_name, outcome.message, outcome.display),
            })
        })
    })
    .await?;

    Ok(result)
}

/// Delete an open game; finished games are kept and reported as such.
pub async fn cancel_game(state: &AppState, game_id: i64) -> Result<&'static str, AppError> {
    with_txn(state, |txn| {
        Box::pin(async move {
            let game = games_repo::require_game(txn, game_id).await?;
            let outcome = game.state.cancel();
            if outcome == CancelOutcome::Cancelled {
                games_repo::delete_open_game(txn, game.id, game.lock_version).await?;
                info!(game_id = game.id, user_id = game.user_id, "Game cancelled");
            }
            Ok(outcome.message())
        })
    })
    .await
}

/// Step narrative: one line per guessed letter with the mask after it.
pub async fn get_game_history(state: &AppState, game_id: i64) -> Result<Vec<String>, AppError> {
    let db = require_db(state)?;
    let game = games_repo::require_game(db, game_id).await?;
    Ok(game.state.step_history())
}

/// Ids of the user's unfinished games.
pub async fn get_user_games(state: &AppState, user_name: &str) -> Result<Vec<i64>, AppError> {
    let db = require_db(state)?;
    let user = users_repo::require_by_name(db, user_name).await?;
    let games = games_repo::list_open_by_user(db, user.id).await?;
    Ok(games.into_iter().map(|g| g.id).collect())
}
