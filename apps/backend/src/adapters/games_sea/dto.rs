//! DTOs for games_sea adapter.

/// New game row; counters come from the difficulty preset.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub user_id: i64,
    pub target_word: String,
    pub attempts_progress: i32,
    pub attempts_limit: i32,
}

/// Post-guess counters, written only if `expected_lock_version` still matches.
#[derive(Debug, Clone)]
pub struct GameProgressUpdate {
    pub id: i64,
    pub attempts_count: i32,
    pub attempts_progress: i32,
    pub game_over: bool,
    pub history: String,
    pub expected_lock_version: i32,
}
