//! DTOs for scores_sea adapter.

#[derive(Debug, Clone)]
pub struct ScoreCreate {
    pub user_id: i64,
    pub game_id: i64,
    pub won: bool,
    pub guess_count: i32,
    pub guesses_remaining: i32,
    pub norm_score: f64,
}
