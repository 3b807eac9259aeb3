/// Final numbers recorded for a finished game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreOutcome {
    pub won: bool,
    pub guess_count: i32,
    pub guesses_remaining: i32,
    pub norm_score: f64,
}

/// Remaining attempts minus wasted guesses, scaled by the mean of word
/// length and limit. Unclamped; higher is better.
pub fn normalized_score(
    attempts_limit: i32,
    attempts_progress: i32,
    attempts_count: i32,
    word_len: usize,
) -> f64 {
    let word_len = word_len as f64;
    let remaining = f64::from(attempts_limit - attempts_progress);
    let raw = remaining - (f64::from(attempts_count) - word_len);
    raw / ((word_len + f64::from(attempts_limit)) / 2.0)
}

impl ScoreOutcome {
    pub fn finish(
        won: bool,
        attempts_limit: i32,
        attempts_progress: i32,
        attempts_count: i32,
        word_len: usize,
    ) -> Self {
        Self {
            won,
            guess_count: attempts_count,
            guesses_remaining: attempts_limit - attempts_progress,
            norm_score: normalized_score(attempts_limit, attempts_progress, attempts_count, word_len),
        }
    }
}
