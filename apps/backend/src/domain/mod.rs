//! Domain layer: pure hangman rules, no IO.

pub mod difficulty;
pub mod game;
pub mod history;
pub mod render;
pub mod scoring;
pub mod stages;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_game;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use difficulty::{Difficulty, DifficultyPreset};
pub use game::{CancelOutcome, GameState, GuessKind, GuessOutcome};
pub use history::GuessHistory;
pub use render::{render_mask, render_step_history};
pub use scoring::{normalized_score, ScoreOutcome};
pub use stages::{stage_label, STAGE_LABELS};
