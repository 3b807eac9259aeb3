//! Guess-processing state machine for a single hangman game.
//!
//! All new values are computed before any field is written, so a failed
//! transition (empty guess, missing stage label) leaves the game untouched.

use serde::Serialize;

use crate::domain::difficulty::Difficulty;
use crate::domain::history::GuessHistory;
use crate::domain::render::{render_mask, render_step_history};
use crate::domain::scoring::ScoreOutcome;
use crate::domain::stages::stage_label;
use crate::errors::domain::{DomainError, ValidationKind};

pub const MSG_ALREADY_OVER: &str = "Game already over!";
pub const MSG_WON: &str = "You win! Still Alive!";
pub const MSG_EMPTY_GUESS: &str = "Please input character!";
pub const MSG_CANCELLED: &str = "Game cancelled.";
pub const MSG_ALREADY_FINISHED: &str = "Game has been finished.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub target_word: String,
    pub attempts_count: i32,
    pub attempts_progress: i32,
    pub attempts_limit: i32,
    pub game_over: bool,
    pub history: GuessHistory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessKind {
    /// Game was already finished; nothing changed.
    AlreadyOver,
    /// Letter was guessed before; nothing changed.
    Repeat,
    Continue,
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuessOutcome {
    pub kind: GuessKind,
    pub message: String,
    pub display: String,
    /// Present only on the terminal transition.
    pub score: Option<ScoreOutcome>,
}

impl GuessOutcome {
    /// Whether the game must be written back.
    pub fn mutated(&self) -> bool {
        matches!(self.kind, GuessKind::Continue | GuessKind::Won | GuessKind::Lost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    Cancelled,
    AlreadyFinished,
}

impl CancelOutcome {
    pub fn message(self) -> &'static str {
        match self {
            CancelOutcome::Cancelled => MSG_CANCELLED,
            CancelOutcome::AlreadyFinished => MSG_ALREADY_FINISHED,
        }
    }
}

impl GameState {
    /// Fresh game for `target_word` under `difficulty`; returns the preset's start message too.
    pub fn start(difficulty: Difficulty, target_word: &str) -> (Self, &'static str) {
        let preset = difficulty.preset();
        let state = Self {
            target_word: target_word.to_lowercase(),
            attempts_count: 0,
            attempts_progress: preset.initial_progress,
            attempts_limit: preset.attempts_limit,
            game_over: false,
            history: GuessHistory::new(),
        };
        (state, preset.start_message)
    }

    pub fn masked(&self) -> String {
        render_mask(&self.target_word, self.history.seen())
    }

    pub fn is_solved(&self) -> bool {
        self.masked() == self.target_word
    }

    pub fn step_history(&self) -> Vec<String> {
        render_step_history(&self.target_word, self.history.letters())
    }

    /// Status line for a game that is only being looked at.
    pub fn status_message(&self) -> Result<String, DomainError> {
        if self.game_over {
            let msg = if self.is_solved() { "You Win!" } else { "Game Over!" };
            return Ok(msg.to_string());
        }
        Ok(format!(
            "{} ,Time to make a move!",
            stage_label(self.attempts_progress)?
        ))
    }

    /// Only unfinished games may be cancelled.
    pub fn cancel(&self) -> CancelOutcome {
        if self.game_over {
            CancelOutcome::AlreadyFinished
        } else {
            CancelOutcome::Cancelled
        }
    }

    /// Apply one guess. Only the first character of `raw` counts.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, DomainError> {
        if self.game_over {
            return Ok(GuessOutcome {
                kind: GuessKind::AlreadyOver,
                message: MSG_ALREADY_OVER.to_string(),
                display: self.target_word.clone(),
                score: None,
            });
        }

        let (Some(original), Some(letter)) = (raw.chars().next(), raw.to_lowercase().chars().next())
        else {
            return Err(DomainError::validation(
                ValidationKind::EmptyGuess,
                MSG_EMPTY_GUESS,
            ));
        };

        if self.history.contains(letter) {
            // The display deliberately carries the unmasked word here.
            return Ok(GuessOutcome {
                kind: GuessKind::Repeat,
                message: format!("{original},has been submit"),
                display: self.target_word.clone(),
                score: None,
            });
        }

        let mut history = self.history.clone();
        history.push(letter);
        let attempts_count = self.attempts_count + 1;
        let attempts_progress = if self.target_word.contains(letter) {
            self.attempts_progress
        } else {
            self.attempts_progress + 1
        };
        let display = render_mask(&self.target_word, history.seen());
        let word_len = self.target_word.chars().count();

        let (kind, message, display) = if display == self.target_word {
            (GuessKind::Won, MSG_WON.to_string(), display)
        } else if attempts_progress >= self.attempts_limit {
            (
                GuessKind::Lost,
                format!("{} Game over!", stage_label(attempts_progress)?),
                self.target_word.clone(),
            )
        } else {
            (
                GuessKind::Continue,
                format!("{} then next move", stage_label(attempts_progress)?),
                display,
            )
        };

        let score = match kind {
            GuessKind::Won | GuessKind::Lost => Some(ScoreOutcome::finish(
                kind == GuessKind::Won,
                self.attempts_limit,
                attempts_progress,
                attempts_count,
                word_len,
            )),
            _ => None,
        };

        self.history = history;
        self.attempts_count = attempts_count;
        self.attempts_progress = attempts_progress;
        self.game_over = score.is_some();

        Ok(GuessOutcome {
            kind,
            message,
            display,
            score,
        })
    }
}
