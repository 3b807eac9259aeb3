//! Difficulty presets.
//!
//! Easy starts drawing from the empty gallows (stage 0); normal and hard
//! start at stage 2 with the gallows already up.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

/// Initial counters and greeting for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyPreset {
    pub initial_progress: i32,
    pub attempts_limit: i32,
    pub start_message: &'static str,
}

impl Difficulty {
    /// Case-insensitive; anything other than "easy" or "hard" is normal.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Normal,
        }
    }

    pub fn preset(self) -> DifficultyPreset {
        match self {
            Difficulty::Easy => DifficultyPreset {
                initial_progress: 0,
                attempts_limit: 11,
                start_message: "Hangman easy mode! Start form building gallow.",
            },
            Difficulty::Hard => DifficultyPreset {
                initial_progress: 2,
                attempts_limit: 8,
                start_message: "Hangman hard mode! Start from man part without face and foot.",
            },
            Difficulty::Normal => DifficultyPreset {
                initial_progress: 2,
                attempts_limit: 11,
                start_message: "Hangman normal mode! Start from man part with face and foot.",
            },
        }
    }
}
