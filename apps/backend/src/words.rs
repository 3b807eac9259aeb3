//! Secret word selection.

use std::path::Path;

use rand::seq::IndexedRandom;

use crate::errors::domain::DomainError;

pub const EMBEDDED_WORDS: &str = include_str!("resources/words.txt");

/// Source of secret words for new games.
pub trait WordSource: Send + Sync {
    /// One lowercase candidate word.
    fn pick(&self) -> Result<String, DomainError>;
}

/// Fixed, non-empty list of lowercase alphabetic words; picks uniformly.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parse newline-separated words. Lines are trimmed and lowercased; blank
    /// and non-alphabetic lines are skipped. An empty result is a config error.
    pub fn from_text(data: &str) -> Result<Self, DomainError> {
        let words: Vec<String> = data
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()))
            .collect();
        Self::from_words(words)
    }

    pub fn from_words<I, S>(words: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(|w| w.into().to_lowercase()).collect();
        if words.is_empty() {
            return Err(DomainError::config("word list is empty"));
        }
        Ok(Self { words })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            DomainError::config(format!("cannot read word list {}: {e}", path.display()))
        })?;
        Self::from_text(&data)
    }

    pub fn embedded() -> Result<Self, DomainError> {
        Self::from_text(EMBEDDED_WORDS)
    }

    /// `HANGMAN_WORDS_FILE` when set, else the embedded list.
    pub fn from_env() -> Result<Self, DomainError> {
        match std::env::var("HANGMAN_WORDS_FILE") {
            Ok(path) if !path.trim().is_empty() => Self::load(path.trim()),
            _ => Self::embedded(),
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.words.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[cfg(test)]
    fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl WordSource for WordList {
    fn pick(&self) -> Result<String, DomainError> {
        self.words
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| DomainError::config("word list is empty"))
    }
}
