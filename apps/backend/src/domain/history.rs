use std::collections::HashSet;

/// Letters guessed so far: submission order for replay plus a set for lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessHistory {
    letters: Vec<char>,
    seen: HashSet<char>,
}

impl GuessHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from the stored form (one char per letter, in order).
    pub fn from_stored(stored: &str) -> Self {
        let mut history = Self::new();
        for letter in stored.chars() {
            history.push(letter);
        }
        history
    }

    /// Stored form: the letters concatenated in submission order.
    pub fn to_stored(&self) -> String {
        self.letters.iter().collect()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.seen.contains(&letter)
    }

    /// Appends `letter` unless already present. Returns whether it was appended.
    pub fn push(&mut self, letter: char) -> bool {
        if !self.seen.insert(letter) {
            return false;
        }
        self.letters.push(letter);
        true
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn seen(&self) -> &HashSet<char> {
        &self.seen
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
