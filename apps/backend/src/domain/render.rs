//! Masked word display and step-by-step replay.

use std::collections::HashSet;

pub const MASK_CHAR: char = '_';

/// Reveal every position of `target` whose char is in `guessed`; mask the rest.
pub fn render_mask(target: &str, guessed: &HashSet<char>) -> String {
    target
        .chars()
        .map(|c| if guessed.contains(&c) { c } else { MASK_CHAR })
        .collect()
}

/// One line per guess, showing the mask right after that guess.
pub fn render_step_history(target: &str, letters: &[char]) -> Vec<String> {
    let mut guessed = HashSet::with_capacity(letters.len());
    letters
        .iter()
        .map(|&letter| {
            guessed.insert(letter);
            format!("Guess {letter}, Result:{}", render_mask(target, &guessed))
        })
        .collect()
}
