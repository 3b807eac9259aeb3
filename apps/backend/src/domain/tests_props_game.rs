//! Property tests for the guess state machine and mask rendering.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::difficulty::Difficulty;
use crate::domain::game::{GameState, GuessKind};
use crate::domain::render::render_mask;
use crate::domain::test_prelude;

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Normal),
        Just(Difficulty::Hard)
    ]
}

fn guesses() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::char::range('a', 'z'), 0..40)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Revealed positions are exactly those whose char was guessed.
    #[test]
    fn prop_mask_reveals_exactly_guessed(w in word(), picks in prop::collection::vec(any::<prop::sample::Index>(), 0..12)) {
        let chars: Vec<char> = w.chars().collect();
        let guessed: HashSet<char> = picks.iter().map(|i| chars[i.index(chars.len())]).collect();
        let mask = render_mask(&w, &guessed);

        prop_assert_eq!(mask.chars().count(), chars.len());
        for (c, m) in chars.iter().zip(mask.chars()) {
            if guessed.contains(c) {
                prop_assert_eq!(m, *c);
            } else {
                prop_assert_eq!(m, '_');
            }
        }
    }

    /// A second submission of the same letter changes nothing.
    #[test]
    fn prop_repeat_is_idempotent(w in word(), d in difficulty(), seq in guesses(), again in prop::char::range('a', 'z')) {
        let (mut state, _) = GameState::start(d, &w);
        for g in seq {
            if state.submit_guess(&g.to_string()).is_err() {
                break;
            }
        }
        if state.submit_guess(&again.to_string()).is_err() {
            return Ok(());
        }
        let before = state.clone();
        let out = state.submit_guess(&again.to_string()).unwrap();
        prop_assert!(matches!(out.kind, GuessKind::Repeat | GuessKind::AlreadyOver));
        prop_assert_eq!(state, before);
    }

    /// Progress never decreases, and nothing moves once the game is over.
    /// Won iff every target char is in history; Lost iff the limit was reached first.
    #[test]
    fn prop_progress_monotonic_and_frozen(w in word(), d in difficulty(), seq in guesses()) {
        let (mut state, _) = GameState::start(d, &w);
        for g in seq {
            let before = state.clone();
            match state.submit_guess(&g.to_string()) {
                Ok(out) => {
                    prop_assert!(state.attempts_progress >= before.attempts_progress);
                    if before.game_over {
                        prop_assert_eq!(&state, &before);
                    }
                    match out.kind {
                        GuessKind::Won => {
                            prop_assert!(w.chars().all(|c| state.history.contains(c)));
                        }
                        GuessKind::Lost => {
                            prop_assert!(state.attempts_progress >= state.attempts_limit);
                            prop_assert!(!w.chars().all(|c| state.history.contains(c)));
                        }
                        _ => {}
                    }
                    prop_assert_eq!(state.game_over, out.score.is_some() || before.game_over);
                }
                Err(_) => {
                    // Only the stage-table bound can fail here; nothing changed.
                    prop_assert_eq!(&state, &before);
                    break;
                }
            }
        }
    }
}
