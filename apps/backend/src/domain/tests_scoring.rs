use crate::domain::scoring::{normalized_score, ScoreOutcome};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn lost_hard_game_is_negative() {
    // ((8-8) - (5-3)) / ((3+8)/2)
    let score = normalized_score(8, 8, 5, 3);
    assert!(approx(score, -2.0 / 5.5));
    assert!((score - (-0.3636)).abs() < 1e-4);
}

#[test]
fn denominator_does_not_truncate() {
    // (3+8)/2 must be 5.5, not 5
    let score = normalized_score(8, 5, 3, 3);
    assert!(approx(score, 3.0 / 5.5));
}

#[test]
fn perfect_game_scores_remaining_over_mean() {
    // word of 4 distinct letters guessed with no misses on normal
    let score = normalized_score(11, 2, 4, 4);
    assert!(approx(score, 9.0 / 7.5));
}

#[test]
fn outcome_records_remaining_attempts() {
    let outcome = ScoreOutcome::finish(true, 8, 4, 5, 3);
    assert!(outcome.won);
    assert_eq!(outcome.guess_count, 5);
    assert_eq!(outcome.guesses_remaining, 4);
    assert!(approx(outcome.norm_score, (4.0 - 2.0) / 5.5));
}
