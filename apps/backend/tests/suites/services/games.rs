use backend::domain::GuessKind;
use backend::error::AppError;
use backend::errors::domain::{ConflictKind, DomainError};
use backend::errors::ErrorCode;
use backend::repos::{games as games_repo, scores as scores_repo};
use backend::services::games as game_service;

use crate::common::{seed_user, state_with_word, test_state};

#[tokio::test]
async fn new_game_applies_preset_and_blank_display() {
    let state = test_state().await;
    let user = seed_user(&state, "alice").await;

    let view = game_service::new_game(&state, &user, "HARD").await.unwrap();

    assert_eq!(
        view.message,
        "Hangman hard mode! Start from man part without face and foot."
    );
    assert_eq!(view.guess_string, "___");
    assert_eq!(view.user_name, user);
    assert_eq!(view.attempts_count, 0);
    assert!(!view.game_over);
    assert!(view.history.is_empty());

    let db = state.db().unwrap();
    let game = games_repo::require_game(db, view.game_id).await.unwrap();
    assert_eq!(game.state.attempts_progress, 2);
    assert_eq!(game.state.attempts_limit, 8);
    assert_eq!(game.state.target_word, "cat");
}

#[tokio::test]
async fn unknown_mode_plays_as_normal() {
    let state = test_state().await;
    let user = seed_user(&state, "bob").await;

    let view = game_service::new_game(&state, &user, "nightmare").await.unwrap();
    assert_eq!(
        view.message,
        "Hangman normal mode! Start from man part with face and foot."
    );

    let game = games_repo::require_game(state.db().unwrap(), view.game_id)
        .await
        .unwrap();
    assert_eq!(game.state.attempts_progress, 2);
    assert_eq!(game.state.attempts_limit, 11);
}

#[tokio::test]
async fn new_game_for_unknown_user_is_not_found() {
    let state = test_state().await;

    let err = game_service::new_game(&state, "nobody", "easy")
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::UserNotFound);
    assert_eq!(err.detail(), "A User with that name does not exist!");
}

#[tokio::test]
async fn winning_cat_on_hard_records_a_score() {
    let state = test_state().await;
    let user = seed_user(&state, "winner").await;
    let game_id = game_service::new_game(&state, &user, "hard")
        .await
        .unwrap()
        .game_id;

    let first = game_service::make_move(&state, game_id, "C").await.unwrap();
    assert_eq!(first.outcome, GuessKind::Continue);
    assert_eq!(first.game.message, "Draw Head~ then next move");
    assert_eq!(first.game.guess_string, "c__");

    game_service::make_move(&state, game_id, "a").await.unwrap();
    let last = game_service::make_move(&state, game_id, "t").await.unwrap();

    assert_eq!(last.outcome, GuessKind::Won);
    assert_eq!(last.game.message, "You win! Still Alive!");
    assert_eq!(last.game.guess_string, "cat");
    assert!(last.game.game_over);
    assert_eq!(last.game.attempts_count, 3);
    assert_eq!(last.game.history, vec!["c", "a", "t"]);

    let score = scores_repo::find_by_game(state.db().unwrap(), game_id)
        .await
        .unwrap()
        .expect("score recorded on win");
    assert!(score.won);
    assert_eq!(score.guess_count, 3);
    assert_eq!(score.guesses_remaining, 6);
    assert!((score.norm_score - 6.0 / 5.5).abs() < 1e-9);
}

#[tokio::test]
async fn six_misses_on_hard_lose_the_game() {
    let state = test_state().await;
    let user = seed_user(&state, "loser").await;
    let game_id = game_service::new_game(&state, &user, "hard")
        .await
        .unwrap()
        .game_id;

    for letter in ["b", "d", "e", "f", "g"] {
        let step = game_service::make_move(&state, game_id, letter).await.unwrap();
        assert_eq!(step.outcome, GuessKind::Continue);
    }
    let last = game_service::make_move(&state, game_id, "h").await.unwrap();

    assert_eq!(last.outcome, GuessKind::Lost);
    assert_eq!(last.game.message, "Draw Left Eye~ Game over!");
    assert_eq!(last.game.guess_string, "cat");

    let score = scores_repo::find_by_game(state.db().unwrap(), game_id)
        .await
        .unwrap()
        .expect("score recorded on loss");
    assert!(!score.won);
    assert_eq!(score.guesses_remaining, 0);
    assert!((score.norm_score - (-3.0 / 5.5)).abs() < 1e-9);

    let after = game_service::make_move(&state, game_id, "c").await.unwrap();
    assert_eq!(after.outcome, GuessKind::AlreadyOver);
    assert_eq!(after.game.message, "Game already over!");
    assert_eq!(after.game.guess_string, "cat");
}

#[tokio::test]
async fn repeat_guess_is_a_no_op_that_shows_the_word() {
    let state = test_state().await;
    let user = seed_user(&state, "repeat").await;
    let game_id = game_service::new_game(&state, &user, "easy")
        .await
        .unwrap()
        .game_id;

    game_service::make_move(&state, game_id, "c").await.unwrap();
    let before = games_repo::require_game(state.db().unwrap(), game_id)
        .await
        .unwrap();

    let repeat = game_service::make_move(&state, game_id, "C").await.unwrap();
    assert_eq!(repeat.outcome, GuessKind::Repeat);
    assert_eq!(repeat.game.message, "C,has been submit");
    assert_eq!(repeat.game.guess_string, "cat");

    let after = games_repo::require_game(state.db().unwrap(), game_id)
        .await
        .unwrap();
    assert_eq!(after.state, before.state);
    assert_eq!(after.lock_version, before.lock_version);
}

#[tokio::test]
async fn empty_guess_is_rejected_without_mutation() {
    let state = test_state().await;
    let user = seed_user(&state, "empty").await;
    let game_id = game_service::new_game(&state, &user, "easy")
        .await
        .unwrap()
        .game_id;

    let err = game_service::make_move(&state, game_id, "").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidGuess);
    assert_eq!(err.detail(), "Please input character!");

    let game = games_repo::require_game(state.db().unwrap(), game_id)
        .await
        .unwrap();
    assert_eq!(game.state.attempts_count, 0);
}

#[tokio::test]
async fn eleventh_miss_on_easy_fails_and_rolls_back() {
    let state = state_with_word("dog").await;
    let user = seed_user(&state, "easy").await;
    let game_id = game_service::new_game(&state, &user, "easy")
        .await
        .unwrap()
        .game_id;

    for letter in ["a", "b", "c", "e", "f", "h", "i", "j", "k", "l"] {
        let step = game_service::make_move(&state, game_id, letter).await.unwrap();
        assert_eq!(step.outcome, GuessKind::Continue);
    }

    let err = game_service::make_move(&state, game_id, "m").await.unwrap_err();
    assert!(matches!(err, AppError::Config { .. }));
    assert_eq!(err.code(), ErrorCode::ConfigError);

    let db = state.db().unwrap();
    let game = games_repo::require_game(db, game_id).await.unwrap();
    assert_eq!(game.state.attempts_progress, 10);
    assert_eq!(game.state.attempts_count, 10);
    assert_eq!(game.state.history.len(), 10);
    assert!(!game.state.game_over);
    assert!(scores_repo::find_by_game(db, game_id).await.unwrap().is_none());
}

#[tokio::test]
async fn ninth_miss_on_normal_fails_and_keeps_game_open() {
    let state = state_with_word("dog").await;
    let user = seed_user(&state, "normal").await;
    let game_id = game_service::new_game(&state, &user, "normal")
        .await
        .unwrap()
        .game_id;

    for letter in ["a", "b", "c", "e", "f", "h", "i", "j"] {
        let step = game_service::make_move(&state, game_id, letter).await.unwrap();
        assert_eq!(step.outcome, GuessKind::Continue);
    }

    let err = game_service::make_move(&state, game_id, "k").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigError);

    let db = state.db().unwrap();
    let game = games_repo::require_game(db, game_id).await.unwrap();
    assert_eq!(game.state.attempts_progress, 10);
    assert_eq!(game.state.history.len(), 8);
    assert!(!game.state.game_over);
    assert!(scores_repo::find_by_game(db, game_id).await.unwrap().is_none());
}

#[tokio::test]
async fn get_game_reports_live_status() {
    let state = test_state().await;
    let user = seed_user(&state, "status").await;
    let game_id = game_service::new_game(&state, &user, "easy")
        .await
        .unwrap()
        .game_id;

    let fresh = game_service::get_game(&state, game_id).await.unwrap();
    assert_eq!(fresh.message, "Setup Gallow~ ,Time to make a move!");
    assert_eq!(fresh.guess_string, "___");

    for letter in ["c", "a", "t"] {
        game_service::make_move(&state, game_id, letter).await.unwrap();
    }
    let done = game_service::get_game(&state, game_id).await.unwrap();
    assert_eq!(done.message, "You Win!");
    assert!(done.game_over);
}

#[tokio::test]
async fn unknown_game_is_not_found_everywhere() {
    let state = test_state().await;

    let cases = [
        game_service::get_game(&state, 999).await.unwrap_err(),
        game_service::make_move(&state, 999, "a").await.unwrap_err(),
        game_service::cancel_game(&state, 999).await.unwrap_err(),
        game_service::get_game_history(&state, 999).await.unwrap_err(),
    ];
    for err in cases {
        assert_eq!(err.code(), ErrorCode::GameNotFound);
        assert_eq!(err.detail(), "Game not found!");
    }
}

#[tokio::test]
async fn cancel_deletes_open_games_only() {
    let state = test_state().await;
    let user = seed_user(&state, "cancel").await;

    let open_id = game_service::new_game(&state, &user, "easy")
        .await
        .unwrap()
        .game_id;
    assert_eq!(
        game_service::cancel_game(&state, open_id).await.unwrap(),
        "Game cancelled."
    );
    let err = game_service::get_game(&state, open_id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotFound);

    let done_id = game_service::new_game(&state, &user, "easy")
        .await
        .unwrap()
        .game_id;
    for letter in ["c", "a", "t"] {
        game_service::make_move(&state, done_id, letter).await.unwrap();
    }
    assert_eq!(
        game_service::cancel_game(&state, done_id).await.unwrap(),
        "Game has been finished."
    );
    assert!(game_service::get_game(&state, done_id).await.is_ok());
}

#[tokio::test]
async fn history_replays_each_step() {
    let state = test_state().await;
    let user = seed_user(&state, "history").await;
    let game_id = game_service::new_game(&state, &user, "normal")
        .await
        .unwrap()
        .game_id;

    for letter in ["t", "z", "c"] {
        game_service::make_move(&state, game_id, letter).await.unwrap();
    }

    let lines = game_service::get_game_history(&state, game_id).await.unwrap();
    assert_eq!(
        lines,
        vec![
            "Guess t, Result:__t",
            "Guess z, Result:__t",
            "Guess c, Result:c_t",
        ]
    );
}

#[tokio::test]
async fn user_games_lists_only_open_games() {
    let state = test_state().await;
    let user = seed_user(&state, "lister").await;

    let open_id = game_service::new_game(&state, &user, "easy")
        .await
        .unwrap()
        .game_id;
    let done_id = game_service::new_game(&state, &user, "easy")
        .await
        .unwrap()
        .game_id;
    for letter in ["c", "a", "t"] {
        game_service::make_move(&state, done_id, letter).await.unwrap();
    }

    let ids = game_service::get_user_games(&state, &user).await.unwrap();
    assert_eq!(ids, vec![open_id]);

    let err = game_service::get_user_games(&state, "ghost").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::UserNotFound);
}

#[tokio::test]
async fn stale_lock_version_is_rejected() {
    let state = test_state().await;
    let user = seed_user(&state, "racer").await;
    let game_id = game_service::new_game(&state, &user, "easy")
        .await
        .unwrap()
        .game_id;

    let db = state.db().unwrap();
    let mut stale = games_repo::require_game(db, game_id).await.unwrap();

    // Another writer gets there first.
    game_service::make_move(&state, game_id, "c").await.unwrap();

    stale.state.submit_guess("z").unwrap();
    let err = games_repo::update_game(db, game_id, stale.lock_version, &stale.state)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::OptimisticLock, _)
    ));

    let current = games_repo::require_game(db, game_id).await.unwrap();
    assert_eq!(current.state.history.letters(), &['c']);
    assert_eq!(current.lock_version, stale.lock_version + 1);

    let err = games_repo::delete_open_game(db, game_id, stale.lock_version)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::OptimisticLock, _)
    ));
}
