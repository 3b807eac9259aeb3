use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;
use serde_json::{json, Value};

use crate::common::{seed_user, state_with_word, test_state};
use crate::support::app_builder::create_test_app;

#[actix_web::test]
async fn full_game_over_http() {
    let state = test_state().await;
    let user = seed_user(&state, "http").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .set_json(json!({ "user_name": user, "mode": "hard" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["guess_string"], "___");
    assert_eq!(created["user_name"], user.as_str());
    let game_id = created["game_id"].as_i64().expect("numeric game id");

    let mut last = Value::Null;
    for letter in ["c", "a", "t"] {
        let req = test::TestRequest::put()
            .uri(&format!("/api/games/{game_id}"))
            .set_json(json!({ "guess": letter }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        last = test::read_body_json(resp).await;
    }
    assert_eq!(last["outcome"], "won");
    assert_eq!(last["message"], "You win! Still Alive!");
    assert_eq!(last["game_over"], true);
    assert_eq!(last["history"], json!(["c", "a", "t"]));

    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{game_id}/history"))
        .to_request();
    let history: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        history["items"],
        json!(["Guess c, Result:c__", "Guess a, Result:ca_", "Guess t, Result:cat"])
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/api/games/{game_id}"))
        .to_request();
    let cancel: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(cancel["message"], "Game has been finished.");
}

#[actix_web::test]
async fn repeat_guess_is_200_with_leaked_word() {
    let state = state_with_word("dog").await;
    let user = seed_user(&state, "repeat").await;
    let game_id = backend::services::games::new_game(&state, &user, "easy")
        .await
        .unwrap()
        .game_id;
    let app = create_test_app(state).with_prod_routes().build().await;

    let guess = || {
        test::TestRequest::put()
            .uri(&format!("/api/games/{game_id}"))
            .set_json(json!({ "guess": "Q" }))
            .to_request()
    };

    let first: Value = test::call_and_read_body_json(&app, guess()).await;
    assert_eq!(first["outcome"], "continue");
    assert_eq!(first["guess_string"], "___");
    assert_eq!(first["message"], "Setup Haning String~ then next move");

    let resp = test::call_service(&app, guess()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let second: Value = test::read_body_json(resp).await;
    assert_eq!(second["outcome"], "repeat");
    assert_eq!(second["message"], "Q,has been submit");
    assert_eq!(second["guess_string"], "dog");
    assert_eq!(second["attempts_count"], 1);
}

#[actix_web::test]
async fn empty_guess_is_invalid_guess() {
    let state = test_state().await;
    let user = seed_user(&state, "blank").await;
    let game_id = backend::services::games::new_game(&state, &user, "easy")
        .await
        .unwrap()
        .game_id;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/games/{game_id}"))
        .set_json(json!({ "guess": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        "INVALID_GUESS",
        StatusCode::BAD_REQUEST,
        Some("Please input character!"),
    )
    .await;
}

#[actix_web::test]
async fn malformed_and_unknown_game_ids() {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/api/games/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "INVALID_GAME_ID", StatusCode::BAD_REQUEST, None).await;

    let req = test::TestRequest::get().uri("/api/games/0").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "INVALID_GAME_ID", StatusCode::BAD_REQUEST, None).await;

    let req = test::TestRequest::delete().uri("/api/games/4242").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        "GAME_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("Game not found!"),
    )
    .await;
}

#[actix_web::test]
async fn new_game_for_unknown_user_is_404() {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .set_json(json!({ "user_name": "nobody" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        "USER_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("A User with that name does not exist!"),
    )
    .await;
}

#[actix_web::test]
async fn stage_overflow_renders_config_error() {
    let state = state_with_word("dog").await;
    let user = seed_user(&state, "overflow").await;
    let game_id = backend::services::games::new_game(&state, &user, "easy")
        .await
        .unwrap()
        .game_id;
    for letter in ["a", "b", "c", "e", "f", "h", "i", "j", "k", "l"] {
        backend::services::games::make_move(&state, game_id, letter)
            .await
            .unwrap();
    }
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/games/{game_id}"))
        .set_json(json!({ "guess": "m" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        "CONFIG_ERROR",
        StatusCode::INTERNAL_SERVER_ERROR,
        None,
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{game_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["attempts_count"], 10);
    assert_eq!(body["message"], "Draw Middle Mouth~ ,Time to make a move!");
}
