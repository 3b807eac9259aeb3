use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;
use backend_test_support::unique_helpers::unique_name;
use serde_json::{json, Value};

use crate::common::{seed_user, test_state};
use crate::support::app_builder::create_test_app;

#[actix_web::test]
async fn create_then_duplicate_user() {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await;
    let name = unique_name("dana");

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "user_name": name, "email": "dana@example.test" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], format!("User {name} created!"));

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "user_name": name }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        "USER_NAME_TAKEN",
        StatusCode::CONFLICT,
        Some("A User with that name already exists!"),
    )
    .await;
}

#[actix_web::test]
async fn malformed_body_is_bad_request() {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"user_name": 5}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, Some("wrong types")).await;
}

#[actix_web::test]
async fn user_games_and_scores_endpoints() {
    let state = test_state().await;
    let user = seed_user(&state, "eve").await;
    let game_id = backend::services::games::new_game(&state, &user, "normal")
        .await
        .unwrap()
        .game_id;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{user}/games"))
        .to_request();
    let games: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(games["game_ids"], json!([game_id]));

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{user}/scores"))
        .to_request();
    let scores: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(scores, json!([]));

    let req = test::TestRequest::get()
        .uri("/api/users/ghost/scores")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "USER_NOT_FOUND", StatusCode::NOT_FOUND, None).await;
}
