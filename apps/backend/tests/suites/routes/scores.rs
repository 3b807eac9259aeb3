use actix_web::http::StatusCode;
use actix_web::test;
use backend::services::games as game_service;
use backend_test_support::problem_details::assert_problem_details;
use serde_json::Value;

use crate::common::{seed_user, test_state};
use crate::support::app_builder::create_test_app;

#[actix_web::test]
async fn leaderboard_rankings_and_average() {
    let state = test_state().await;
    let user = seed_user(&state, "frank").await;
    let won = game_service::new_game(&state, &user, "hard").await.unwrap().game_id;
    for letter in ["c", "a", "t"] {
        game_service::make_move(&state, won, letter).await.unwrap();
    }
    game_service::new_game(&state, &user, "easy").await.unwrap();
    backend::services::stats::recompute_average_attempts(&state)
        .await
        .unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/scores/high?limit=1").to_request();
    let high: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(high.as_array().map(Vec::len), Some(1));
    assert_eq!(high[0]["game_id"], won);
    assert_eq!(high[0]["word"], "cat");

    let req = test::TestRequest::get().uri("/api/scores").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::get().uri("/api/rankings").to_request();
    let ranks: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ranks[0]["user_name"], user.as_str());

    let req = test::TestRequest::get()
        .uri("/api/stats/average_attempts")
        .to_request();
    let avg: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(avg["message"], "The average moves remaining is 11.00");
}

#[actix_web::test]
async fn invalid_limit_is_rejected() {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/api/scores/high?limit=0").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "INVALID_LIMIT", StatusCode::BAD_REQUEST, None).await;
}
