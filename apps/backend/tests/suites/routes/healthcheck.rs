use actix_web::http::StatusCode;
use actix_web::test;
use backend::infra::state::build_state;
use serde_json::Value;

use crate::common::test_state;
use crate::support::app_builder::create_test_app;

#[actix_web::test]
async fn health_reports_db_and_migration() {
    let app = create_test_app(test_state().await)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], "m20251018_000001_init");
    assert!(body.get("db_error").is_none());
}

#[actix_web::test]
async fn health_without_db_still_answers() {
    let state = build_state().build().await.expect("state without db");
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["db"], "error");
    assert_eq!(body["db_error"], "Database not configured");
}
