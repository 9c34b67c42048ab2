use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::json;

use crate::support::app_builder::create_test_app;
use crate::support::test_state::build_test_state;

fn header(resp: &ServiceResponse, name: &str) -> String {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_else(|| panic!("{name} header should be present"))
        .to_string()
}

#[actix_web::test]
async fn every_response_carries_a_request_id() {
    let app = create_test_app(build_test_state().await.unwrap()).await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .set_json(json!({"player_name": "alice"}))
        .to_request();
    let first = test::call_service(&app, req).await;
    let first_id = header(&first, "x-request-id");

    let req = test::TestRequest::get().uri("/health").to_request();
    let second = test::call_service(&app, req).await;
    let second_id = header(&second, "x-request-id");

    assert!(!first_id.is_empty());
    assert_ne!(first_id, second_id);
}

#[actix_web::test]
async fn error_trace_id_matches_request_id() {
    let app = create_test_app(build_test_state().await.unwrap()).await;

    let req = test::TestRequest::get().uri("/api/games/nobody").to_request();
    let resp = test::call_service(&app, req).await;

    let trace_id = header(&resp, "x-trace-id");
    assert_ne!(trace_id, "unknown");
    assert_eq!(trace_id, header(&resp, "x-request-id"));
}
