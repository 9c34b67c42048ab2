use actix_web::test;
use backend::domain::PlayerName;
use backend::repos::PlayerStore;
use backend::repos::SeaPlayerStore;
use serde_json::Value;

use crate::common::assert_problem_details_structure;
use crate::support::app_builder::create_test_app;
use crate::support::test_state::{build_detached_state, build_test_state};

#[actix_web::test]
async fn leaderboard_ranks_players() {
    let state = build_test_state().await.unwrap();
    let store = SeaPlayerStore::new(state.db().unwrap().clone());
    for i in 0..12u32 {
        let name = PlayerName::parse(&format!("p{i:02}")).unwrap();
        store.record_score(&name, i64::from(i % 6)).await.unwrap();
    }
    let app = create_test_app(state).await;

    let req = test::TestRequest::get().uri("/api/leaderboard").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let rows = body.as_array().expect("array body");
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[0]["name"], "p05");
    assert_eq!(rows[0]["best_score"], 5);
    // tie on 5 broken by name
    assert_eq!(rows[1]["name"], "p11");
    assert_eq!(rows[9]["rank"], 10);

    let req = test::TestRequest::get()
        .uri("/api/leaderboard?limit=3")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn bad_limits_are_rejected() {
    let app = create_test_app(build_test_state().await.unwrap()).await;

    for limit in ["0", "101", "-3", "ten"] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/leaderboard?limit={limit}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_structure(resp, 400, "INVALID_LIMIT").await;
    }
}

#[actix_web::test]
async fn leaderboard_without_database_is_503() {
    let app = create_test_app(build_detached_state().await.unwrap()).await;

    let req = test::TestRequest::get().uri("/api/leaderboard").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 503, "DB_UNAVAILABLE").await;
}
