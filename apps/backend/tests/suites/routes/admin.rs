use actix_web::http::StatusCode;
use actix_web::test;
use backend::auth::claims::Role;
use backend::domain::PlayerName;
use backend::repos::{PlayerStore, SeaPlayerStore};
use backend::state::security_config::SecurityConfig;
use serde_json::Value;

use crate::common::assert_problem_details_structure;
use crate::support::app_builder::create_test_app;
use crate::support::auth::{bearer_header, mint_expired_token};
use crate::support::test_state::{build_test_state, TEST_JWT_SECRET};

fn security() -> SecurityConfig {
    SecurityConfig::new(TEST_JWT_SECRET)
}

#[actix_web::test]
async fn delete_requires_a_token() {
    let app = create_test_app(build_test_state().await.unwrap()).await;

    let req = test::TestRequest::delete()
        .uri("/api/admin/players/alice")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 401, "UNAUTHORIZED_MISSING_BEARER").await;
}

#[actix_web::test]
async fn delete_rejects_bad_tokens() {
    let app = create_test_app(build_test_state().await.unwrap()).await;

    let forged = bearer_header("ops", Role::Admin, &SecurityConfig::new(b"other".to_vec()));
    let req = test::TestRequest::delete()
        .uri("/api/admin/players/alice")
        .insert_header(("Authorization", forged))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 401, "UNAUTHORIZED_INVALID_JWT").await;

    let expired = format!("Bearer {}", mint_expired_token("ops", Role::Admin, &security()));
    let req = test::TestRequest::delete()
        .uri("/api/admin/players/alice")
        .insert_header(("Authorization", expired))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 401, "UNAUTHORIZED_EXPIRED_JWT").await;
}

#[actix_web::test]
async fn delete_rejects_non_admin_role() {
    let app = create_test_app(build_test_state().await.unwrap()).await;

    let req = test::TestRequest::delete()
        .uri("/api/admin/players/alice")
        .insert_header(("Authorization", bearer_header("alice", Role::Player, &security())))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 403, "INSUFFICIENT_ROLE").await;
}

#[actix_web::test]
async fn admin_can_inspect_and_delete_players() {
    let state = build_test_state().await.unwrap();
    let store = SeaPlayerStore::new(state.db().unwrap().clone());
    let alice = PlayerName::parse("alice").unwrap();
    store.record_score(&alice, 6).await.unwrap();
    let app = create_test_app(state).await;
    let admin = bearer_header("ops", Role::Admin, &security());

    let req = test::TestRequest::get()
        .uri("/api/admin/players/alice")
        .insert_header(("Authorization", admin.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "alice");
    assert_eq!(body["best_score"], 6);
    assert!(body["last_played"].as_str().is_some());

    // deleting twice is fine
    for _ in 0..2 {
        let req = test::TestRequest::delete()
            .uri("/api/admin/players/alice")
            .insert_header(("Authorization", admin.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    let req = test::TestRequest::get()
        .uri("/api/admin/players/alice")
        .insert_header(("Authorization", admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 404, "PLAYER_NOT_FOUND").await;
}

#[actix_web::test]
async fn admin_paths_decode_player_names() {
    let state = build_test_state().await.unwrap();
    let store = SeaPlayerStore::new(state.db().unwrap().clone());
    let slashed = PlayerName::parse("a/b").unwrap();
    store.record_score(&slashed, 3).await.unwrap();
    let app = create_test_app(state).await;
    let admin = bearer_header("ops", Role::Admin, &security());

    let req = test::TestRequest::get()
        .uri("/api/admin/players/a%2Fb")
        .insert_header(("Authorization", admin.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "a/b");

    let req = test::TestRequest::delete()
        .uri("/api/admin/players/a%2Fb")
        .insert_header(("Authorization", admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(store.find_player(&slashed).await.unwrap().is_none());
}
