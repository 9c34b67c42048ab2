use backend::config::db::{DbKind, RuntimeEnv};
use backend::domain::PlayerName;
use backend::errors::domain::{DomainError, InfraErrorKind};
use backend::infra::db::bootstrap_db;
use backend::repos::{players, DetachedPlayerStore, PlayerStore, SeaPlayerStore};
use backend_test_support::unique_helpers::unique_player_name;
use sea_orm::DatabaseConnection;

async fn fresh_db() -> DatabaseConnection {
    bootstrap_db(RuntimeEnv::Test, DbKind::SqliteMemory)
        .await
        .expect("in-memory database should bootstrap")
}

fn name(raw: &str) -> PlayerName {
    PlayerName::parse(raw).expect("valid player name")
}

#[tokio::test]
async fn ensure_player_is_idempotent() {
    let db = fresh_db().await;
    let alice = name(&unique_player_name("alice"));

    assert!(players::ensure_player(&db, &alice).await.unwrap());
    assert!(!players::ensure_player(&db, &alice).await.unwrap());

    let record = players::find_player(&db, &alice).await.unwrap().unwrap();
    assert_eq!(record.name, alice.as_str());
    assert_eq!(record.best_score, 0);
}

#[tokio::test]
async fn record_score_creates_missing_player() {
    let db = fresh_db().await;
    let store = SeaPlayerStore::new(db.clone());
    let bob = name(&unique_player_name("bob"));

    assert!(store.record_score(&bob, 3).await.unwrap());

    let record = store.find_player(&bob).await.unwrap().unwrap();
    assert_eq!(record.best_score, 3);
}

#[tokio::test]
async fn best_score_only_moves_up() {
    let db = fresh_db().await;
    let store = SeaPlayerStore::new(db);
    let alice = name("alice");

    assert!(store.record_score(&alice, 6).await.unwrap());
    let first = store.find_player(&alice).await.unwrap().unwrap();

    // lower and equal scores leave the record alone
    assert!(!store.record_score(&alice, 3).await.unwrap());
    assert!(!store.record_score(&alice, 6).await.unwrap());
    let unchanged = store.find_player(&alice).await.unwrap().unwrap();
    assert_eq!(unchanged.best_score, 6);
    assert_eq!(unchanged.last_played, first.last_played);

    assert!(store.record_score(&alice, 10).await.unwrap());
    let raised = store.find_player(&alice).await.unwrap().unwrap();
    assert_eq!(raised.best_score, 10);
    assert!(raised.last_played >= first.last_played);
    assert_eq!(raised.created_at, first.created_at);
}

#[tokio::test]
async fn negative_score_is_rejected() {
    let db = fresh_db().await;
    let store = SeaPlayerStore::new(db);

    let err = store.record_score(&name("carol"), -1).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
    assert!(store.find_player(&name("carol")).await.unwrap().is_none());
}

#[tokio::test]
async fn leaderboard_orders_by_score_then_name() {
    let db = fresh_db().await;
    let store = SeaPlayerStore::new(db);

    for (player, score) in [("dave", 3), ("alice", 10), ("carol", 6), ("bob", 10), ("erin", 0)] {
        store.record_score(&name(player), score).await.unwrap();
    }

    let board = store.leaderboard(10).await.unwrap();
    let rows: Vec<(u32, &str, i64)> = board
        .iter()
        .map(|e| (e.rank, e.name.as_str(), e.best_score))
        .collect();
    assert_eq!(
        rows,
        vec![
            (1, "alice", 10),
            (2, "bob", 10),
            (3, "carol", 6),
            (4, "dave", 3),
            (5, "erin", 0),
        ]
    );

    let top_two = store.leaderboard(2).await.unwrap();
    assert_eq!(top_two.len(), 2);
    assert_eq!(top_two[1].name, "bob");
}

#[tokio::test]
async fn leaderboard_on_empty_store_is_empty() {
    let db = fresh_db().await;
    let board = players::leaderboard(&db, 10).await.unwrap();
    assert!(board.is_empty());
}

#[tokio::test]
async fn delete_player_is_idempotent() {
    let db = fresh_db().await;
    let store = SeaPlayerStore::new(db);
    let alice = name("alice");

    store.record_score(&alice, 6).await.unwrap();
    assert!(store.delete_player(&alice).await.unwrap());
    assert!(!store.delete_player(&alice).await.unwrap());
    assert!(store.find_player(&alice).await.unwrap().is_none());
    assert!(store.leaderboard(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn detached_store_reports_unavailable() {
    let store = DetachedPlayerStore;
    let err = store.record_score(&name("alice"), 1).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Infra(InfraErrorKind::PersistenceUnavailable, _)
    ));
    assert!(err.is_transient());
    assert!(store.leaderboard(10).await.is_err());
}
