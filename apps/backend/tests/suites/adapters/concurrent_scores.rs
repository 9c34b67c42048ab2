//! Concurrent score writes for one player against a SQLite file.

use backend::config::db::{DbKind, RuntimeEnv};
use backend::domain::PlayerName;
use backend::infra::db::bootstrap_db;
use backend::repos::{PlayerStore, SeaPlayerStore};
use futures_util::future::join_all;
use serial_test::serial;
use tempfile::TempDir;

async fn file_store() -> (TempDir, SeaPlayerStore) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("scores.db");
    std::env::set_var("SQLITE_DB_PATH", path.to_str().unwrap());
    let db = bootstrap_db(RuntimeEnv::Test, DbKind::SqliteFile)
        .await
        .unwrap();
    std::env::remove_var("SQLITE_DB_PATH");
    (dir, SeaPlayerStore::new(db))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[serial]
async fn concurrent_writes_keep_the_maximum() {
    let (_dir, store) = file_store().await;
    let alice = PlayerName::parse("alice").unwrap();

    // 1..=24 in a scrambled but fixed order
    let scores: Vec<i64> = (0..24).map(|i| (i * 7) % 24 + 1).collect();
    let results = join_all(scores.iter().map(|&s| {
        let store = store.clone();
        let alice = alice.clone();
        async move { store.record_score(&alice, s).await }
    }))
    .await;

    let improved: Vec<(i64, bool)> = scores
        .iter()
        .zip(results)
        .map(|(&s, r)| (s, r.expect("score write should succeed")))
        .collect();

    let record = store.find_player(&alice).await.unwrap().unwrap();
    assert_eq!(record.best_score, 24);

    // the top score beats whatever ran before it
    assert!(improved.iter().any(|&(s, up)| s == 24 && up));

    // improvements form a strictly increasing chain in commit order, so the
    // number of improvements can never exceed the number of distinct scores
    // and at least the first committed write improved on zero
    let count = improved.iter().filter(|(_, up)| *up).count();
    assert!((1..=scores.len()).contains(&count));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[serial]
async fn equal_concurrent_writes_improve_once() {
    let (_dir, store) = file_store().await;
    let bob = PlayerName::parse("bob").unwrap();

    let results = join_all((0..16).map(|_| {
        let store = store.clone();
        let bob = bob.clone();
        async move { store.record_score(&bob, 10).await }
    }))
    .await;

    let improvements = results
        .into_iter()
        .map(|r| r.expect("score write should succeed"))
        .filter(|up| *up)
        .count();
    assert_eq!(improvements, 1);
    assert_eq!(
        store.find_player(&bob).await.unwrap().unwrap().best_score,
        10
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[serial]
async fn concurrent_ensure_player_inserts_once() {
    let (_dir, store) = file_store().await;
    let carol = PlayerName::parse("carol").unwrap();

    let results = join_all((0..16).map(|_| {
        let store = store.clone();
        let carol = carol.clone();
        async move { store.ensure_player(&carol).await }
    }))
    .await;

    let inserted = results
        .into_iter()
        .map(|r| r.expect("ensure should succeed"))
        .filter(|created| *created)
        .count();
    assert_eq!(inserted, 1);
}
