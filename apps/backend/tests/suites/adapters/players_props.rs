//! Property: the stored best score is the running maximum of every
//! recorded score, whatever order they arrive in.

use backend::config::db::{DbKind, RuntimeEnv};
use backend::domain::PlayerName;
use backend::infra::db::bootstrap_db;
use backend::repos::{PlayerStore, SeaPlayerStore};
use proptest::prelude::*;

use crate::common::proptest_prelude::proptest_prelude_config;

fn run<F: std::future::Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime")
        .block_on(fut)
}

proptest! {
    #![proptest_config(proptest_prelude_config())]

    #[test]
    fn prop_best_score_is_running_max(scores in prop::collection::vec(0i64..500, 1..12)) {
        let (improvements, stored) = run(async {
            let db = bootstrap_db(RuntimeEnv::Test, DbKind::SqliteMemory).await.unwrap();
            let store = SeaPlayerStore::new(db);
            let alice = PlayerName::parse("alice").unwrap();

            let mut improvements = Vec::with_capacity(scores.len());
            for &score in &scores {
                improvements.push(store.record_score(&alice, score).await.unwrap());
            }
            let stored = store.find_player(&alice).await.unwrap().unwrap().best_score;
            (improvements, stored)
        });

        prop_assert_eq!(stored, *scores.iter().max().unwrap());

        // an improvement is reported exactly when the score beats everything before it
        let mut running = 0i64;
        for (score, improved) in scores.iter().zip(improvements) {
            prop_assert_eq!(improved, *score > running);
            running = running.max(*score);
        }
    }
}
