use std::sync::Arc;
use std::time::Duration;

use backend::config::db::{DbKind, RuntimeEnv};
use backend::config::game::{GameConfig, RetryPolicy};
use backend::domain::SeededSequence;
use backend::infra::state::{build_state, StateBuilder};
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use backend::AppError;

pub const TEST_JWT_SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";

/// Fast retries so failure paths finish quickly.
pub fn fast_retry(attempts: u32) -> RetryPolicy {
    RetryPolicy {
        attempts,
        interval: Duration::from_millis(1),
    }
}

/// Builder for a state backed by a private in-memory SQLite database with a
/// seeded sequence generator.
pub fn test_state_builder(seed: u64) -> StateBuilder {
    build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteMemory)
        .with_security(SecurityConfig::new(TEST_JWT_SECRET))
        .with_generator(Arc::new(SeededSequence::new(seed)))
        .with_game_config(GameConfig {
            score_retry: fast_retry(3),
            ..GameConfig::default()
        })
}

pub async fn build_test_state() -> Result<AppState, AppError> {
    test_state_builder(7).build().await
}

/// No database: the store reports itself unavailable.
pub async fn build_detached_state() -> Result<AppState, AppError> {
    build_state()
        .with_env(RuntimeEnv::Test)
        .with_security(SecurityConfig::new(TEST_JWT_SECRET))
        .with_generator(Arc::new(SeededSequence::new(7)))
        .with_game_config(GameConfig {
            score_retry: fast_retry(1),
            ..GameConfig::default()
        })
        .build()
        .await
}
