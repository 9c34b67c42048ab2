//! Object-safe seam over the player repository.
//!
//! Services hold an `Arc<dyn PlayerStore>` so the game keeps working when no
//! database is configured and so tests can inject failing stores.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::db::txn::with_txn;
use crate::domain::PlayerName;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::players::{self, LeaderboardEntry, PlayerRecord};

#[async_trait]
pub trait PlayerStore: Send + Sync {
    async fn ensure_player(&self, name: &PlayerName) -> Result<bool, DomainError>;

    /// Atomically raise the player's best score; creates the player if needed.
    async fn record_score(&self, name: &PlayerName, score: i64) -> Result<bool, DomainError>;

    async fn leaderboard(&self, limit: u32) -> Result<Vec<LeaderboardEntry>, DomainError>;

    async fn delete_player(&self, name: &PlayerName) -> Result<bool, DomainError>;

    async fn find_player(&self, name: &PlayerName) -> Result<Option<PlayerRecord>, DomainError>;
}

/// SeaORM-backed store.
#[derive(Debug, Clone)]
pub struct SeaPlayerStore {
    db: DatabaseConnection,
}

impl SeaPlayerStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlayerStore for SeaPlayerStore {
    async fn ensure_player(&self, name: &PlayerName) -> Result<bool, DomainError> {
        players::ensure_player(&self.db, name).await
    }

    async fn record_score(&self, name: &PlayerName, score: i64) -> Result<bool, DomainError> {
        let name = name.clone();
        with_txn(&self.db, move |txn| {
            Box::pin(async move { players::record_score(txn, &name, score).await })
        })
        .await
    }

    async fn leaderboard(&self, limit: u32) -> Result<Vec<LeaderboardEntry>, DomainError> {
        players::leaderboard(&self.db, limit).await
    }

    async fn delete_player(&self, name: &PlayerName) -> Result<bool, DomainError> {
        players::delete_player(&self.db, name).await
    }

    async fn find_player(&self, name: &PlayerName) -> Result<Option<PlayerRecord>, DomainError> {
        players::find_player(&self.db, name).await
    }
}

/// Store used when the service runs without a database. Every call reports
/// the store as unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedPlayerStore;

impl DetachedPlayerStore {
    fn unavailable<T>() -> Result<T, DomainError> {
        Err(DomainError::infra(
            InfraErrorKind::PersistenceUnavailable,
            "No database configured",
        ))
    }
}

#[async_trait]
impl PlayerStore for DetachedPlayerStore {
    async fn ensure_player(&self, _name: &PlayerName) -> Result<bool, DomainError> {
        Self::unavailable()
    }

    async fn record_score(&self, _name: &PlayerName, _score: i64) -> Result<bool, DomainError> {
        Self::unavailable()
    }

    async fn leaderboard(&self, _limit: u32) -> Result<Vec<LeaderboardEntry>, DomainError> {
        Self::unavailable()
    }

    async fn delete_player(&self, _name: &PlayerName) -> Result<bool, DomainError> {
        Self::unavailable()
    }

    async fn find_player(&self, _name: &PlayerName) -> Result<Option<PlayerRecord>, DomainError> {
        Self::unavailable()
    }
}
