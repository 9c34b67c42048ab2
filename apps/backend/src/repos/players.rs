//! Player repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::players_sea as players_adapter;
use crate::adapters::players_sea::{PlayerCreate, ScoreUpdate};
use crate::domain::PlayerName;
use crate::errors::domain::DomainError;

/// Player domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    pub best_score: i64,
    pub last_played: OffsetDateTime,
    pub created_at: OffsetDateTime,
}

/// One leaderboard row. `rank` is the 1-based position in the ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub best_score: i64,
}

/// Create the player with a zero best score if absent. Returns true on insert.
pub async fn ensure_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &PlayerName,
) -> Result<bool, DomainError> {
    let inserted = players_adapter::insert_if_absent(conn, PlayerCreate::new(name.as_str())).await?;
    Ok(inserted)
}

/// Insert-if-absent then conditional raise. Run inside a transaction so both
/// statements see the same row.
///
/// Returns true if the stored best score went up.
pub async fn record_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &PlayerName,
    score: i64,
) -> Result<bool, DomainError> {
    if score < 0 {
        return Err(DomainError::validation(format!(
            "score must be non-negative, got {score}"
        )));
    }

    players_adapter::insert_if_absent(conn, PlayerCreate::new(name.as_str())).await?;
    let improved =
        players_adapter::raise_best_score(conn, ScoreUpdate::new(name.as_str(), score)).await?;
    Ok(improved)
}

pub async fn find_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &PlayerName,
) -> Result<Option<PlayerRecord>, DomainError> {
    let player = players_adapter::find_by_name(conn, name.as_str()).await?;
    Ok(player.map(PlayerRecord::from))
}

pub async fn leaderboard<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: u32,
) -> Result<Vec<LeaderboardEntry>, DomainError> {
    let rows = players_adapter::top_by_best_score(conn, u64::from(limit)).await?;
    Ok(rows
        .into_iter()
        .zip(1u32..)
        .map(|(row, rank)| LeaderboardEntry {
            rank,
            name: row.name,
            best_score: row.best_score,
        })
        .collect())
}

/// Idempotent; returns true if a row was removed.
pub async fn delete_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &PlayerName,
) -> Result<bool, DomainError> {
    let removed = players_adapter::delete_by_name(conn, name.as_str()).await?;
    Ok(removed > 0)
}

// Conversions between SeaORM models and domain models

impl From<crate::entities::players::Model> for PlayerRecord {
    fn from(model: crate::entities::players::Model) -> Self {
        Self {
            name: model.name,
            best_score: model.best_score,
            last_played: model.last_played,
            created_at: model.created_at,
        }
    }
}
