//! Player records and the leaderboard.

use std::sync::Arc;

use tracing::info;

use crate::domain::PlayerName;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::{LeaderboardEntry, PlayerRecord, PlayerStore};
use crate::trace_ctx;

pub const DEFAULT_LEADERBOARD_LIMIT: u32 = 10;
pub const MAX_LEADERBOARD_LIMIT: u32 = 100;

/// Player domain service.
#[derive(Clone)]
pub struct PlayerService {
    store: Arc<dyn PlayerStore>,
}

impl PlayerService {
    pub fn new(store: Arc<dyn PlayerStore>) -> Self {
        Self { store }
    }

    /// Top players, best first. `None` means the default limit.
    pub async fn leaderboard(&self, limit: Option<u32>) -> Result<Vec<LeaderboardEntry>, AppError> {
        let limit = limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT);
        if !(1..=MAX_LEADERBOARD_LIMIT).contains(&limit) {
            return Err(AppError::invalid(
                ErrorCode::InvalidLimit,
                format!("limit must be between 1 and {MAX_LEADERBOARD_LIMIT}, got {limit}"),
            ));
        }
        Ok(self.store.leaderboard(limit).await?)
    }

    pub async fn find_player(&self, name: &PlayerName) -> Result<Option<PlayerRecord>, AppError> {
        Ok(self.store.find_player(name).await?)
    }

    /// Remove a player record. Removing an absent player is not an error.
    pub async fn delete_player(&self, name: &PlayerName) -> Result<bool, AppError> {
        let removed = self.store.delete_player(name).await?;
        info!(
            trace_id = %trace_ctx::trace_id(),
            player = %name,
            removed,
            "Admin player deletion"
        );
        Ok(removed)
    }
}
