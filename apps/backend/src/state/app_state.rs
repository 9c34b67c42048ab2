use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::config::game::GameConfig;
use crate::engine::SessionEngine;
use crate::services::game::GameService;
use crate::services::players::PlayerService;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (absent when running without persistence)
    db: Option<DatabaseConnection>,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
    pub config: GameConfig,
    pub engine: Arc<SessionEngine>,
    pub games: GameService,
    pub players: PlayerService,
}

impl AppState {
    pub fn new(
        db: Option<DatabaseConnection>,
        security: SecurityConfig,
        config: GameConfig,
        engine: Arc<SessionEngine>,
        games: GameService,
        players: PlayerService,
    ) -> Self {
        Self {
            db,
            security,
            config,
            engine,
            games,
            players,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
