use std::sync::Arc;

use crate::config::db::{DbKind, RuntimeEnv};
use crate::config::game::GameConfig;
use crate::domain::{RandomSequence, SequenceGenerator};
use crate::engine::SessionEngine;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::repos::{DetachedPlayerStore, PlayerStore, SeaPlayerStore};
use crate::services::game::GameService;
use crate::services::players::PlayerService;
use crate::services::score_recorder::ScoreRecorder;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
///
/// Without `with_db`, the state has no database and uses a store that reports
/// itself unavailable; games still run. `with_player_store` overrides the
/// store regardless of the database.
pub struct StateBuilder {
    security_config: SecurityConfig,
    env: RuntimeEnv,
    db_kind: Option<DbKind>,
    game_config: GameConfig,
    player_store: Option<Arc<dyn PlayerStore>>,
    generator: Option<Arc<dyn SequenceGenerator>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            env: RuntimeEnv::Prod,
            db_kind: None,
            game_config: GameConfig::default(),
            player_store: None,
            generator: None,
        }
    }

    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub fn with_game_config(mut self, game_config: GameConfig) -> Self {
        self.game_config = game_config;
        self
    }

    pub fn with_player_store(mut self, store: Arc<dyn PlayerStore>) -> Self {
        self.player_store = Some(store);
        self
    }

    pub fn with_generator(mut self, generator: Arc<dyn SequenceGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Must run inside a tokio runtime; spawns the score recorder task.
    pub async fn build(self) -> Result<AppState, AppError> {
        let db = match self.db_kind {
            // single entrypoint: connect + migrate
            Some(kind) => Some(bootstrap_db(self.env, kind).await?),
            None => None,
        };

        let store: Arc<dyn PlayerStore> = match (self.player_store, &db) {
            (Some(store), _) => store,
            (None, Some(conn)) => Arc::new(SeaPlayerStore::new(conn.clone())),
            (None, None) => Arc::new(DetachedPlayerStore),
        };

        let generator: Arc<dyn SequenceGenerator> = match self.generator {
            Some(generator) => generator,
            None => Arc::new(RandomSequence),
        };
        let engine = Arc::new(SessionEngine::new(generator, self.game_config.scoring));
        let recorder = ScoreRecorder::spawn(Arc::clone(&store), self.game_config.score_retry);
        let games = GameService::new(Arc::clone(&engine), Arc::clone(&store), recorder);
        let players = PlayerService::new(store);

        Ok(AppState::new(
            db,
            self.security_config,
            self.game_config,
            engine,
            games,
            players,
        ))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
