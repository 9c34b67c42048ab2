//! Game orchestration: engine transitions plus their persistence side effects.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{GameSession, PlayerName, SessionTransition};
use crate::engine::{SessionEngine, Submission};
use crate::errors::domain::DomainError;
use crate::repos::PlayerStore;
use crate::services::score_recorder::ScoreRecorder;
use crate::trace_ctx;

#[derive(Clone)]
pub struct GameService {
    engine: Arc<SessionEngine>,
    store: Arc<dyn PlayerStore>,
    recorder: ScoreRecorder,
}

impl GameService {
    pub fn new(
        engine: Arc<SessionEngine>,
        store: Arc<dyn PlayerStore>,
        recorder: ScoreRecorder,
    ) -> Self {
        Self {
            engine,
            store,
            recorder,
        }
    }

    /// Make sure the player exists in the store, then start a fresh round.
    ///
    /// A store failure is logged and the game starts anyway.
    pub async fn start_game(&self, name: &PlayerName) -> GameSession {
        match self.store.ensure_player(name).await {
            Ok(true) => info!(trace_id = %trace_ctx::trace_id(), player = %name, "New player"),
            Ok(false) => {}
            Err(e) => warn!(
                trace_id = %trace_ctx::trace_id(),
                player = %name,
                error = %e,
                "Could not ensure player record; starting game anyway"
            ),
        }

        let session = self.engine.start_session(name);
        debug!(trace_id = %trace_ctx::trace_id(), player = %name, "Game started");
        session
    }

    pub fn session(&self, name: &PlayerName) -> Result<GameSession, DomainError> {
        self.engine.get_session(name)
    }

    /// Check an answer; a round that just ended has its score queued.
    pub fn submit_answer(
        &self,
        name: &PlayerName,
        answer: &str,
    ) -> Result<Submission, DomainError> {
        let submission = self.engine.submit_answer(name, answer)?;

        match submission.transition {
            SessionTransition::Advanced { from, to } => {
                debug!(trace_id = %trace_ctx::trace_id(), player = %name, from, to, "Level up");
            }
            SessionTransition::Terminated { level, final_score } => {
                info!(
                    trace_id = %trace_ctx::trace_id(),
                    player = %name,
                    level,
                    final_score,
                    "Game over"
                );
                self.recorder.enqueue(name.clone(), final_score);
            }
            SessionTransition::Unchanged => {
                debug!(trace_id = %trace_ctx::trace_id(), player = %name, "Answer for finished game ignored");
            }
            SessionTransition::Restarted { .. } => {}
        }

        Ok(submission)
    }

    pub fn play_again(&self, name: &PlayerName) -> GameSession {
        let (session, transition) = self.engine.restart_session(name);
        debug!(trace_id = %trace_ctx::trace_id(), player = %name, ?transition, "Game restarted");
        session
    }

    pub fn recorder(&self) -> &ScoreRecorder {
        &self.recorder
    }
}
