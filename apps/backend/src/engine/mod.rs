//! In-memory registry of live game sessions.
//!
//! Sessions are sharded across a `DashMap` so different players never
//! contend. All mutation of one player's session happens under that entry's
//! write guard; callers get owned snapshots back and never hold a guard
//! across an `.await`.

mod sweeper;

use std::sync::Arc;
use std::time::Duration;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::time::Instant;

use crate::domain::{
    GameSession, Outcome, PlayerName, ScoringPolicy, SequenceGenerator, SessionTransition,
};
use crate::errors::domain::DomainError;

pub use sweeper::spawn_idle_sweeper;

#[derive(Debug)]
struct SessionSlot {
    session: GameSession,
    touched: Instant,
}

impl SessionSlot {
    fn new(session: GameSession) -> Self {
        Self {
            session,
            touched: Instant::now(),
        }
    }

    fn touch(&mut self) {
        self.touched = Instant::now();
    }
}

/// Result of one answer submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub outcome: Outcome,
    pub transition: SessionTransition,
}

impl Submission {
    /// Final score to persist, present only on the submission that ended the round.
    pub fn score_to_record(&self) -> Option<i64> {
        match self.transition {
            SessionTransition::Terminated { final_score, .. } => Some(final_score),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct SessionEngine {
    sessions: DashMap<PlayerName, SessionSlot>,
    generator: Arc<dyn SequenceGenerator>,
    scoring: ScoringPolicy,
}

impl SessionEngine {
    pub fn new(generator: Arc<dyn SequenceGenerator>, scoring: ScoringPolicy) -> Self {
        Self {
            sessions: DashMap::new(),
            generator,
            scoring,
        }
    }

    pub fn scoring(&self) -> ScoringPolicy {
        self.scoring
    }

    /// Begin a fresh round at level 1, replacing any previous session.
    pub fn start_session(&self, name: &PlayerName) -> GameSession {
        let session = GameSession::start(self.generator.as_ref());
        self.sessions
            .insert(name.clone(), SessionSlot::new(session.clone()));
        session
    }

    pub fn get_session(&self, name: &PlayerName) -> Result<GameSession, DomainError> {
        let mut slot = self
            .sessions
            .get_mut(name)
            .ok_or_else(|| DomainError::session_not_found(name))?;
        slot.touch();
        Ok(slot.session.clone())
    }

    /// Check an answer. Wrong and unparsable answers are outcomes, not errors.
    pub fn submit_answer(
        &self,
        name: &PlayerName,
        input: &str,
    ) -> Result<Submission, DomainError> {
        let mut slot = self
            .sessions
            .get_mut(name)
            .ok_or_else(|| DomainError::session_not_found(name))?;
        let (outcome, transition) =
            slot.session
                .submit(input, self.scoring, self.generator.as_ref());
        slot.touch();
        Ok(Submission {
            outcome,
            transition,
        })
    }

    /// Move the player back to level 1. Works whether or not a session exists.
    pub fn restart_session(&self, name: &PlayerName) -> (GameSession, SessionTransition) {
        match self.sessions.entry(name.clone()) {
            Entry::Occupied(mut occupied) => {
                let slot = occupied.get_mut();
                let transition = slot.session.restart(self.generator.as_ref());
                slot.touch();
                (slot.session.clone(), transition)
            }
            Entry::Vacant(vacant) => {
                let session = GameSession::start(self.generator.as_ref());
                vacant.insert(SessionSlot::new(session.clone()));
                (session, SessionTransition::Restarted { from_level: 0 })
            }
        }
    }

    /// Drop sessions that have not been touched within `ttl`.
    pub fn evict_idle(&self, ttl: Duration) -> usize {
        match Instant::now().checked_sub(ttl) {
            Some(cutoff) => self.evict_touched_before(cutoff),
            None => 0,
        }
    }

    fn evict_touched_before(&self, cutoff: Instant) -> usize {
        let mut evicted = 0;
        self.sessions.retain(|_, slot| {
            let keep = slot.touched >= cutoff;
            if !keep {
                evicted += 1;
            }
            keep
        });
        evicted
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }
}
