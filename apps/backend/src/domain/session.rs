//! Per-player game session state machine.
//!
//! ```text
//! Fresh --start--> Active(1) --correct--> Active(2) --correct--> ... Active(n)
//!                      |                                            |
//!                      +--------------- incorrect ------------------+--> Terminal
//! any --restart--> Active(1)
//! ```
//!
//! Nothing leaves `Terminal` except restart.

use crate::domain::scoring::ScoringPolicy;
use crate::domain::sequence::{answer_matches, SequenceGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Active,
    Terminal { final_score: i64 },
}

/// One player's current round.
///
/// `sequence.len() == level` holds whenever the session is observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    level: u32,
    sequence: Vec<u32>,
    phase: SessionPhase,
}

/// What the player is told after an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Correct recall; the session moved to `level` with a fresh sequence.
    Advanced { level: u32, sequence: Vec<u32> },
    /// Wrong or unparsable answer; the round is over.
    GameOver {
        final_score: i64,
        correct_sequence: Vec<u32>,
    },
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Advanced { .. })
    }
}

/// Edge-triggered transitions, reported alongside each change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTransition {
    Advanced { from: u32, to: u32 },
    Terminated { level: u32, final_score: i64 },
    /// The submission hit an already terminal session.
    Unchanged,
    Restarted { from_level: u32 },
}

impl GameSession {
    pub fn start(generator: &dyn SequenceGenerator) -> Self {
        Self {
            level: 1,
            sequence: generator.generate(1),
            phase: SessionPhase::Active,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn sequence(&self) -> &[u32] {
        &self.sequence
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, SessionPhase::Terminal { .. })
    }

    pub fn final_score(&self) -> Option<i64> {
        match self.phase {
            SessionPhase::Terminal { final_score } => Some(final_score),
            SessionPhase::Active => None,
        }
    }

    /// Check `input` against the current sequence and advance or terminate.
    ///
    /// A terminal session is left untouched and replays its game-over outcome.
    pub fn submit(
        &mut self,
        input: &str,
        scoring: ScoringPolicy,
        generator: &dyn SequenceGenerator,
    ) -> (Outcome, SessionTransition) {
        if let SessionPhase::Terminal { final_score } = self.phase {
            return (
                Outcome::GameOver {
                    final_score,
                    correct_sequence: self.sequence.clone(),
                },
                SessionTransition::Unchanged,
            );
        }

        if answer_matches(&self.sequence, input) {
            let from = self.level;
            self.level += 1;
            self.sequence = generator.generate(self.level as usize);
            (
                Outcome::Advanced {
                    level: self.level,
                    sequence: self.sequence.clone(),
                },
                SessionTransition::Advanced {
                    from,
                    to: self.level,
                },
            )
        } else {
            let final_score = scoring.final_score(self.level);
            self.phase = SessionPhase::Terminal { final_score };
            (
                Outcome::GameOver {
                    final_score,
                    correct_sequence: self.sequence.clone(),
                },
                SessionTransition::Terminated {
                    level: self.level,
                    final_score,
                },
            )
        }
    }

    /// Reset to `Active(1)` from any state, discarding the old sequence.
    pub fn restart(&mut self, generator: &dyn SequenceGenerator) -> SessionTransition {
        let from_level = self.level;
        *self = Self::start(generator);
        SessionTransition::Restarted { from_level }
    }
}
