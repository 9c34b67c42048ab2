//! Domain layer: pure game logic types and helpers.

pub mod player_name;
pub mod scoring;
pub mod sequence;
pub mod session;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_session;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use player_name::PlayerName;
pub use scoring::ScoringPolicy;
pub use sequence::{RandomSequence, SeededSequence, SequenceGenerator};
pub use session::{GameSession, Outcome, SessionPhase, SessionTransition};
