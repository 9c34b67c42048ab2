//! Property tests for the session state machine (pure domain, no I/O).

use proptest::prelude::*;

use crate::domain::scoring::{triangular, ScoringPolicy};
use crate::domain::sequence::{format_sequence, SeededSequence, MAX_VALUE, MIN_VALUE};
use crate::domain::session::{GameSession, Outcome, SessionTransition};
use crate::domain::test_gens::{corrupt, corruption};
use crate::domain::test_prelude;

/// Play `n` correct rounds from a fresh session.
fn advance(session: &mut GameSession, gen: &SeededSequence, n: u32) {
    for _ in 0..n {
        let answer = format_sequence(session.sequence());
        let (outcome, _) = session.submit(&answer, ScoringPolicy::Triangular, gen);
        assert!(outcome.is_correct());
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: after n correct answers the session is at level n + 1 with a
    /// sequence of that length, every value in range.
    #[test]
    fn prop_correct_answers_advance_one_level_each(
        seed in any::<u64>(),
        n in 0u32..40,
    ) {
        let gen = SeededSequence::new(seed);
        let mut session = GameSession::start(&gen);
        advance(&mut session, &gen, n);

        prop_assert_eq!(session.level(), n + 1);
        prop_assert_eq!(session.sequence().len(), (n + 1) as usize);
        prop_assert!(!session.is_game_over());
        for v in session.sequence() {
            prop_assert!((MIN_VALUE..=MAX_VALUE).contains(v));
        }
    }

    /// Property: failing at level k + 1 yields triangular(k), and the outcome
    /// carries the sequence that was expected.
    #[test]
    fn prop_failure_scores_completed_levels(
        seed in any::<u64>(),
        k in 0u32..30,
    ) {
        let gen = SeededSequence::new(seed);
        let mut session = GameSession::start(&gen);
        advance(&mut session, &gen, k);
        let expected = session.sequence().to_vec();

        let (outcome, transition) =
            session.submit("not numbers", ScoringPolicy::Triangular, &gen);

        let score = triangular(i64::from(k));
        prop_assert_eq!(
            outcome,
            Outcome::GameOver { final_score: score, correct_sequence: expected }
        );
        prop_assert_eq!(
            transition,
            SessionTransition::Terminated { level: k + 1, final_score: score }
        );
    }

    /// Property: only the exact sequence is accepted; any change in value,
    /// order or length is wrong.
    #[test]
    fn prop_only_exact_answer_matches(
        seed in any::<u64>(),
        k in 0u32..15,
        how in corruption(),
    ) {
        let gen = SeededSequence::new(seed);
        let mut session = GameSession::start(&gen);
        advance(&mut session, &gen, k);

        let tokens = corrupt(session.sequence(), &how);
        prop_assume!(tokens.is_some());
        let answer = tokens.unwrap_or_default().join(" ");

        let (outcome, _) = session.submit(&answer, ScoringPolicy::Triangular, &gen);
        prop_assert!(!outcome.is_correct(), "accepted corrupted answer {answer:?}");
        prop_assert!(session.is_game_over());
    }

    /// Property: surrounding and repeated whitespace does not matter.
    #[test]
    fn prop_whitespace_is_insignificant(
        seed in any::<u64>(),
        k in 0u32..10,
        pad in "[ \t\n]{1,4}",
    ) {
        let gen = SeededSequence::new(seed);
        let mut session = GameSession::start(&gen);
        advance(&mut session, &gen, k);

        let answer = session
            .sequence()
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(&pad);
        let answer = format!("{pad}{answer}{pad}");

        let (outcome, _) = session.submit(&answer, ScoringPolicy::Triangular, &gen);
        prop_assert!(outcome.is_correct());
    }

    /// Property: restart from any reachable state lands on Active(1).
    #[test]
    fn prop_restart_always_returns_to_level_one(
        seed in any::<u64>(),
        k in 0u32..20,
        terminate in any::<bool>(),
    ) {
        let gen = SeededSequence::new(seed);
        let mut session = GameSession::start(&gen);
        advance(&mut session, &gen, k);
        if terminate {
            session.submit("", ScoringPolicy::Triangular, &gen);
        }

        let transition = session.restart(&gen);

        prop_assert_eq!(transition, SessionTransition::Restarted { from_level: k + 1 });
        prop_assert_eq!(session.level(), 1);
        prop_assert_eq!(session.sequence().len(), 1);
        prop_assert!(!session.is_game_over());
    }

    /// Property: the same seed replays the same game.
    #[test]
    fn prop_seeded_games_are_reproducible(seed in any::<u64>(), k in 0u32..10) {
        let a = SeededSequence::new(seed);
        let b = SeededSequence::new(seed);
        let mut left = GameSession::start(&a);
        let mut right = GameSession::start(&b);
        advance(&mut left, &a, k);
        advance(&mut right, &b, k);
        prop_assert_eq!(left, right);
    }
}
