//! Sequence generation and answer parsing.

use std::fmt;

use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Smallest value that can appear in a sequence.
pub const MIN_VALUE: u32 = 0;
/// Largest value that can appear in a sequence (inclusive).
pub const MAX_VALUE: u32 = 100;

/// Source of the numbers a player has to remember.
///
/// Each element is an independent uniform draw from `MIN_VALUE..=MAX_VALUE`;
/// repeats are allowed.
pub trait SequenceGenerator: Send + Sync + fmt::Debug {
    fn generate(&self, len: usize) -> Vec<u32>;
}

/// Thread-local OS-seeded randomness. Used in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSequence;

impl SequenceGenerator for RandomSequence {
    fn generate(&self, len: usize) -> Vec<u32> {
        let mut rng = rand::rng();
        (0..len)
            .map(|_| rng.random_range(MIN_VALUE..=MAX_VALUE))
            .collect()
    }
}

/// Reproducible ChaCha8 stream for replays and tests.
pub struct SeededSequence {
    seed: u64,
    rng: Mutex<ChaCha8Rng>,
}

impl SeededSequence {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl fmt::Debug for SeededSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededSequence")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl SequenceGenerator for SeededSequence {
    fn generate(&self, len: usize) -> Vec<u32> {
        let mut rng = self.rng.lock();
        (0..len)
            .map(|_| rng.random_range(MIN_VALUE..=MAX_VALUE))
            .collect()
    }
}

/// Parse a whitespace-separated answer into integers.
///
/// Returns `None` if any token is not an integer; callers treat that exactly
/// like a wrong answer.
pub fn parse_answer(input: &str) -> Option<Vec<i64>> {
    input
        .split_whitespace()
        .map(|token| token.parse::<i64>().ok())
        .collect()
}

/// Order and length both count.
pub fn answer_matches(expected: &[u32], input: &str) -> bool {
    match parse_answer(input) {
        Some(answer) => {
            answer.len() == expected.len()
                && answer
                    .iter()
                    .zip(expected)
                    .all(|(given, want)| *given == i64::from(*want))
        }
        None => false,
    }
}

/// Render a sequence the way players type it back.
pub fn format_sequence(sequence: &[u32]) -> String {
    sequence
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
