//! Deterministic generators and proptest strategies for domain tests.

use proptest::prelude::*;

use crate::domain::sequence::{SequenceGenerator, MAX_VALUE};

/// Produces `1, 2, 3, ...`, so every sequence of length >= 2 has distinct,
/// ordered values.
#[derive(Debug, Clone, Copy)]
pub struct StepSequence;

impl SequenceGenerator for StepSequence {
    fn generate(&self, len: usize) -> Vec<u32> {
        (1..=len as u32).map(|v| v % (MAX_VALUE + 1)).collect()
    }
}

/// Ways of corrupting a correct answer. Every variant yields an answer that
/// differs from the original in value, order, or length.
#[derive(Debug, Clone)]
pub enum Corruption {
    /// Replace one element with a different in-range value.
    ChangeValue { index: usize, delta: u32 },
    /// Drop the last element.
    Truncate,
    /// Append an extra element.
    Extend { value: u32 },
    /// Swap two positions holding different values.
    Swap { index: usize },
    /// Replace one token with text.
    NonNumeric { index: usize },
}

pub fn corruption() -> impl Strategy<Value = Corruption> {
    prop_oneof![
        (any::<usize>(), 1u32..=MAX_VALUE)
            .prop_map(|(index, delta)| Corruption::ChangeValue { index, delta }),
        Just(Corruption::Truncate),
        (0u32..=MAX_VALUE).prop_map(|value| Corruption::Extend { value }),
        any::<usize>().prop_map(|index| Corruption::Swap { index }),
        any::<usize>().prop_map(|index| Corruption::NonNumeric { index }),
    ]
}

/// Apply a corruption; returns `None` only for a swap that cannot change the
/// sequence (all values equal).
pub fn corrupt(sequence: &[u32], corruption: &Corruption) -> Option<Vec<String>> {
    let mut tokens: Vec<String> = sequence.iter().map(u32::to_string).collect();
    let len = sequence.len();
    match corruption {
        Corruption::ChangeValue { index, delta } => {
            let i = index % len;
            let changed = (sequence[i] + delta) % (MAX_VALUE + 1);
            tokens[i] = changed.to_string();
        }
        Corruption::Truncate => {
            tokens.pop();
        }
        Corruption::Extend { value } => tokens.push(value.to_string()),
        Corruption::Swap { index } => {
            let i = index % len;
            // first position after i (cyclically) holding a different value
            let j = (1..len)
                .map(|step| (i + step) % len)
                .find(|&j| sequence[j] != sequence[i])?;
            tokens.swap(i, j);
        }
        Corruption::NonNumeric { index } => {
            tokens[index % len] = "x".to_string();
        }
    }
    Some(tokens)
}
