use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// How a finished round is turned into a score.
///
/// `completed` is the number of levels cleared before the wrong answer,
/// i.e. `level - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// `completed * (completed + 1) / 2`
    #[default]
    Triangular,
    /// `completed`
    Linear,
}

impl ScoringPolicy {
    pub fn final_score(self, level: u32) -> i64 {
        let completed = i64::from(level.saturating_sub(1));
        match self {
            ScoringPolicy::Triangular => triangular(completed),
            ScoringPolicy::Linear => completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoringPolicy::Triangular => "triangular",
            ScoringPolicy::Linear => "linear",
        }
    }
}

pub fn triangular(k: i64) -> i64 {
    k * (k + 1) / 2
}

impl FromStr for ScoringPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "triangular" => Ok(ScoringPolicy::Triangular),
            "linear" => Ok(ScoringPolicy::Linear),
            other => Err(DomainError::validation(format!(
                "Unknown scoring policy '{other}' (expected triangular or linear)"
            ))),
        }
    }
}
