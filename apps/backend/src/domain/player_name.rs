//! Validated player identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::errors::domain::DomainError;

pub const MAX_PLAYER_NAME_CHARS: usize = 64;

/// A trimmed, NFC-normalized, non-empty player name.
///
/// The same value keys both the in-memory session map and the persisted
/// player record, so two spellings that normalize to the same string are the
/// same player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized: String = raw.trim().nfc().collect();

        if normalized.is_empty() {
            return Err(DomainError::validation("Player name must not be empty"));
        }
        if normalized.chars().count() > MAX_PLAYER_NAME_CHARS {
            return Err(DomainError::validation(format!(
                "Player name must be at most {MAX_PLAYER_NAME_CHARS} characters"
            )));
        }
        if normalized.chars().any(char::is_control) {
            return Err(DomainError::validation(
                "Player name must not contain control characters",
            ));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlayerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PlayerName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}
