//! DTOs for players_sea adapter.

use time::OffsetDateTime;

/// DTO for inserting a player row that may already exist.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub name: String,
    pub at: OffsetDateTime,
}

impl PlayerCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            at: OffsetDateTime::now_utc(),
        }
    }
}

/// DTO for a candidate best score.
#[derive(Debug, Clone)]
pub struct ScoreUpdate {
    pub name: String,
    pub score: i64,
    pub at: OffsetDateTime,
}

impl ScoreUpdate {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
            at: OffsetDateTime::now_utc(),
        }
    }
}
