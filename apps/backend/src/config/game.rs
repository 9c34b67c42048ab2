//! Game tuning read from the environment at startup.

use std::env;
use std::time::Duration;

use super::parse_var;
use crate::domain::ScoringPolicy;
use crate::error::AppError;

const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_INTERVAL_MS: u64 = 250;

/// Bounded retry for score writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_RETRY_ATTEMPTS,
            interval: Duration::from_millis(DEFAULT_RETRY_INTERVAL_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub scoring: ScoringPolicy,
    /// Evict sessions idle this long; `None` keeps them for the process lifetime.
    pub session_ttl: Option<Duration>,
    pub score_retry: RetryPolicy,
}

impl GameConfig {
    /// Reads `NUMEM_SCORING`, `NUMEM_SESSION_TTL_SECS`,
    /// `NUMEM_SCORE_RETRY_ATTEMPTS` and `NUMEM_SCORE_RETRY_INTERVAL_MS`.
    pub fn from_env() -> Result<Self, AppError> {
        let scoring = match env::var("NUMEM_SCORING") {
            Ok(raw) => raw
                .parse::<ScoringPolicy>()
                .map_err(|e| AppError::config(e.to_string()))?,
            Err(_) => ScoringPolicy::default(),
        };

        let session_ttl = match parse_var::<u64>("NUMEM_SESSION_TTL_SECS")? {
            Some(0) | None => None,
            Some(secs) => Some(Duration::from_secs(secs)),
        };

        let attempts = parse_var::<u32>("NUMEM_SCORE_RETRY_ATTEMPTS")?
            .unwrap_or(DEFAULT_RETRY_ATTEMPTS)
            .max(1);
        let interval_ms =
            parse_var::<u64>("NUMEM_SCORE_RETRY_INTERVAL_MS")?.unwrap_or(DEFAULT_RETRY_INTERVAL_MS);

        Ok(Self {
            scoring,
            session_ttl,
            score_retry: RetryPolicy {
                attempts,
                interval: Duration::from_millis(interval_ms),
            },
        })
    }

    /// How often the idle sweeper runs: a quarter of the TTL, within 1s..=60s.
    pub fn sweep_interval(&self) -> Option<Duration> {
        self.session_ttl.map(|ttl| {
            (ttl / 4).clamp(Duration::from_secs(1), Duration::from_secs(60))
        })
    }
}
