//! Signing settings for admin bearer tokens.

use std::env;
use std::fmt;
use std::time::Duration;

use jsonwebtoken::Algorithm;

use crate::config::parse_var;
use crate::error::AppError;

/// Lifetime of minted admin tokens unless `NUMEM_ACCESS_TOKEN_TTL_SECS` says otherwise.
pub const DEFAULT_ACCESS_TOKEN_TTL: Duration = Duration::from_secs(15 * 60);

/// Shortest secret `from_env` accepts for HS256.
pub const MIN_SECRET_LEN: usize = 32;

/// HS256 key and token lifetime shared by the admin guard and the token mint.
#[derive(Clone)]
pub struct SecurityConfig {
    pub jwt_secret: Vec<u8>,
    pub algorithm: Algorithm,
    pub access_token_ttl: Duration,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            access_token_ttl: DEFAULT_ACCESS_TOKEN_TTL,
        }
    }

    pub fn with_access_token_ttl(mut self, ttl: Duration) -> Self {
        self.access_token_ttl = ttl;
        self
    }

    /// Reads `BACKEND_JWT_SECRET` (required, at least [`MIN_SECRET_LEN`]
    /// bytes) and `NUMEM_ACCESS_TOKEN_TTL_SECS` (optional, non-zero).
    pub fn from_env() -> Result<Self, AppError> {
        let secret = env::var("BACKEND_JWT_SECRET")
            .map_err(|_| AppError::config("BACKEND_JWT_SECRET must be set"))?;
        if secret.len() < MIN_SECRET_LEN {
            return Err(AppError::config(format!(
                "BACKEND_JWT_SECRET must be at least {MIN_SECRET_LEN} bytes"
            )));
        }

        let ttl = match parse_var::<u64>("NUMEM_ACCESS_TOKEN_TTL_SECS")? {
            None => DEFAULT_ACCESS_TOKEN_TTL,
            Some(0) => {
                return Err(AppError::config(
                    "NUMEM_ACCESS_TOKEN_TTL_SECS must be greater than zero",
                ))
            }
            Some(secs) => Duration::from_secs(secs),
        };

        Ok(Self::new(secret.into_bytes()).with_access_token_ttl(ttl))
    }
}

// Startup logs print the whole state; keep the key out of them.
impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &format_args!("<{} bytes>", self.jwt_secret.len()))
            .field("algorithm", &self.algorithm)
            .field("access_token_ttl", &self.access_token_ttl)
            .finish()
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"numem-local-development-secret-key".to_vec())
    }
}
