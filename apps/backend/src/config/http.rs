//! Listener and browser-origin settings.

use std::env;

use super::parse_var;
use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed to call the API from a browser.
    pub cors_origins: Vec<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

impl HttpConfig {
    /// Reads `BACKEND_HOST`, `BACKEND_PORT` and the comma-separated
    /// `CORS_ALLOWED_ORIGINS`.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let host = env::var("BACKEND_HOST")
            .map(|h| h.trim().to_string())
            .ok()
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);
        let port = parse_var::<u16>("BACKEND_PORT")?.unwrap_or(defaults.port);

        let configured = env::var("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();
        let cors_origins = if configured.is_empty() {
            defaults.cors_origins
        } else {
            configured
        };

        Ok(Self {
            host,
            port,
            cors_origins,
        })
    }
}

/// Keep explicit http(s) origins; drop blanks, `null` and anything schemeless.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}
