use std::env;

use crate::error::AppError;

pub mod db;
pub mod game;
pub mod http;

/// Parse an optional env var; unset is `None`, unparsable is a config error.
pub(crate) fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("Invalid value for {name}: '{raw}'"))),
        Err(_) => Ok(None),
    }
}
