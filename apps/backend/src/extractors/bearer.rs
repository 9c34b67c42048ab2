use actix_web::http::header;
use actix_web::HttpRequest;

use crate::error::AppError;

/// Pull the token out of `Authorization: Bearer <token>`.
pub fn bearer_token(req: &HttpRequest) -> Result<String, AppError> {
    let auth_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(AppError::unauthorized_missing_bearer)?
        .to_str()
        .map_err(|_| AppError::unauthorized_missing_bearer())?;

    // Parse "Bearer <token>" format
    let parts: Vec<&str> = auth_value.split_whitespace().collect();
    match parts.as_slice() {
        ["Bearer", token] if !token.is_empty() => Ok((*token).to_string()),
        _ => Err(AppError::unauthorized_missing_bearer()),
    }
}
