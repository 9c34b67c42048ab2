use actix_web::{web, Result};
use serde::Deserialize;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::LeaderboardEntry;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct LeaderboardQuery {
    // parsed by hand so a bad value gets a problem-details body
    limit: Option<String>,
}

/// GET /api/leaderboard?limit=N
async fn leaderboard(
    query: web::Query<LeaderboardQuery>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<LeaderboardEntry>>, AppError> {
    let limit = match query.limit.as_deref() {
        None => None,
        Some(raw) => Some(raw.trim().parse::<u32>().map_err(|_| {
            AppError::invalid(
                ErrorCode::InvalidLimit,
                format!("limit must be a positive integer, got '{raw}'"),
            )
        })?),
    };

    let entries = app_state.players.leaderboard(limit).await?;
    Ok(web::Json(entries))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(leaderboard)));
}
