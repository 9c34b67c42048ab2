//! Operator-only routes. Every handler takes `AdminUser`.

use actix_web::{web, HttpResponse, Result};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use tracing::info;

use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::extractors::{AdminUser, PlayerPath};
use crate::repos::PlayerRecord;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct PlayerResponse {
    name: String,
    best_score: i64,
    last_played: String,
    created_at: String,
}

impl From<PlayerRecord> for PlayerResponse {
    fn from(record: PlayerRecord) -> Self {
        let fmt = |t: time::OffsetDateTime| t.format(&Rfc3339).unwrap_or_else(|_| t.to_string());
        Self {
            name: record.name,
            best_score: record.best_score,
            last_played: fmt(record.last_played),
            created_at: fmt(record.created_at),
        }
    }
}

/// GET /api/admin/players/{player_name}
async fn get_player(
    admin: AdminUser,
    player: PlayerPath,
    app_state: web::Data<AppState>,
) -> Result<web::Json<PlayerResponse>, AppError> {
    let name = player.into_inner();
    let record = app_state.players.find_player(&name).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("Player '{name}' not found"))
    })?;
    info!(admin = %admin.claims.sub, player = %name, "Admin player lookup");
    Ok(web::Json(PlayerResponse::from(record)))
}

/// DELETE /api/admin/players/{player_name}
///
/// Idempotent: 204 whether or not the player existed.
async fn delete_player(
    _admin: AdminUser,
    player: PlayerPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state.players.delete_player(&player.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/players/{player_name}")
            .route(web::get().to(get_player))
            .route(web::delete().to(delete_player)),
    );
}
