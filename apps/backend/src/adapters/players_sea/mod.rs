//! SeaORM adapter for player repository - generic over ConnectionTrait.

use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::players;

pub mod dto;

pub use dto::{PlayerCreate, ScoreUpdate};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// Insert a zero-score row unless one exists. Returns true if a row was inserted.
pub async fn insert_if_absent<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<bool, sea_orm::DbErr> {
    let player_active = players::ActiveModel {
        name: Set(dto.name),
        best_score: Set(0),
        last_played: Set(dto.at),
        created_at: Set(dto.at),
    };

    let rows = players::Entity::insert(player_active)
        .on_conflict(
            OnConflict::column(players::Column::Name)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    Ok(rows == 1)
}

/// Conditional update: only touches the row when `score` beats the stored best.
/// Returns true if the row changed.
pub async fn raise_best_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ScoreUpdate,
) -> Result<bool, sea_orm::DbErr> {
    let result = players::Entity::update_many()
        .col_expr(players::Column::BestScore, Expr::value(dto.score))
        .col_expr(players::Column::LastPlayed, Expr::value(dto.at))
        .filter(players::Column::Name.eq(dto.name))
        .filter(players::Column::BestScore.lt(dto.score))
        .exec(conn)
        .await?;

    Ok(result.rows_affected == 1)
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(name.to_owned()).one(conn).await
}

/// Highest scores first; equal scores ordered by name.
pub async fn top_by_best_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: u64,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .order_by_desc(players::Column::BestScore)
        .order_by_asc(players::Column::Name)
        .limit(limit)
        .all(conn)
        .await
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<u64, sea_orm::DbErr> {
    let result = players::Entity::delete_by_id(name.to_owned())
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
