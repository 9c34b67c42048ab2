use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbKind, DbOwner, RuntimeEnv};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_INTERVAL_MS: u64 = 500;
const MEMORY_POOL_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt < max_attempts => {
                warn!(
                    attempt,
                    max_attempts,
                    interval_ms,
                    error = %e,
                    "connection_retry=failed"
                );
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Mask the password in a connection URL for logging.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((auth_part, host_part)) = url.split_once('@') else {
        return url.to_string();
    };
    match auth_part.rfind(':') {
        Some(colon_pos) if auth_part[..colon_pos].contains("://") => {
            let scheme_user = &auth_part[..colon_pos];
            format!("{scheme_user}:***@{host_part}")
        }
        _ => url.to_string(),
    }
}

/// Open a pool. This function does NOT run any migrations.
///
/// In-memory SQLite is pinned to a single connection: every new connection
/// would otherwise see its own empty database.
pub async fn connect_db(
    env: RuntimeEnv,
    kind: DbKind,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let url = db_url(env, kind, owner)?;

    let mut opt = ConnectOptions::new(&url);
    opt.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    match kind {
        DbKind::SqliteMemory => {
            opt.min_connections(1)
                .max_connections(1)
                .idle_timeout(MEMORY_POOL_LIFETIME)
                .max_lifetime(MEMORY_POOL_LIFETIME);
        }
        DbKind::SqliteFile => {
            opt.max_connections(1);
        }
        DbKind::Postgres => {
            opt.max_connections(10);
        }
    }

    info!(?env, ?kind, ?owner, url = %sanitize_db_url(&url), "Connecting to database");

    if kind == DbKind::Postgres {
        retry_connection(
            || {
                let opt = opt.clone();
                async move { Database::connect(opt).await.map_err(AppError::from) }
            },
            CONNECT_ATTEMPTS,
            CONNECT_INTERVAL_MS,
        )
        .await
    } else {
        Ok(Database::connect(opt).await?)
    }
}

/// Single entrypoint used by `StateBuilder`: migrate with owner credentials,
/// then hand back the pool the application should use.
pub async fn bootstrap_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let owner_conn = connect_db(env, kind, DbOwner::Owner).await?;
    migrate(&owner_conn, MigrationCommand::Up).await?;

    if kind.is_sqlite() {
        // one database, one pool
        return Ok(owner_conn);
    }

    if let Err(e) = owner_conn.close().await {
        warn!(error = %e, "Failed to close owner pool after migrations");
    }
    connect_db(env, kind, DbOwner::App).await
}
