use actix_web::{web, App, HttpServer};
use backend::config::db::{DbKind, RuntimeEnv};
use backend::config::game::GameConfig;
use backend::config::http::HttpConfig;
use backend::engine::spawn_idle_sweeper;
use backend::infra::state::build_state;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;
use backend::state::security_config::SecurityConfig;
use backend::AppError;
use tracing::info;

mod telemetry;

fn load_config() -> Result<(HttpConfig, SecurityConfig, DbKind, GameConfig), AppError> {
    Ok((
        HttpConfig::from_env()?,
        SecurityConfig::from_env()?,
        DbKind::from_env()?,
        GameConfig::from_env()?,
    ))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let (http_config, security_config, db_kind, game_config) = match load_config() {
        Ok(configs) => configs,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // Create application state using unified builder
    let app_state = match build_state()
        .with_env(RuntimeEnv::Prod)
        .with_db(db_kind)
        .with_security(security_config)
        .with_game_config(game_config.clone())
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    info!(?db_kind, scoring = game_config.scoring.as_str(), "Database connected");

    let sweeper = match (game_config.session_ttl, game_config.sweep_interval()) {
        (Some(ttl), Some(every)) => Some(spawn_idle_sweeper(
            app_state.engine.clone(),
            ttl,
            every,
        )),
        _ => None,
    };

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);
    let shutdown_data = data.clone();

    let HttpConfig {
        host,
        port,
        cors_origins,
    } = http_config;
    info!(%host, port, origins = ?cors_origins, "Starting number memory backend");

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&cors_origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    if let Some(sweeper) = sweeper {
        sweeper.abort();
    }
    // let queued final scores reach the store before exiting
    shutdown_data.games.recorder().flush().await;
    info!("Shutdown complete");
    Ok(())
}
