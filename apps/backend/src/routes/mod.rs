use actix_web::web;

pub mod admin;
pub mod games;
pub mod health;
pub mod leaderboard;

/// Register every route. Middleware is wired by the caller (`main.rs` or the
/// test app).
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Games: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));

    // Leaderboard: /api/leaderboard
    cfg.service(web::scope("/api/leaderboard").configure(leaderboard::configure_routes));

    // Admin: /api/admin/** (AdminUser extractor on every handler)
    cfg.service(web::scope("/api/admin").configure(admin::configure_routes));
}
