//! Browser access to the game API.

use actix_cors::Cors;
use actix_web::http::header::{self, HeaderName};

/// Response headers a browser client needs to read: the trace id for bug
/// reports, and the hints attached to 401 and 503 problem responses.
const EXPOSED: [HeaderName; 4] = [
    HeaderName::from_static("x-trace-id"),
    HeaderName::from_static("x-request-id"),
    header::RETRY_AFTER,
    header::WWW_AUTHENTICATE,
];

/// CORS for the routes this API serves: game and leaderboard calls from the
/// configured origins, plus bearer-authenticated admin deletes.
pub fn cors_middleware(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "DELETE"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(EXPOSED)
        .max_age(3600);

    origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
