use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::Deserialize;

use crate::domain::PlayerName;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

/// Validate a raw name from a path or body.
pub fn parse_player_name(raw: &str) -> Result<PlayerName, AppError> {
    PlayerName::parse(raw).map_err(|e| {
        let detail = match e {
            DomainError::Validation(detail) => detail,
            other => other.to_string(),
        };
        AppError::invalid(ErrorCode::InvalidPlayerName, detail)
    })
}

/// Player name taken from the `{player_name}` route segment.
///
/// The raw segment keeps reserved characters such as `%2F` encoded; the
/// value is fully percent-decoded before validation so `a/b` started via the
/// JSON body is the same player as `/api/games/a%2Fb`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerPath(pub PlayerName);

impl PlayerPath {
    pub fn into_inner(self) -> PlayerName {
        self.0
    }

    fn from_req(req: &HttpRequest) -> Result<Self, AppError> {
        let raw = route_player(req).ok_or_else(|| {
            AppError::bad_request(ErrorCode::InvalidPlayerName, "Missing player_name parameter")
        })?;
        parse_player_name(&raw).map(PlayerPath)
    }
}

/// Decoded `{player_name}` segment of the matched route, unvalidated.
/// `None` until routing has run or when the route has no such segment.
pub fn route_player(req: &HttpRequest) -> Option<String> {
    req.match_info()
        .load::<PlayerPathParams>()
        .ok()
        .map(|params| params.player_name)
}

#[derive(Deserialize)]
struct PlayerPathParams {
    player_name: String,
}

impl FromRequest for PlayerPath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_req(req))
    }
}
