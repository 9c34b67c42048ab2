use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use tracing::warn;

use crate::auth::claims::Claims;
use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::extractors::bearer::bearer_token;
use crate::state::app_state::AppState;
use crate::trace_ctx;

/// Caller holding a valid admin token.
///
/// Missing or invalid tokens are rejected with 401, valid tokens without the
/// admin role with 403.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub claims: Claims,
}

impl AdminUser {
    fn from_req(req: &HttpRequest) -> Result<Self, AppError> {
        let token = bearer_token(req)?;

        let app_state = req
            .app_data::<web::Data<AppState>>()
            .ok_or_else(|| AppError::internal("AppState not found"))?;

        let claims = verify_access_token(&token, &app_state.security)?;
        if !claims.is_admin() {
            warn!(
                trace_id = %trace_ctx::trace_id(),
                sub = %claims.sub,
                role = ?claims.role,
                "Admin route called without admin role"
            );
            return Err(AppError::forbidden_insufficient_role());
        }

        Ok(AdminUser { claims })
    }
}

impl FromRequest for AdminUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_req(req))
    }
}
