// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let app: AppError = DomainError::validation("player name must not be empty").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_not_found_kinds() {
    let app: AppError = DomainError::session_not_found("bob").into();
    assert_eq!(app.code().as_str(), "SESSION_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::not_found(NotFoundKind::Player, "no such player").into();
    assert_eq!(app.code().as_str(), "PLAYER_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError =
        DomainError::not_found(NotFoundKind::Other("Record".into()), "missing").into();
    assert_eq!(app.code(), ErrorCode::NotFound);
}

#[test]
fn maps_infra_kinds() {
    let app: AppError =
        DomainError::infra(InfraErrorKind::PersistenceUnavailable, "down").into();
    assert_eq!(app.code(), ErrorCode::DbUnavailable);
    assert_eq!(app.status().as_u16(), 503);

    let app: AppError = DomainError::infra(InfraErrorKind::Timeout, "slow").into();
    assert_eq!(app.code(), ErrorCode::DbTimeout);
    assert_eq!(app.status().as_u16(), 504);

    let app: AppError = DomainError::infra(InfraErrorKind::Other("x".into()), "boom").into();
    assert_eq!(app.code(), ErrorCode::DbError);
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn detail_is_preserved() {
    let app: AppError = DomainError::session_not_found("carol").into();
    assert!(app.detail().contains("carol"));
}
