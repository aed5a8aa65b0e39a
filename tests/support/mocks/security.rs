// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use showcase_admin::{
    application::{
        ApplicationResult,
        dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
        error::ApplicationError,
        ports::security::TokenManager,
    },
    domain::user::UserId,
};

/// Authenticates as user 1.
pub const TEST_TOKEN: &str = "test-token";
/// Authenticates as user 2.
pub const OTHER_TOKEN: &str = "other-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

pub fn admin(id: i64) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        name: format!("admin-{id}"),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Err(ApplicationError::infrastructure("not implemented"))
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            TEST_TOKEN => Ok(admin(1)),
            OTHER_TOKEN => Ok(admin(2)),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("expired token")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
