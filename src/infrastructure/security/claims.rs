// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload carried in the first segment of an admin token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: i64,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    /// Checks the time window against `now` and builds the principal.
    pub fn into_authenticated(self, now: DateTime<Utc>) -> ApplicationResult<AuthenticatedUser> {
        let issued_at = timestamp(self.iat, "iat")?;
        let expires_at = timestamp(self.exp, "exp")?;

        if expires_at <= issued_at {
            return Err(ApplicationError::unauthorized("token expiry precedes issue time"));
        }
        if now >= expires_at {
            return Err(ApplicationError::unauthorized("token expired"));
        }
        if self.name.trim().is_empty() {
            return Err(ApplicationError::unauthorized("missing subject name"));
        }

        let id = UserId::new(self.sub)
            .map_err(|_| ApplicationError::unauthorized("invalid subject id"))?;

        Ok(AuthenticatedUser {
            id,
            name: self.name,
            issued_at,
            expires_at,
        })
    }
}

fn timestamp(secs: i64, claim: &str) -> ApplicationResult<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .ok_or_else(|| ApplicationError::unauthorized(format!("invalid {claim} claim")))
}
