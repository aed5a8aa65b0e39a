use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{shared::Record, user::UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokenDto {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// The acting principal, passed explicitly into every command and query.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub name: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    pub fn owns<T: Record>(&self, record: &T) -> bool {
        record.creator_id() == self.id
    }

    pub fn ensure_owner<T: Record>(&self, record: &T) -> ApplicationResult<()> {
        if self.owns(record) {
            Ok(())
        } else {
            Err(ApplicationError::forbidden(format!(
                "{} {} belongs to another creator",
                T::KIND,
                record.id()
            )))
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub name: String,
}
