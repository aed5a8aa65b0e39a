// src/infrastructure/security/token.rs
use super::claims::TokenClaims;
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenManager, time::Clock},
};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Duration as ChronoDuration;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::{sync::Arc, time::Duration};

type HmacSha256 = Hmac<Sha256>;

pub const MIN_SECRET_LEN: usize = 32;

/// Stateless bearer tokens: `base64url(claims_json).base64url(hmac_sha256)`.
#[derive(Clone)]
pub struct HmacTokenManager {
    secret: Arc<[u8]>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl HmacTokenManager {
    pub fn new(secret: &[u8], ttl: Duration, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(ApplicationError::infrastructure(format!(
                "signing key must be at least {MIN_SECRET_LEN} bytes"
            )));
        }
        if ttl.is_zero() {
            return Err(ApplicationError::infrastructure("token ttl must be positive"));
        }

        Ok(Self {
            secret: Arc::from(secret),
            ttl,
            clock,
        })
    }

    fn mac(&self) -> ApplicationResult<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    fn sign(&self, payload: &str) -> ApplicationResult<String> {
        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
    }

    fn verify(&self, payload: &str, signature: &str) -> ApplicationResult<()> {
        let provided = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| ApplicationError::unauthorized("malformed token signature"))?;
        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&provided)
            .map_err(|_| ApplicationError::unauthorized("invalid token signature"))
    }
}

fn ttl_seconds(ttl: Duration) -> i64 {
    i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX)
}

#[async_trait]
impl TokenManager for HmacTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = self.clock.now();
        let expires_in = ttl_seconds(self.ttl);
        let expires_at = issued_at + ChronoDuration::seconds(expires_in);

        let claims = TokenClaims {
            sub: i64::from(subject.user_id),
            name: subject.name,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };
        let json = serde_json::to_vec(&claims)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let payload = URL_SAFE_NO_PAD.encode(json);
        let signature = self.sign(&payload)?;

        Ok(AuthTokenDto {
            token: format!("{payload}.{signature}"),
            issued_at,
            expires_at,
            expires_in,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let (payload, signature) = token
            .trim()
            .split_once('.')
            .ok_or_else(|| ApplicationError::unauthorized("malformed token"))?;
        self.verify(payload, signature)?;

        let json = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| ApplicationError::unauthorized("malformed token payload"))?;
        let claims: TokenClaims = serde_json::from_slice(&json)
            .map_err(|_| ApplicationError::unauthorized("malformed token claims"))?;

        claims.into_authenticated(self.clock.now())
    }
}
