//! Mints a bearer token for an admin account.
//!
//! Usage: `issue_admin_token <user_id> <name>`. Reads `SESSION_SIGNING_KEY`
//! and `TOKEN_TTL_SECONDS` from the environment or `.env`.
use anyhow::{Context, Result, bail};
use showcase_admin::{
    application::{dto::TokenSubject, ports::security::TokenManager},
    domain::user::UserId,
    infrastructure::{security::HmacTokenManager, time::SystemClock},
};
use std::{sync::Arc, time::Duration};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let (Some(raw_id), Some(name)) = (args.next(), args.next()) else {
        bail!("usage: issue_admin_token <user_id> <name>");
    };

    let user_id: i64 = raw_id
        .parse()
        .with_context(|| format!("user id must be an integer, got {raw_id:?}"))?;
    let user_id = UserId::new(user_id)?;

    let key = std::env::var("SESSION_SIGNING_KEY").context("SESSION_SIGNING_KEY is not set")?;
    let ttl = match std::env::var("TOKEN_TTL_SECONDS") {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("TOKEN_TTL_SECONDS must be an integer, got {raw:?}"))?,
        Err(_) => 3600,
    };

    let manager = HmacTokenManager::new(
        key.as_bytes(),
        Duration::from_secs(ttl),
        Arc::new(SystemClock),
    )?;
    let issued = manager.issue(TokenSubject { user_id, name }).await?;

    println!("{}", serde_json::to_string_pretty(&issued)?);
    Ok(())
}
