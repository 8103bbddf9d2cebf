// Bearer token issuance and validation
//
// The subject is the canonical username returned by login; user-scoped
// routes require it to match the username in the path.

use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::config::AuthConfig;

/// JWT claims (payload)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Canonical username
    pub sub: String,
    /// Expiration (seconds since epoch)
    pub exp: i64,
    /// Issued at (seconds since epoch)
    pub iat: i64,
}

/// Sign a token for the given username.
pub fn issue_token(username: &str, config: &AuthConfig) -> Result<String> {
    let now = Utc::now();
    let lifetime =
        chrono::Duration::from_std(config.token_lifetime).context("token lifetime out of range")?;

    let claims = Claims {
        sub: username.to_string(),
        exp: (now + lifetime).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .context("failed to sign token")
}

/// Validate a token's signature and expiry, returning its claims.
pub fn verify_token(token: &str, config: &AuthConfig) -> Result<Claims> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .context("invalid token")?;

    Ok(data.claims)
}
