// Authentication module
// Decision: Bearer tokens issued at login replace the trust-the-client model;
// AUTH_MODE=none restores the original behavior for local development

pub mod config;
pub mod jwt;

pub use config::{AuthConfig, AuthMode};

use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;

use crate::common::ErrorResponse;

/// Enforce that the request carries a valid token whose subject is
/// `username`. A no-op when AUTH_MODE=none.
pub fn require_user(
    headers: &HeaderMap,
    config: &AuthConfig,
    username: &str,
) -> Result<(), (StatusCode, Json<ErrorResponse>)> {
    if !config.enforced() {
        return Ok(());
    }

    let token = bearer_token(headers).ok_or_else(|| unauthorized("Missing bearer token"))?;
    let claims =
        jwt::verify_token(token, config).map_err(|_| unauthorized("Invalid or expired token"))?;

    if claims.sub != username {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::new("Token does not match requested user")),
        ));
    }

    Ok(())
}

/// Extract the value of an `Authorization: Bearer` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn unauthorized(msg: &str) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::UNAUTHORIZED, Json(ErrorResponse::new(msg)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bearer_headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );
        headers
    }

    fn full_config() -> AuthConfig {
        AuthConfig {
            mode: AuthMode::Full,
            jwt_secret: "test-secret".to_string(),
            token_lifetime: std::time::Duration::from_secs(3600),
        }
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(&bearer_headers("abc")), Some("abc"));
        assert_eq!(bearer_token(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic abc".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_require_user_is_noop_without_enforcement() {
        let config = AuthConfig {
            mode: AuthMode::None,
            ..full_config()
        };
        assert!(require_user(&HeaderMap::new(), &config, "alice").is_ok());
    }

    #[test]
    fn test_require_user_rejects_missing_token() {
        let config = full_config();
        let err = require_user(&HeaderMap::new(), &config, "alice").unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_require_user_rejects_garbage_token() {
        let config = full_config();
        let err = require_user(&bearer_headers("not-a-jwt"), &config, "alice").unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_require_user_matches_token_subject() {
        let config = full_config();
        let token = jwt::issue_token("alice", &config).unwrap();

        assert!(require_user(&bearer_headers(&token), &config, "alice").is_ok());

        let err = require_user(&bearer_headers(&token), &config, "bob").unwrap_err();
        assert_eq!(err.0, StatusCode::FORBIDDEN);
    }
}
