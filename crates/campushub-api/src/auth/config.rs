// Authentication configuration loaded from environment variables.
// Decision: AUTH_ prefix for all auth config
// Decision: Default to full enforcement; opting out is explicit

use std::time::Duration;

/// Authentication mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Path usernames are trusted as-is (local development only)
    None,
    /// User-scoped routes require the bearer token issued at login
    #[default]
    Full,
}

impl AuthMode {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "none" => AuthMode::None,
            _ => AuthMode::Full,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Authentication mode
    pub mode: AuthMode,
    /// Secret key for signing JWTs
    pub jwt_secret: String,
    /// Access token lifetime
    pub token_lifetime: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            mode: AuthMode::Full,
            jwt_secret: String::new(),
            token_lifetime: Duration::from_secs(24 * 60 * 60), // 24 hours
        }
    }
}

impl AuthConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mode = std::env::var("AUTH_MODE")
            .map(|s| AuthMode::from_str(&s))
            .unwrap_or_default();

        let jwt_secret = std::env::var("AUTH_JWT_SECRET").unwrap_or_else(|_| {
            if mode == AuthMode::None {
                // Generate a random secret for dev mode
                use rand::Rng;
                let bytes: [u8; 32] = rand::thread_rng().gen();
                hex::encode(bytes)
            } else {
                tracing::warn!("AUTH_JWT_SECRET not set, using insecure default");
                "insecure-dev-secret-change-me".to_string()
            }
        });

        let token_lifetime = std::env::var("AUTH_TOKEN_LIFETIME")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(24 * 60 * 60));

        Self {
            mode,
            jwt_secret,
            token_lifetime,
        }
    }

    /// Check if token enforcement is active
    pub fn enforced(&self) -> bool {
        self.mode == AuthMode::Full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_mode_parsing() {
        assert_eq!(AuthMode::from_str("none"), AuthMode::None);
        assert_eq!(AuthMode::from_str("NONE"), AuthMode::None);
        assert_eq!(AuthMode::from_str("full"), AuthMode::Full);
        assert_eq!(AuthMode::from_str("FULL"), AuthMode::Full);
        // Unrecognized values fall back to enforcement, not to open access
        assert_eq!(AuthMode::from_str("invalid"), AuthMode::Full);
    }

    #[test]
    fn test_default_config_enforces() {
        let config = AuthConfig::default();
        assert_eq!(config.mode, AuthMode::Full);
        assert!(config.enforced());
        assert_eq!(config.token_lifetime, Duration::from_secs(24 * 60 * 60));
    }
}
