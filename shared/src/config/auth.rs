//! Authentication configuration module

use serde::{Deserialize, Serialize};

/// Configuration for token signing and session lifetimes
///
/// Services receive this struct at construction; nothing reads signing
/// material from ambient global state.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Symmetric secret used to sign access tokens
    pub jwt_secret: String,

    /// Issuer claim stamped into every access token
    pub jwt_issuer: String,

    /// Access token lifetime in hours
    pub access_token_lifetime_hours: i64,

    /// Refresh token lifetime in days
    pub refresh_token_lifetime_days: i64,

    /// Password reset token lifetime in minutes
    pub reset_token_lifetime_minutes: i64,

    /// Remaining-lifetime threshold in seconds below which refresh tokens
    /// are not worth a cache round trip
    #[serde(default = "default_cache_skip_threshold")]
    pub cache_skip_threshold_secs: i64,

    /// Base URL of the frontend, used to build password reset links
    pub frontend_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("development-secret-please-change-in-production"),
            jwt_issuer: String::from("login-auth-api"),
            access_token_lifetime_hours: 4,
            refresh_token_lifetime_days: 7,
            reset_token_lifetime_minutes: 30,
            cache_skip_threshold_secs: default_cache_skip_threshold(),
            frontend_url: String::from("http://localhost:4200"),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            jwt_issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.jwt_issuer),
            access_token_lifetime_hours: std::env::var("ACCESS_TOKEN_LIFETIME_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_lifetime_hours),
            refresh_token_lifetime_days: std::env::var("REFRESH_TOKEN_LIFETIME_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_lifetime_days),
            reset_token_lifetime_minutes: std::env::var("RESET_TOKEN_LIFETIME_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.reset_token_lifetime_minutes),
            cache_skip_threshold_secs: defaults.cache_skip_threshold_secs,
            frontend_url: std::env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
        }
    }

    /// Access token lifetime as a duration
    pub fn access_token_lifetime(&self) -> chrono::Duration {
        chrono::Duration::hours(self.access_token_lifetime_hours)
    }

    /// Refresh token lifetime as a duration
    pub fn refresh_token_lifetime(&self) -> chrono::Duration {
        chrono::Duration::days(self.refresh_token_lifetime_days)
    }

    /// Password reset token lifetime as a duration
    pub fn reset_token_lifetime(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.reset_token_lifetime_minutes)
    }
}

fn default_cache_skip_threshold() -> i64 {
    60
}
