//! Configuration for the token services

use chrono::Duration;
use tm_shared::config::AuthConfig;

/// Configuration shared by the token issuer and the refresh-token manager
///
/// Constructed explicitly and passed in; neither service reads ambient
/// global state.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Symmetric signing secret for access tokens
    pub jwt_secret: String,
    /// Issuer claim stamped into and required of every access token
    pub issuer: String,
    /// Access token lifetime in hours
    pub access_token_lifetime_hours: i64,
    /// Refresh token lifetime in days
    pub refresh_token_lifetime_days: i64,
    /// Remaining lifetime in seconds below which the cache is skipped
    pub cache_skip_threshold_secs: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            issuer: "login-auth-api".to_string(),
            access_token_lifetime_hours: 4,
            refresh_token_lifetime_days: 7,
            cache_skip_threshold_secs: 60,
        }
    }
}

impl TokenConfig {
    /// Access token lifetime as a duration
    pub fn access_token_lifetime(&self) -> Duration {
        Duration::hours(self.access_token_lifetime_hours)
    }

    /// Refresh token lifetime as a duration
    pub fn refresh_token_lifetime(&self) -> Duration {
        Duration::days(self.refresh_token_lifetime_days)
    }
}

impl From<&AuthConfig> for TokenConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            issuer: config.jwt_issuer.clone(),
            access_token_lifetime_hours: config.access_token_lifetime_hours,
            refresh_token_lifetime_days: config.refresh_token_lifetime_days,
            cache_skip_threshold_secs: config.cache_skip_threshold_secs,
        }
    }
}
