//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Token signing and lifetime configuration
//! - `cache` - Redis cache configuration
//! - `database` - Database connection and pool configuration
//! - `email` - Outbound email provider configuration

pub mod auth;
pub mod cache;
pub mod database;
pub mod email;

// Re-export commonly used types
pub use auth::AuthConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;

/// Top-level configuration for the server
///
/// One value of this struct is built at startup and handed down; services
/// never read the environment themselves.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub cache: CacheConfig,
    pub database: DatabaseConfig,
    pub email: EmailConfig,
}

impl AppConfig {
    /// Load configuration from the environment, reading `.env` if present
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self {
            auth: AuthConfig::from_env(),
            cache: CacheConfig::from_env(),
            database: DatabaseConfig::from_env(),
            email: EmailConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth: AuthConfig::default(),
            cache: CacheConfig::default(),
            database: DatabaseConfig::default(),
            email: EmailConfig::default(),
        }
    }
}
