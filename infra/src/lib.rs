//! # Task Manager Infrastructure
//!
//! Concrete implementations of the persistence and collaborator interfaces
//! defined in `tm_core`: MySQL repositories, the Redis token cache, the
//! bcrypt password hasher, the HTTP email notifier, and the tracing-backed
//! audit sink.

pub mod audit;
pub mod cache;
pub mod database;
pub mod email;
pub mod security;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email delivery error
    #[error("Email delivery error: {0}")]
    Email(String),
}
