//! Shared utilities and common types for the Task Manager server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Common response structures
//! - Common type definitions

pub mod config;
pub mod logging;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, CacheConfig, DatabaseConfig, EmailConfig};
pub use logging::init_logging;
pub use types::ErrorResponse;
