//! # Task Manager Core
//!
//! Core business logic and domain layer for the Task Manager backend.
//! This crate contains the authentication and session-lifecycle subsystem:
//! domain entities, business services, repository interfaces, and error types.
//! Persistence and external collaborators live behind the traits defined here.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Account, AuditEvent, AuditEventKind, AuthResponse, CachedRefreshToken,
    PasswordResetToken, RefreshToken};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{
    AccountRepository, AuditLogRepository, NoOpAuditLogRepository, PasswordResetRepository,
    RefreshTokenRepository,
};
pub use services::{
    CacheError, Clock, EmailNotifier, NoOpTokenCache, PasswordHasher, PasswordResetConfig,
    PasswordResetService, RefreshTokenManager, RevocationCoordinator, SessionService,
    SystemClock, TokenCache, TokenConfig, TokenIssuer,
};
