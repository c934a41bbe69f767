//! Repository interfaces for persistence, implemented by the infrastructure layer.

pub mod account;
pub mod audit;
pub mod reset;
pub mod token;

pub use account::AccountRepository;
pub use audit::{AuditLogRepository, NoOpAuditLogRepository};
pub use reset::PasswordResetRepository;
pub use token::RefreshTokenRepository;

#[cfg(test)]
pub use account::MockAccountRepository;
#[cfg(test)]
pub use audit::MockAuditLogRepository;
#[cfg(test)]
pub use reset::MockPasswordResetRepository;
#[cfg(test)]
pub use token::MockRefreshTokenRepository;
