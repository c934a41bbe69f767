//! Domain entities for accounts, tokens, and audit events.

pub mod account;
pub mod audit;
pub mod reset;
pub mod token;

pub use account::Account;
pub use audit::{AuditEvent, AuditEventKind};
pub use reset::PasswordResetToken;
pub use token::{CachedRefreshToken, RefreshToken};
