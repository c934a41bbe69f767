//! Password reset token repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::reset::PasswordResetToken;
use crate::errors::DomainError;

/// Repository trait for [`PasswordResetToken`] persistence operations
///
/// Rows are mutated only through the password-reset flow. The at-most-one
/// live token per email invariant is maintained by deleting by email before
/// each save.
#[async_trait]
pub trait PasswordResetRepository: Send + Sync {
    /// Persist a new reset token
    async fn save(&self, token: PasswordResetToken) -> Result<PasswordResetToken, DomainError>;

    /// Find a reset token by its value
    ///
    /// # Returns
    /// * `Ok(Some(PasswordResetToken))` - Token found (may be expired)
    /// * `Ok(None)` - No token with this value
    async fn find_by_token(&self, token: &str)
        -> Result<Option<PasswordResetToken>, DomainError>;

    /// Delete every reset token issued for an email
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of tokens deleted
    async fn delete_by_email(&self, email: &str) -> Result<usize, DomainError>;

    /// Delete a reset token by its value
    ///
    /// # Returns
    /// * `Ok(true)` - Token was deleted
    /// * `Ok(false)` - Token not found
    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError>;

    /// Delete tokens that expired before the given instant
    async fn delete_expired(&self, before: DateTime<Utc>) -> Result<usize, DomainError>;
}
