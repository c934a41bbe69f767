//! Refresh token repository trait defining the interface for durable token storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for [`RefreshToken`] persistence operations
///
/// The durable store is the source of truth for refresh tokens; the fast
/// cache in front of it is strictly an accelerator. Rows are mutated only
/// through the refresh-token manager.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Persist a new refresh token
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved token
    /// * `Err(DomainError)` - Save failed (e.g., duplicate token value)
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token by its value
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Token found (may be expired; callers check)
    /// * `Ok(None)` - No token with this value
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Find all refresh tokens owned by an account
    async fn find_by_account(&self, account_id: Uuid) -> Result<Vec<RefreshToken>, DomainError>;

    /// Delete a refresh token by its value
    ///
    /// # Returns
    /// * `Ok(true)` - Token was deleted
    /// * `Ok(false)` - Token not found
    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError>;

    /// Delete every refresh token owned by an account
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of tokens deleted
    async fn delete_by_account(&self, account_id: Uuid) -> Result<usize, DomainError>;

    /// Delete tokens that expired before the given instant
    ///
    /// Called periodically to clean up rows the lazy read-path deletion
    /// never observed.
    async fn delete_expired(&self, before: DateTime<Utc>) -> Result<usize, DomainError>;
}
