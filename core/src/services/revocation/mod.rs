//! Coordinated revocation across the durable store and the fast cache

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::errors::DomainResult;
use crate::repositories::token::RefreshTokenRepository;
use crate::services::clock::Clock;
use crate::services::token::{RefreshTokenManager, TokenCache};

/// Single entry point for every path that invalidates refresh tokens
///
/// Logout, logout-all, and password reset all funnel through here so that
/// cache eviction is never forgotten on a revocation path. Eviction is
/// best-effort; the durable delete is what makes a token dead, and a stale
/// cache entry can outlive it only until its TTL runs out or the next
/// validation observes the expiry.
pub struct RevocationCoordinator<R, C, K>
where
    R: RefreshTokenRepository,
    C: TokenCache,
    K: Clock,
{
    manager: Arc<RefreshTokenManager<R, C, K>>,
}

impl<R, C, K> RevocationCoordinator<R, C, K>
where
    R: RefreshTokenRepository,
    C: TokenCache,
    K: Clock,
{
    pub fn new(manager: Arc<RefreshTokenManager<R, C, K>>) -> Self {
        Self { manager }
    }

    /// Revoke a single session by its refresh token value
    ///
    /// Returns whether a durable token was actually removed. Revoking an
    /// unknown token is not an error; the session is gone either way.
    pub async fn logout(&self, token: &str) -> DomainResult<bool> {
        self.manager.delete(token).await
    }

    /// Revoke every session belonging to an account
    pub async fn logout_all(&self, account_id: Uuid) -> DomainResult<usize> {
        let removed = self.manager.delete_all(account_id).await?;
        warn!(
            account_id = %account_id,
            count = removed,
            "All sessions revoked for account"
        );
        Ok(removed)
    }

    /// Revoke every session after a credential change
    ///
    /// A password reset must leave no session alive that was established
    /// under the old credential.
    pub async fn on_password_reset(&self, account_id: Uuid) -> DomainResult<usize> {
        let removed = self.manager.delete_all(account_id).await?;
        warn!(
            account_id = %account_id,
            count = removed,
            "Sessions revoked after password reset"
        );
        Ok(removed)
    }
}
