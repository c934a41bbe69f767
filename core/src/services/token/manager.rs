//! Refresh token lifecycle with a cache-aside fast path

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::entities::token::{CachedRefreshToken, RefreshToken};
use crate::errors::DomainResult;
use crate::repositories::token::RefreshTokenRepository;
use crate::services::clock::Clock;

use super::cache::TokenCache;
use super::config::TokenConfig;

/// Manages refresh tokens against a durable store with a best-effort cache
///
/// The durable repository is the source of truth; the cache is an
/// accelerator populated on writes and repopulated on cache-miss reads.
/// Every cache failure is logged and degraded: reads fall through to the
/// repository, writes and evictions are skipped. Observable behavior with a
/// broken cache is identical to running without one, only slower.
pub struct RefreshTokenManager<R, C, K>
where
    R: RefreshTokenRepository,
    C: TokenCache,
    K: Clock,
{
    repository: Arc<R>,
    cache: Arc<C>,
    clock: K,
    config: TokenConfig,
}

impl<R, C, K> RefreshTokenManager<R, C, K>
where
    R: RefreshTokenRepository,
    C: TokenCache,
    K: Clock,
{
    pub fn new(repository: Arc<R>, cache: Arc<C>, clock: K, config: TokenConfig) -> Self {
        Self {
            repository,
            cache,
            clock,
            config,
        }
    }

    /// Create a refresh token for an account
    ///
    /// Any existing tokens for the account are deleted first, so an account
    /// holds at most one live refresh token. The new token is persisted and
    /// then pushed into the cache best-effort.
    pub async fn create(
        &self,
        account_id: Uuid,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> DomainResult<RefreshToken> {
        let now = self.clock.now();

        let existing = self.repository.find_by_account(account_id).await?;
        for old in &existing {
            self.evict(&old.token).await;
        }
        let removed = self.repository.delete_by_account(account_id).await?;
        if removed > 0 {
            debug!(
                account_id = %account_id,
                count = removed,
                "Replaced existing refresh tokens"
            );
        }

        let token = RefreshToken::new(
            account_id,
            now,
            self.config.refresh_token_lifetime(),
            ip_address,
            user_agent,
        );
        let token = self.repository.save(token).await?;
        self.cache_put(&token, now).await;

        Ok(token)
    }

    /// Validate a refresh token value and return the live token, if any
    ///
    /// Reads the cache first; on a hit the entry's own expiry is still
    /// checked against the clock, and live hits get their TTL slid forward.
    /// On a miss (or any cache error) the durable store decides. Expired
    /// tokens found on either path are deleted from both stores and treated
    /// as absent.
    pub async fn validate(&self, token: &str) -> DomainResult<Option<RefreshToken>> {
        let now = self.clock.now();

        match self.cache.get(token).await {
            Ok(Some(cached)) => {
                let found = RefreshToken::from(cached);
                if found.is_expired(now) {
                    debug!("Cached refresh token expired, removing");
                    self.evict(token).await;
                    self.purge(token).await;
                    return Ok(None);
                }
                // Slide the TTL so hot tokens stay resident.
                self.cache_put(&found, now).await;
                return Ok(Some(found));
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Token cache read failed, falling back to store: {}", e);
            }
        }

        match self.repository.find_by_token(token).await? {
            Some(found) => {
                if found.is_expired(now) {
                    debug!("Refresh token expired, removing");
                    self.evict(token).await;
                    self.purge(token).await;
                    return Ok(None);
                }
                self.cache_put(&found, now).await;
                Ok(Some(found))
            }
            None => Ok(None),
        }
    }

    /// Delete a single refresh token
    ///
    /// The cache entry is evicted best-effort before the authoritative
    /// delete. Returns whether the durable store held the token.
    pub async fn delete(&self, token: &str) -> DomainResult<bool> {
        self.evict(token).await;
        self.repository.delete_by_token(token).await
    }

    /// Delete every refresh token belonging to an account
    ///
    /// Returns the number of tokens removed from the durable store.
    pub async fn delete_all(&self, account_id: Uuid) -> DomainResult<usize> {
        let tokens = self.repository.find_by_account(account_id).await?;
        for token in &tokens {
            self.evict(&token.token).await;
        }
        self.repository.delete_by_account(account_id).await
    }

    /// Purge expired tokens from the durable store
    ///
    /// Cache entries for expired tokens carry a TTL and age out on their
    /// own, so only the durable side needs sweeping.
    pub async fn delete_expired(&self) -> DomainResult<usize> {
        let now = self.clock.now();
        let removed = self.repository.delete_expired(now).await?;
        if removed > 0 {
            debug!(count = removed, "Purged expired refresh tokens");
        }
        Ok(removed)
    }

    /// Write a token into the cache with TTL equal to its remaining lifetime
    ///
    /// Skipped when the token is within the skip threshold of expiry; a
    /// near-dead entry is not worth a cache write. Errors are logged and
    /// swallowed.
    async fn cache_put(&self, token: &RefreshToken, now: DateTime<Utc>) {
        let remaining = token.remaining(now).num_seconds();
        if remaining <= self.config.cache_skip_threshold_secs {
            return;
        }
        let record = CachedRefreshToken::from(token);
        if let Err(e) = self.cache.put(&record, remaining as u64).await {
            warn!("Token cache write failed: {}", e);
        }
    }

    /// Evict a token from the cache, logging and swallowing any error
    async fn evict(&self, token: &str) {
        if let Err(e) = self.cache.remove(token).await {
            warn!("Token cache eviction failed: {}", e);
        }
    }

    /// Delete an expired row discovered during a read, logging and
    /// swallowing any error
    ///
    /// The row is already dead to every caller; a failed cleanup leaves it
    /// for `delete_expired` and must not turn the read into an error.
    async fn purge(&self, token: &str) {
        if let Err(e) = self.repository.delete_by_token(token).await {
            warn!("Expired token cleanup failed: {}", e);
        }
    }
}
