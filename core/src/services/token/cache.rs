//! Fast token cache capability with a fail-open contract.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::token::CachedRefreshToken;

/// Key prefix for cached refresh token records
pub const TOKEN_CACHE_PREFIX: &str = "refresh_token:";

/// Cache key for a refresh token value
pub fn cache_key(token: &str) -> String {
    format!("{}{}", TOKEN_CACHE_PREFIX, token)
}

/// Errors surfaced by the cache backend
///
/// These never propagate past the refresh-token manager: any cache error is
/// logged and degraded to a miss or a no-op. The cache is strictly an
/// accelerator in front of the durable store.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache backend error: {0}")]
    Backend(String),

    #[error("Cache serialization error: {0}")]
    Serialization(String),
}

/// Best-effort accelerator in front of the durable refresh-token store
///
/// Implementations key entries by [`cache_key`] and hold a denormalized
/// [`CachedRefreshToken`] with its own TTL. Operations should carry a short
/// timeout so a slow backend cannot stall the durable fallback path.
#[async_trait]
pub trait TokenCache: Send + Sync {
    /// Look up the cached record for a token value
    async fn get(&self, token: &str) -> Result<Option<CachedRefreshToken>, CacheError>;

    /// Store a record with the given TTL, replacing any existing entry
    async fn put(&self, record: &CachedRefreshToken, ttl_secs: u64) -> Result<(), CacheError>;

    /// Evict the record for a token value
    ///
    /// # Returns
    /// * `Ok(true)` - An entry existed and was evicted
    /// * `Ok(false)` - No entry for this token
    async fn remove(&self, token: &str) -> Result<bool, CacheError>;
}

/// Cache that holds nothing
///
/// Used when no fast store is deployed; every read degrades to the durable
/// path, which is exactly the fail-open behavior of a cache outage.
pub struct NoOpTokenCache;

impl NoOpTokenCache {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpTokenCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenCache for NoOpTokenCache {
    async fn get(&self, _token: &str) -> Result<Option<CachedRefreshToken>, CacheError> {
        Ok(None)
    }

    async fn put(&self, _record: &CachedRefreshToken, _ttl_secs: u64) -> Result<(), CacheError> {
        Ok(())
    }

    async fn remove(&self, _token: &str) -> Result<bool, CacheError> {
        Ok(false)
    }
}
