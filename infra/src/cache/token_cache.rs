//! Redis-backed implementation of the fast token cache

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;
use tracing::debug;

use tm_core::domain::entities::token::CachedRefreshToken;
use tm_core::services::token::{cache_key, CacheError, TokenCache};
use tm_shared::config::CacheConfig;

use super::redis_client::RedisClient;

/// Refresh token cache on top of [`RedisClient`]
///
/// Records are stored as JSON under `refresh_token:{value}` with a Redis
/// TTL. Every operation is bounded by a short response timeout so a stalled
/// Redis degrades to the durable path instead of holding up the request;
/// the manager treats any error from here as a miss.
pub struct RedisTokenCache {
    client: RedisClient,
    response_timeout: Duration,
}

impl RedisTokenCache {
    pub fn new(client: RedisClient, config: &CacheConfig) -> Self {
        Self {
            client,
            response_timeout: Duration::from_secs(config.response_timeout),
        }
    }

    fn timed_out(op: &str) -> CacheError {
        CacheError::Backend(format!("{} timed out", op))
    }
}

#[async_trait]
impl TokenCache for RedisTokenCache {
    async fn get(&self, token: &str) -> Result<Option<CachedRefreshToken>, CacheError> {
        let key = cache_key(token);

        let value = timeout(self.response_timeout, self.client.get(&key))
            .await
            .map_err(|_| Self::timed_out("cache get"))?
            .map_err(|e| CacheError::Backend(e.to_string()))?;

        match value {
            Some(json) => {
                let record: CachedRefreshToken = serde_json::from_str(&json).map_err(|e| {
                    // A malformed entry is useless; drop it so the durable
                    // path repopulates a good one.
                    debug!("Discarding undecodable cache entry: {}", e);
                    CacheError::Serialization(e.to_string())
                })?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, record: &CachedRefreshToken, ttl_secs: u64) -> Result<(), CacheError> {
        let key = cache_key(&record.token);
        let json =
            serde_json::to_string(record).map_err(|e| CacheError::Serialization(e.to_string()))?;

        timeout(
            self.response_timeout,
            self.client.set_with_expiry(&key, &json, ttl_secs),
        )
        .await
        .map_err(|_| Self::timed_out("cache put"))?
        .map_err(|e| CacheError::Backend(e.to_string()))
    }

    async fn remove(&self, token: &str) -> Result<bool, CacheError> {
        let key = cache_key(token);

        timeout(self.response_timeout, self.client.delete(&key))
            .await
            .map_err(|_| Self::timed_out("cache remove"))?
            .map_err(|e| CacheError::Backend(e.to_string()))
    }
}
