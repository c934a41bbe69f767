//! Mock token caches for service tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::token::CachedRefreshToken;

use super::cache::{CacheError, TokenCache};

/// In-memory cache that records operation counts
///
/// TTLs are stored but not enforced; tests that need entries to age out
/// remove them explicitly or go through the expiry checks in the manager.
pub struct MockTokenCache {
    entries: RwLock<HashMap<String, (CachedRefreshToken, u64)>>,
    gets: AtomicUsize,
    puts: AtomicUsize,
    removes: AtomicUsize,
}

impl MockTokenCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            gets: AtomicUsize::new(0),
            puts: AtomicUsize::new(0),
            removes: AtomicUsize::new(0),
        }
    }

    /// Number of entries currently cached
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// TTL the last `put` stored for a token, if cached
    pub async fn ttl_of(&self, token: &str) -> Option<u64> {
        self.entries.read().await.get(token).map(|(_, ttl)| *ttl)
    }

    /// Whether an entry exists for a token
    pub async fn contains(&self, token: &str) -> bool {
        self.entries.read().await.contains_key(token)
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn remove_count(&self) -> usize {
        self.removes.load(Ordering::SeqCst)
    }
}

impl Default for MockTokenCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenCache for MockTokenCache {
    async fn get(&self, token: &str) -> Result<Option<CachedRefreshToken>, CacheError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .entries
            .read()
            .await
            .get(token)
            .map(|(record, _)| record.clone()))
    }

    async fn put(&self, record: &CachedRefreshToken, ttl_secs: u64) -> Result<(), CacheError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.entries
            .write()
            .await
            .insert(record.token.clone(), (record.clone(), ttl_secs));
        Ok(())
    }

    async fn remove(&self, token: &str) -> Result<bool, CacheError> {
        self.removes.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.write().await.remove(token).is_some())
    }
}

/// Cache whose every operation fails, simulating a backend outage
pub struct FailingTokenCache;

#[async_trait]
impl TokenCache for FailingTokenCache {
    async fn get(&self, _token: &str) -> Result<Option<CachedRefreshToken>, CacheError> {
        Err(CacheError::Backend("connection refused".to_string()))
    }

    async fn put(&self, _record: &CachedRefreshToken, _ttl_secs: u64) -> Result<(), CacheError> {
        Err(CacheError::Backend("connection refused".to_string()))
    }

    async fn remove(&self, _token: &str) -> Result<bool, CacheError> {
        Err(CacheError::Backend("connection refused".to_string()))
    }
}
