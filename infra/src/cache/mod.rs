//! Redis cache layer: client plumbing and the fast token cache

pub mod redis_client;
pub mod token_cache;

pub use redis_client::RedisClient;
pub use token_cache::RedisTokenCache;
