//! Token services for access-token issuance and refresh-token lifecycle
//!
//! This module handles all token-related operations:
//! - Signed access token issuance and verification
//! - Refresh token creation, validation, and deletion under a cache-aside
//!   discipline against the fast cache
//! - Best-effort cache eviction on every revocation path

mod cache;
mod config;
mod issuer;
mod manager;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
mod tests;

pub use cache::{cache_key, CacheError, NoOpTokenCache, TokenCache, TOKEN_CACHE_PREFIX};
pub use config::TokenConfig;
pub use issuer::{Claims, TokenIssuer};
pub use manager::RefreshTokenManager;
