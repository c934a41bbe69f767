//! Refresh token entities for session management.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Refresh token stored durably in the database
///
/// The opaque token value doubles as the primary key. A token is created on
/// login or registration and removed on logout, logout-all, password reset,
/// or lazily once its expiry is observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Opaque token value, also the primary key
    pub token: String,

    /// Account this token belongs to
    pub account_id: Uuid,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires; always after `created_at`
    pub expires_at: DateTime<Utc>,

    /// Source IP address recorded at creation, if known
    pub ip_address: Option<String>,

    /// Client descriptor (user-agent string) recorded at creation, if known
    pub user_agent: Option<String>,
}

impl RefreshToken {
    /// Creates a new refresh token with an unguessable value
    pub fn new(
        account_id: Uuid,
        now: DateTime<Utc>,
        lifetime: Duration,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
            account_id,
            created_at: now,
            expires_at: now + lifetime,
            ip_address,
            user_agent,
        }
    }

    /// Checks whether the token has expired at the given instant
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Time remaining until expiration, or zero if already expired
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

/// Denormalized copy of a [`RefreshToken`] held in the fast cache
///
/// The cache entry carries its own TTL, independent of the durable row's
/// `expires_at`. The two are eventually consistent and must never be assumed
/// identical; readers always re-check `expires_at` on the record itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedRefreshToken {
    pub token: String,
    pub account_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl From<&RefreshToken> for CachedRefreshToken {
    fn from(token: &RefreshToken) -> Self {
        Self {
            token: token.token.clone(),
            account_id: token.account_id,
            created_at: token.created_at,
            expires_at: token.expires_at,
            ip_address: token.ip_address.clone(),
            user_agent: token.user_agent.clone(),
        }
    }
}

impl From<CachedRefreshToken> for RefreshToken {
    fn from(cached: CachedRefreshToken) -> Self {
        Self {
            token: cached.token,
            account_id: cached.account_id,
            created_at: cached.created_at,
            expires_at: cached.expires_at,
            ip_address: cached.ip_address,
            user_agent: cached.user_agent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_token_creation() {
        let account_id = Uuid::new_v4();
        let now = Utc::now();
        let token = RefreshToken::new(
            account_id,
            now,
            Duration::days(7),
            Some("10.0.0.1".to_string()),
            Some("TestAgent/1.0".to_string()),
        );

        assert_eq!(token.account_id, account_id);
        assert_eq!(token.created_at, now);
        assert_eq!(token.expires_at, now + Duration::days(7));
        assert!(token.expires_at > token.created_at);
        assert!(!token.is_expired(now));
    }

    #[test]
    fn test_token_values_are_unique() {
        let account_id = Uuid::new_v4();
        let now = Utc::now();
        let a = RefreshToken::new(account_id, now, Duration::days(7), None, None);
        let b = RefreshToken::new(account_id, now, Duration::days(7), None, None);
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn test_refresh_token_expiration() {
        let now = Utc::now();
        let token = RefreshToken::new(Uuid::new_v4(), now, Duration::days(7), None, None);

        assert!(!token.is_expired(now + Duration::days(7)));
        assert!(token.is_expired(now + Duration::days(7) + Duration::seconds(1)));
    }

    #[test]
    fn test_remaining_lifetime() {
        let now = Utc::now();
        let token = RefreshToken::new(Uuid::new_v4(), now, Duration::days(7), None, None);

        assert_eq!(token.remaining(now), Duration::days(7));
        assert_eq!(token.remaining(now + Duration::days(3)), Duration::days(4));
        assert_eq!(token.remaining(now + Duration::days(8)), Duration::zero());
    }

    #[test]
    fn test_cached_record_round_trip() {
        let now = Utc::now();
        let token = RefreshToken::new(
            Uuid::new_v4(),
            now,
            Duration::days(7),
            Some("10.0.0.1".to_string()),
            None,
        );

        let cached = CachedRefreshToken::from(&token);
        let restored: RefreshToken = cached.into();
        assert_eq!(token, restored);
    }

    #[test]
    fn test_cached_record_serialization() {
        let now = Utc::now();
        let token = RefreshToken::new(Uuid::new_v4(), now, Duration::days(7), None, None);
        let cached = CachedRefreshToken::from(&token);

        let json = serde_json::to_string(&cached).unwrap();
        let deserialized: CachedRefreshToken = serde_json::from_str(&json).unwrap();
        assert_eq!(cached, deserialized);
    }
}
