//! Password reset token entity.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Single-use, time-boxed password reset token
///
/// At most one live token exists per email; issuing a new one deletes any
/// prior token for that address. The token is deleted on successful
/// redemption or lazily once its expiry is observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResetToken {
    /// Opaque token value, embedded in the reset link
    pub token: String,

    /// Email address the reset was requested for
    pub email: String,

    /// Timestamp when the token was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,
}

impl PasswordResetToken {
    /// Creates a new reset token for the given email
    pub fn new(email: impl Into<String>, now: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
            email: email.into(),
            created_at: now,
            expires_at: now + lifetime,
        }
    }

    /// Checks whether the token has expired at the given instant
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_token_creation() {
        let now = Utc::now();
        let token = PasswordResetToken::new("a@x.com", now, Duration::minutes(30));

        assert_eq!(token.email, "a@x.com");
        assert_eq!(token.expires_at, now + Duration::minutes(30));
        assert!(!token.is_expired(now));
    }

    #[test]
    fn test_reset_token_expiration() {
        let now = Utc::now();
        let token = PasswordResetToken::new("a@x.com", now, Duration::minutes(30));

        assert!(!token.is_expired(now + Duration::minutes(30)));
        assert!(token.is_expired(now + Duration::minutes(31)));
    }
}
