//! Account entity owned by the credential store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account
///
/// The identity (`id`) is immutable; `email`, `name`, and `password_hash`
/// may change over the account's lifetime. The password digest is produced
/// by the pluggable [`PasswordHasher`](crate::services::hasher::PasswordHasher)
/// and is never inspected by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address (unique across accounts)
    pub email: String,

    /// Password digest
    pub password_hash: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account with a fresh identity
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_creation() {
        let now = Utc::now();
        let account = Account::new("Alice", "a@x.com", "digest", now);

        assert_eq!(account.name, "Alice");
        assert_eq!(account.email, "a@x.com");
        assert_eq!(account.password_hash, "digest");
        assert_eq!(account.created_at, now);
    }

    #[test]
    fn test_account_ids_are_unique() {
        let now = Utc::now();
        let a = Account::new("A", "a@x.com", "d", now);
        let b = Account::new("B", "b@x.com", "d", now);
        assert_ne!(a.id, b.id);
    }
}
