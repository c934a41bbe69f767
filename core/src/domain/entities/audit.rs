//! Audit event entity for recording authentication events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::Account;

/// Event kinds recorded by the audit trail
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEventKind {
    Login,
    Logout,
    LogoutAll,
    Register,
    TokenRefresh,
    PasswordReset,
}

impl AuditEventKind {
    /// Convert to string representation for storage and log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "LOGIN",
            Self::Logout => "LOGOUT",
            Self::LogoutAll => "LOGOUT_ALL",
            Self::Register => "REGISTER",
            Self::TokenRefresh => "TOKEN_REFRESH",
            Self::PasswordReset => "PASSWORD_RESET",
        }
    }

    /// Whether this event marks a security-sensitive bulk revocation
    pub fn is_security_sensitive(&self) -> bool {
        matches!(self, Self::LogoutAll | Self::PasswordReset)
    }
}

/// A single audit trail entry
///
/// Recording is fire-and-forget: a failed write must never block or fail
/// the request that produced the event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Unique identifier for the event
    pub id: Uuid,

    /// What happened
    pub kind: AuditEventKind,

    /// Account the event concerns
    pub account_id: Uuid,

    /// Account display name at the time of the event
    pub account_name: String,

    /// Account email at the time of the event
    pub email: String,

    /// Source IP address, if known
    pub ip_address: Option<String>,

    /// Client descriptor (user-agent string), if known
    pub user_agent: Option<String>,

    /// Timestamp when the event occurred
    pub created_at: DateTime<Utc>,
}

impl AuditEvent {
    /// Creates a new audit event for the given account
    pub fn new(
        kind: AuditEventKind,
        account: &Account,
        ip_address: Option<String>,
        user_agent: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            account_id: account.id,
            account_name: account.name.clone(),
            email: account.email.clone(),
            ip_address,
            user_agent,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_strings() {
        assert_eq!(AuditEventKind::Login.as_str(), "LOGIN");
        assert_eq!(AuditEventKind::LogoutAll.as_str(), "LOGOUT_ALL");
        assert_eq!(AuditEventKind::PasswordReset.as_str(), "PASSWORD_RESET");
    }

    #[test]
    fn test_security_sensitive_kinds() {
        assert!(AuditEventKind::LogoutAll.is_security_sensitive());
        assert!(AuditEventKind::PasswordReset.is_security_sensitive());
        assert!(!AuditEventKind::Login.is_security_sensitive());
        assert!(!AuditEventKind::TokenRefresh.is_security_sensitive());
    }

    #[test]
    fn test_event_captures_account_fields() {
        let now = Utc::now();
        let account = Account::new("Alice", "a@x.com", "digest", now);
        let event = AuditEvent::new(
            AuditEventKind::Login,
            &account,
            Some("10.0.0.1".to_string()),
            None,
            now,
        );

        assert_eq!(event.account_id, account.id);
        assert_eq!(event.email, "a@x.com");
        assert_eq!(event.ip_address.as_deref(), Some("10.0.0.1"));
        assert_eq!(event.created_at, now);
    }
}
