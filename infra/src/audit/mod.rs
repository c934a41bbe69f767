//! Audit trail sink backed by structured logging

use async_trait::async_trait;
use tracing::{info, warn};

use tm_core::domain::entities::audit::AuditEvent;
use tm_core::errors::DomainError;
use tm_core::repositories::AuditLogRepository;

/// Audit sink that writes events as structured log lines
///
/// Each event becomes one line tagged `[KIND]`, e.g. `[LOGIN]` or
/// `[PASSWORD_RESET]`. Bulk revocations are emitted at warn level so they
/// stand out during incident review. This sink cannot fail, which suits
/// the fire-and-forget contract of the trait.
pub struct TracingAuditLog;

impl TracingAuditLog {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingAuditLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditLogRepository for TracingAuditLog {
    async fn record(&self, event: &AuditEvent) -> Result<(), DomainError> {
        let ip = event.ip_address.as_deref().unwrap_or("-");
        let agent = event.user_agent.as_deref().unwrap_or("-");

        if event.kind.is_security_sensitive() {
            warn!(
                target: "audit",
                account_id = %event.account_id,
                email = %event.email,
                ip = %ip,
                user_agent = %agent,
                "[{}] {} ({})",
                event.kind.as_str(),
                event.account_name,
                event.email
            );
        } else {
            info!(
                target: "audit",
                account_id = %event.account_id,
                email = %event.email,
                ip = %ip,
                user_agent = %agent,
                "[{}] {} ({})",
                event.kind.as_str(),
                event.account_name,
                event.email
            );
        }

        Ok(())
    }
}
