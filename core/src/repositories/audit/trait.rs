//! Audit log repository trait defining the interface for audit trail sinks.

use async_trait::async_trait;

use crate::domain::entities::audit::AuditEvent;
use crate::errors::DomainError;

/// Repository trait for recording audit events
///
/// Callers treat recording as fire-and-forget: implementations should write
/// efficiently, and a returned error is logged and dropped rather than
/// failing the authentication flow that produced the event.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Record a single audit event
    async fn record(&self, event: &AuditEvent) -> Result<(), DomainError>;
}
