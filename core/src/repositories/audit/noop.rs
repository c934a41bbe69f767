//! No-op implementation of AuditLogRepository for when auditing is not needed

use async_trait::async_trait;

use super::AuditLogRepository;
use crate::domain::entities::audit::AuditEvent;
use crate::errors::DomainError;

/// No-op implementation of AuditLogRepository
pub struct NoOpAuditLogRepository;

impl NoOpAuditLogRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpAuditLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditLogRepository for NoOpAuditLogRepository {
    async fn record(&self, _event: &AuditEvent) -> Result<(), DomainError> {
        Ok(())
    }
}
