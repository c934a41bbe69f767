//! Mock implementation of AuditLogRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::AuditLogRepository;
use crate::domain::entities::audit::{AuditEvent, AuditEventKind};
use crate::errors::DomainError;

/// Capturing audit log for tests
pub struct MockAuditLogRepository {
    events: Arc<RwLock<Vec<AuditEvent>>>,
}

impl MockAuditLogRepository {
    /// Create a new mock audit log
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// All recorded events
    pub async fn events(&self) -> Vec<AuditEvent> {
        self.events.read().await.clone()
    }

    /// Count of recorded events of the given kind
    pub async fn count_of(&self, kind: AuditEventKind) -> usize {
        self.events
            .read()
            .await
            .iter()
            .filter(|e| e.kind == kind)
            .count()
    }
}

impl Default for MockAuditLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditLogRepository for MockAuditLogRepository {
    async fn record(&self, event: &AuditEvent) -> Result<(), DomainError> {
        self.events.write().await.push(event.clone());
        Ok(())
    }
}
