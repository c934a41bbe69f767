//! Mock email service implementation
//!
//! Logs messages instead of delivering them. Used in development and in
//! environments without provider credentials.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

use tm_core::services::notifier::EmailNotifier;

use super::mask_email;

/// Mock email service for development and testing
#[derive(Clone)]
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures
    simulate_failure: bool,
}

impl MockEmailService {
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Create a mock service that fails every send
    pub fn failing() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailNotifier for MockEmailService {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        if self.simulate_failure {
            warn!("Mock email service simulating failure for {}", mask_email(to));
            return Err("Simulated email delivery failure".to_string());
        }

        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            target: "email_service",
            provider = "mock",
            to = %mask_email(to),
            subject = %subject,
            message_number = count,
            "Mock email delivered"
        );
        tracing::debug!("Mock email body:\n{}", body);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_send_counts_messages() {
        let service = MockEmailService::new();

        service.send("a@x.com", "Hi", "body").await.unwrap();
        service.send("b@x.com", "Hi", "body").await.unwrap();

        assert_eq!(service.message_count(), 2);
    }

    #[tokio::test]
    async fn test_failing_mock_reports_error() {
        let service = MockEmailService::failing();

        let result = service.send("a@x.com", "Hi", "body").await;

        assert!(result.is_err());
        assert_eq!(service.message_count(), 0);
    }
}
