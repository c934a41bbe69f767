//! Outbound notification capability.

use async_trait::async_trait;

/// Trait for outbound email delivery
///
/// Invoked fire-and-forget: callers log a returned error and continue.
/// Delivery guarantees are out of scope for this core.
#[async_trait]
pub trait EmailNotifier: Send + Sync {
    /// Send a message to the given address
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
}
