//! HTTP email provider client

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, error, info};

use tm_core::services::notifier::EmailNotifier;
use tm_shared::config::EmailConfig;

use super::mask_email;

/// Email notifier backed by an HTTP delivery provider
///
/// Posts one JSON message per send to the provider endpoint, authenticated
/// with a bearer API key. Callers treat delivery as fire-and-forget, so the
/// error path here only needs to produce a loggable reason.
pub struct HttpEmailNotifier {
    client: reqwest::Client,
    config: EmailConfig,
}

#[derive(Serialize)]
struct OutboundMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

impl HttpEmailNotifier {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create with a preconfigured HTTP client (custom timeouts, proxies)
    pub fn with_client(client: reqwest::Client, config: EmailConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl EmailNotifier for HttpEmailNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        let message = OutboundMessage {
            from: &self.config.from_address,
            to,
            subject,
            text: body,
        };

        debug!("Sending email to {}", mask_email(to));

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&message)
            .send()
            .await
            .map_err(|e| {
                error!("Email provider request failed: {}", e);
                format!("request failed: {}", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            error!(
                "Email provider rejected message to {}: {}",
                mask_email(to),
                status
            );
            return Err(format!("provider returned {}", status));
        }

        info!(to = %mask_email(to), "Email accepted by provider");
        Ok(())
    }
}
