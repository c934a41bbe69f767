//! Outbound email provider configuration

use serde::{Deserialize, Serialize};

/// Configuration for the HTTP email provider
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Provider API endpoint for sending messages
    pub api_url: String,

    /// Provider API key
    pub api_key: String,

    /// Sender address stamped on outbound mail
    pub from_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_url: String::from("https://api.mail.example.com/v1/send"),
            api_key: String::new(),
            from_address: String::from("no-reply@taskmanager.local"),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: std::env::var("EMAIL_API_URL").unwrap_or(defaults.api_url),
            api_key: std::env::var("EMAIL_API_KEY").unwrap_or(defaults.api_key),
            from_address: std::env::var("EMAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
        }
    }
}
