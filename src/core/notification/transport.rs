//! E-mail transport implementations

use crate::config::NotificationConfig;
use crate::utils::error::{PartPulseError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// A rendered notification ready to hand to a transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// What the transport reported back on acceptance
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TransportReceipt {
    /// Provider message id, when the provider returns one
    #[serde(default)]
    pub id: Option<String>,
}

/// External e-mail transport
#[async_trait::async_trait]
pub trait EmailTransport: Send + Sync + std::fmt::Debug {
    /// Send one message, failing with [`PartPulseError::Transport`] when the
    /// provider rejects it or cannot be reached
    async fn send(&self, email: &OutboundEmail) -> Result<TransportReceipt>;

    /// Get transport name
    fn name(&self) -> &str;
}

/// Resend HTTP API transport
pub struct ResendTransport {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ResendTransport {
    pub fn new(api_key: impl Into<String>, api_base: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PartPulseError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/emails", api_base.trim_end_matches('/')),
            api_key: api_key.into(),
        })
    }

    /// Build from configuration; `None` when no API key is configured
    pub fn from_config(config: &NotificationConfig) -> Result<Option<Self>> {
        config
            .api_key()
            .map(|key| {
                Self::new(
                    key,
                    &config.api_base,
                    Duration::from_secs(config.timeout_seconds),
                )
            })
            .transpose()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for ResendTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendTransport")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"***")
            .finish()
    }
}

/// Pull the provider's own error message out of a rejection body
fn rejection_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait::async_trait]
impl EmailTransport for ResendTransport {
    async fn send(&self, email: &OutboundEmail) -> Result<TransportReceipt> {
        debug!(endpoint = %self.endpoint, subject = %email.subject, "Sending e-mail");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| PartPulseError::transport(None, format!("Failed to reach e-mail API: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = rejection_detail(&body);
            warn!(status = status.as_u16(), detail = %detail, "E-mail API rejected message");
            return Err(PartPulseError::transport(Some(status.as_u16()), detail));
        }

        // Accepted; a body without an id is still a successful send.
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    fn name(&self) -> &str {
        "resend"
    }
}
