//! Notification transport configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Settings for rendering and delivering batch notifications
///
/// The dispatcher is built from this value once; nothing is read from the
/// environment at dispatch time. A missing or blank `api_key` selects the
/// logging fallback instead of the e-mail transport.
#[derive(Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Transport API key (`RESEND_API_KEY`)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Transport API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Sender address (`EMAIL_FROM`)
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Fixed recipient of every notification
    #[serde(default = "default_recipient")]
    pub recipient: String,
    /// Transport request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_api_base(),
            from_address: default_from_address(),
            recipient: default_recipient(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl NotificationConfig {
    /// API key, if one is configured and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Whether an external transport is configured
    pub fn transport_configured(&self) -> bool {
        self.api_key().is_some()
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for NotificationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationConfig")
            .field("api_key", &self.api_key().map(|_| "***"))
            .field("api_base", &self.api_base)
            .field("from_address", &self.from_address)
            .field("recipient", &self.recipient)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}
