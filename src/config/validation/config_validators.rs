//! Core configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, warn};

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // A bare address or `Name <address>`
        Regex::new(r"^(?:[^<>]*<)?[^@\s<>]+@[^@\s<>]+\.[^@\s<>]+>?$")
            .unwrap_or_else(|e| panic!("invalid e-mail pattern: {e}"))
    })
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating server configuration");

        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
        }

        if self.timeout == 0 {
            return Err("Server timeout must be greater than 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size must be greater than 0".to_string());
        }

        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.allows_all_origins() {
            if self.allow_credentials {
                return Err(
                    "CORS cannot allow all origins (*) when credentials are enabled".to_string(),
                );
            }
            warn!("CORS allows all origins. This may be insecure for production.");
        }
        Ok(())
    }
}

impl Validate for NotificationConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating notification configuration");

        let api_base = url::Url::parse(&self.api_base)
            .map_err(|e| format!("Invalid transport api_base '{}': {}", self.api_base, e))?;
        if !matches!(api_base.scheme(), "http" | "https") {
            return Err(format!(
                "Transport api_base must use http or https, got '{}'",
                api_base.scheme()
            ));
        }

        if !email_pattern().is_match(self.from_address.trim()) {
            return Err(format!("Invalid sender address: '{}'", self.from_address));
        }

        if !email_pattern().is_match(self.recipient.trim()) {
            return Err(format!("Invalid recipient address: '{}'", self.recipient));
        }

        if self.timeout_seconds == 0 {
            return Err("Transport timeout must be greater than 0".to_string());
        }

        if !self.transport_configured() {
            warn!("No transport API key configured; notifications will be logged only");
        }

        Ok(())
    }
}
