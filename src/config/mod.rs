//! Configuration management for PartPulse
//!
//! Configuration is read from a YAML file, then overridden from the
//! environment, then validated. The resulting value is handed to the
//! server and the notification dispatcher at construction time.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{PartPulseError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "config/partpulse.yaml";

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Notification rendering and delivery configuration
    #[serde(default)]
    pub notification: NotificationConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PartPulseError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| PartPulseError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables on top of defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file when it exists, otherwise defaults, then apply the
    /// environment on top
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let mut config = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await?
        } else {
            info!(
                "Configuration file {:?} not found, using defaults",
                path
            );
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (normally the process environment)
    ///
    /// Recognised keys: `RESEND_API_KEY`, `RESEND_API_BASE`, `EMAIL_FROM`,
    /// `NOTIFY_RECIPIENT`, `PARTPULSE_HOST`, `PARTPULSE_PORT`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("RESEND_API_KEY") {
            self.notification.api_key = Some(key);
        }
        if let Some(base) = lookup("RESEND_API_BASE") {
            self.notification.api_base = base;
        }
        if let Some(from) = lookup("EMAIL_FROM").filter(|v| !v.trim().is_empty()) {
            self.notification.from_address = from;
        }
        if let Some(recipient) = lookup("NOTIFY_RECIPIENT").filter(|v| !v.trim().is_empty()) {
            self.notification.recipient = recipient;
        }
        if let Some(host) = lookup("PARTPULSE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PARTPULSE_PORT") {
            self.server.port = port.parse().map_err(|e| {
                PartPulseError::Config(format!("Invalid PARTPULSE_PORT '{}': {}", port, e))
            })?;
        }
        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get notification configuration
    pub fn notification(&self) -> &NotificationConfig {
        &self.notification
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        Validate::validate(&self.server)
            .map_err(|e| PartPulseError::Config(format!("Server config error: {}", e)))?;

        Validate::validate(&self.notification)
            .map_err(|e| PartPulseError::Config(format!("Notification config error: {}", e)))?;

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PartPulseError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
