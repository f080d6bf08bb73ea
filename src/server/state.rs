//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::notification::NotificationDispatcher;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Both fields are read-only after startup; every request gets its own
/// notification message, so nothing mutable is shared between submissions.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<Config>,
    /// Notification dispatcher built from `config.notification`
    pub dispatcher: Arc<NotificationDispatcher>,
}

impl AppState {
    /// Build the state, constructing the dispatcher from the configuration
    pub fn new(config: Config) -> Result<Self> {
        let dispatcher = NotificationDispatcher::new(config.notification.clone())?;
        Ok(Self::with_dispatcher(config, dispatcher))
    }

    /// Build the state around an existing dispatcher
    pub fn with_dispatcher(config: Config, dispatcher: NotificationDispatcher) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
