//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::Config;
use crate::core::notification::NotificationDispatcher;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::utils::error::{PartPulseError, Result};
use std::path::Path;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    dispatcher: Option<NotificationDispatcher>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a prepared dispatcher instead of building one from the configuration
    pub fn with_dispatcher(mut self, dispatcher: NotificationDispatcher) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| PartPulseError::Config("Configuration is required".to_string()))?;

        match self.dispatcher {
            Some(dispatcher) => Ok(HttpServer::with_state(AppState::with_dispatcher(
                config, dispatcher,
            ))),
            None => HttpServer::new(&config),
        }
    }
}

/// Load configuration from `config_path` (plus the environment) and serve
pub async fn run_server(config_path: &Path) -> Result<()> {
    info!("Starting PartPulse notification service");

    let config = Config::load(config_path).await?;
    let server = ServerBuilder::new().with_config(config).build()?;

    info!(
        "Server starting at: http://{} (transport: {})",
        server.config().address(),
        server.state().dispatcher.transport_name()
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /api/notifications - Submit a batch");
    info!("   POST /api/send-internal-transfer-email - Submit a batch (legacy path)");

    server.start().await
}
