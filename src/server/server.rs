//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and the application factory.

use crate::config::{Config, ServerConfig};
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{PartPulseError, Result};
use actix_cors::Cors;
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use std::time::Duration;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");
        let state = AppState::new(config.clone())?;
        Ok(Self::with_state(state))
    }

    /// Create a server around prepared state
    pub fn with_state(state: AppState) -> Self {
        Self {
            config: state.config.server.clone(),
            state,
        }
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} with {} workers", bind_addr, workers);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || create_app(state.clone()))
            .workers(workers)
            .client_request_timeout(Duration::from_secs(self.config.timeout))
            .bind(&bind_addr)
            .map_err(|e| PartPulseError::server(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| PartPulseError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

fn build_cors(server: &ServerConfig) -> Cors {
    let cors_config = &server.cors;
    let mut cors = Cors::default();

    if !cors_config.enabled {
        return cors;
    }

    if cors_config.allows_all_origins() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<actix_web::http::Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    if !methods.is_empty() {
        cors = cors.allowed_methods(methods);
    }

    let headers: Vec<actix_web::http::header::HeaderName> = cors_config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    if !headers.is_empty() {
        cors = cors.allowed_headers(headers);
    }

    cors = cors.max_age(cors_config.max_age as usize);

    if cors_config.allow_credentials {
        cors = cors.supports_credentials();
    }
    cors
}

/// Create the Actix-web application
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let server = &state.config.server;
    let cors = build_cors(server);

    let json_config = web::JsonConfig::default()
        .limit(server.max_body_size)
        .error_handler(|err, _req| {
            warn!(error = %err, "Rejected request body");
            PartPulseError::bad_request(format!("Invalid request body: {}", err)).into()
        });

    App::new()
        .app_data(state)
        .app_data(json_config)
        .wrap(cors)
        .wrap(TracingLogger::default())
        .wrap(DefaultHeaders::new().add(("Server", "PartPulse")))
        .configure(routes::configure_routes)
}
