//! HTTP submission client

use crate::core::batch::{SubmissionReceipt, SubmissionTransport};
use crate::core::notification::NotificationMessage;
use crate::server::routes::ApiResponse;
use crate::utils::error::{ErrorResponse, PartPulseError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Submits batches to a PartPulse server over HTTP
#[derive(Debug, Clone)]
pub struct HttpSubmissionClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSubmissionClient {
    /// Create a client for the server at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base = Url::parse(base_url)
            .map_err(|e| PartPulseError::config(format!("Invalid server URL '{}': {}", base_url, e)))?;
        // Keep any path prefix the server is mounted under
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base
            .join("api/notifications")
            .map_err(|e| PartPulseError::config(format!("Invalid server URL '{}': {}", base_url, e)))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("partpulse/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PartPulseError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Turn a server error body back into the matching error variant
fn server_error(status: u16, body: &str) -> PartPulseError {
    let Ok(response) = serde_json::from_str::<ErrorResponse>(body) else {
        return PartPulseError::transport(Some(status), body.trim());
    };

    let message = response.error.message;
    match response.error.code.as_str() {
        "TRANSPORT_ERROR" | "NETWORK_ERROR" => PartPulseError::transport(Some(status), message),
        "VALIDATION_ERROR" | "EMPTY_BATCH" | "UNKNOWN_FIELD" | "INVALID_FIELD_VALUE"
        | "BAD_REQUEST" | "PARSING_ERROR" => PartPulseError::bad_request(message),
        _ => PartPulseError::internal(format!("server returned {}: {}", status, message)),
    }
}

#[async_trait]
impl SubmissionTransport for HttpSubmissionClient {
    async fn submit(&self, message: &NotificationMessage) -> Result<SubmissionReceipt> {
        debug!(endpoint = %self.endpoint, records = message.records_count(), "Posting batch");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(message)
            .send()
            .await
            .map_err(|e| PartPulseError::transport(None, format!("Failed to reach server: {}", e)))?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Server rejected submission");
            return Err(server_error(status.as_u16(), &body));
        }

        let response: ApiResponse<SubmissionReceipt> = serde_json::from_str(&body)?;
        response
            .data
            .ok_or_else(|| PartPulseError::internal("server response carried no receipt"))
    }
}
