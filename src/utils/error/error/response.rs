//! HTTP response handling for errors

use super::types::PartPulseError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl PartPulseError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            PartPulseError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            PartPulseError::EmptyBatch => (StatusCode::BAD_REQUEST, "EMPTY_BATCH"),
            PartPulseError::UnknownField { .. } => (StatusCode::BAD_REQUEST, "UNKNOWN_FIELD"),
            PartPulseError::InvalidFieldValue { .. } => {
                (StatusCode::BAD_REQUEST, "INVALID_FIELD_VALUE")
            }
            PartPulseError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            PartPulseError::Serialization(_) => (StatusCode::BAD_REQUEST, "PARSING_ERROR"),
            PartPulseError::Transport { .. } => (StatusCode::BAD_GATEWAY, "TRANSPORT_ERROR"),
            PartPulseError::HttpClient(_) => (StatusCode::BAD_GATEWAY, "NETWORK_ERROR"),
            PartPulseError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            PartPulseError::Yaml(_) | PartPulseError::Io(_) | PartPulseError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }
}

impl ResponseError for PartPulseError {
    fn status_code(&self) -> StatusCode {
        self.status_and_code().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code) = self.status_and_code();

        let message = match self {
            PartPulseError::Yaml(_) | PartPulseError::Io(_) | PartPulseError::Internal(_) => {
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
                request_id: None,
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
}
