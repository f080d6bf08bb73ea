//! Error types for PartPulse

use crate::core::batch::ValidationFailures;
use crate::core::records::RecordKind;
use thiserror::Error;

/// Result type alias for PartPulse
pub type Result<T> = std::result::Result<T, PartPulseError>;

/// Main error type for PartPulse
#[derive(Error, Debug)]
pub enum PartPulseError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// One or more drafts are missing required fields
    #[error("Validation error: {0}")]
    Validation(ValidationFailures),

    /// A batch with no drafts reached submission or dispatch
    #[error("Validation error: batch contains no records")]
    EmptyBatch,

    /// Field name not declared by the record kind
    #[error("Unknown field '{field}' for {kind} records")]
    UnknownField { kind: RecordKind, field: String },

    /// Field-level value check failed
    #[error("Invalid value for '{field}': {reason}")]
    InvalidFieldValue { field: String, reason: String },

    /// The e-mail transport was reached and reported a failure
    #[error("Transport error: {detail}")]
    Transport { status: Option<u16>, detail: String },

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
