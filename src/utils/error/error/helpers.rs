//! Helper functions for creating specific error types

use super::types::PartPulseError;

#[allow(dead_code)]
impl PartPulseError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn transport<S: Into<String>>(status: Option<u16>, detail: S) -> Self {
        Self::Transport {
            status,
            detail: detail.into(),
        }
    }

    pub fn invalid_field<F: Into<String>, R: Into<String>>(field: F, reason: R) -> Self {
        Self::InvalidFieldValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether resubmitting the same batch may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::HttpClient(_))
    }
}
