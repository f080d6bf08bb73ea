//! Submission boundary between the form model and the dispatcher

use crate::core::notification::NotificationMessage;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Acknowledgement returned for an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub dispatch_id: Uuid,
    pub records_count: usize,
    /// True when no transport was configured and the notification was logged
    pub delivered_via_fallback: bool,
    /// Transport-assigned message id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

/// Where a validated batch is sent
///
/// Implemented in-process by the notification dispatcher and over HTTP by
/// the submission client. An `Err` means the batch was not accepted and may
/// be resubmitted unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn submit(&self, message: &NotificationMessage) -> Result<SubmissionReceipt>;
}
