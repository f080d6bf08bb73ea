//! Server-side projection of a submitted batch

use crate::core::batch::ValidatedBatch;
use crate::core::records::{RecordDraft, RecordKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Drafts plus submitter and capture time
///
/// Owned by a single dispatch request. The wire names match the submission
/// payload (`forms`, `technicianName`, `submittedAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    #[serde(rename = "forms")]
    drafts: Vec<RecordDraft>,
    #[serde(rename = "technicianName")]
    submitter: String,
    #[serde(rename = "submittedAt")]
    submitted_at: DateTime<Utc>,
}

impl NotificationMessage {
    pub fn new(
        drafts: Vec<RecordDraft>,
        submitter: impl Into<String>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            drafts,
            submitter: submitter.into(),
            submitted_at,
        }
    }

    /// Build from a batch that passed validation
    pub fn from_batch(
        batch: ValidatedBatch,
        submitter: impl Into<String>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self::new(batch.into_drafts(), submitter, submitted_at)
    }

    pub fn drafts(&self) -> &[RecordDraft] {
        &self.drafts
    }

    pub fn submitter(&self) -> &str {
        &self.submitter
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    pub fn records_count(&self) -> usize {
        self.drafts.len()
    }

    /// Kind of the first record, if any
    pub fn kind(&self) -> Option<RecordKind> {
        self.drafts.first().map(RecordDraft::kind)
    }
}
