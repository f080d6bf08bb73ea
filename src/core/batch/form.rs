//! Multi-record form state

use super::submission::{SubmissionReceipt, SubmissionTransport};
use super::validation::{BatchValidation, ValidationFailures, validate_batch};
use crate::core::notification::NotificationMessage;
use crate::core::records::{DraftId, DraftIdGenerator, RecordDraft, RecordKind};
use crate::utils::error::Result;
use chrono::Utc;
use tracing::{debug, info, warn};

/// How a submit call ended when it did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted; the form now holds a single fresh draft
    Submitted(SubmissionReceipt),
    /// Blocked by validation; nothing was sent and the drafts are unchanged
    Rejected(ValidationFailures),
}

/// Ordered drafts of one submission session
///
/// Always holds at least one draft. There is no remove operation; the only
/// reset is the wholesale replacement after a successful submission.
#[derive(Debug, Clone)]
pub struct BatchForm {
    kind: RecordKind,
    submitter: String,
    drafts: Vec<RecordDraft>,
    ids: DraftIdGenerator,
}

impl BatchForm {
    /// Create a batch with one empty draft
    pub fn new(kind: RecordKind, submitter: impl Into<String>) -> Self {
        let mut form = Self {
            kind,
            submitter: submitter.into(),
            drafts: Vec::with_capacity(1),
            ids: DraftIdGenerator::new(),
        };
        let draft = form.fresh_draft();
        form.drafts.push(draft);
        form
    }

    fn fresh_draft(&mut self) -> RecordDraft {
        RecordDraft::new(self.ids.next_id(), self.kind).with_date(Utc::now().date_naive())
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn submitter(&self) -> &str {
        &self.submitter
    }

    pub fn drafts(&self) -> &[RecordDraft] {
        &self.drafts
    }

    pub fn draft(&self, id: DraftId) -> Option<&RecordDraft> {
        self.drafts.iter().find(|d| d.id() == id)
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    /// Id of the first draft
    pub fn first_id(&self) -> DraftId {
        self.drafts[0].id()
    }

    /// Append an empty draft and return its id
    pub fn add_draft(&mut self) -> DraftId {
        let draft = self.fresh_draft();
        let id = draft.id();
        self.drafts.push(draft);
        debug!(draft_id = %id, drafts = self.drafts.len(), "Draft added");
        id
    }

    /// Replace one field on the draft with `id`
    ///
    /// Returns `Ok(false)` without changes when no draft has that id.
    pub fn update_field(&mut self, id: DraftId, field: &str, value: impl Into<String>) -> Result<bool> {
        match self.drafts.iter_mut().find(|d| d.id() == id) {
            Some(draft) => {
                draft.set_field(field, value)?;
                Ok(true)
            }
            None => {
                debug!(draft_id = %id, field, "Update ignored, no such draft");
                Ok(false)
            }
        }
    }

    /// Check every draft for missing required fields
    pub fn validate_for_submission(&self) -> BatchValidation {
        validate_batch(self.kind, &self.drafts)
    }

    /// Validate, then hand the batch to `transport`
    ///
    /// On acceptance the form resets to one fresh draft. On rejection or
    /// transport failure the drafts are left as they were so the user can
    /// correct or retry. The exclusive borrow keeps a second submission from
    /// starting while this one is in flight.
    pub async fn submit<T>(&mut self, transport: &T) -> Result<SubmitOutcome>
    where
        T: SubmissionTransport + ?Sized,
    {
        let batch = match self.validate_for_submission() {
            BatchValidation::Valid(batch) => batch,
            BatchValidation::Invalid(failures) => {
                info!(
                    kind = %self.kind,
                    failing_drafts = failures.len(),
                    "Submission blocked by validation"
                );
                return Ok(SubmitOutcome::Rejected(failures));
            }
        };

        let message = NotificationMessage::from_batch(batch, self.submitter.clone(), Utc::now());
        info!(
            kind = %self.kind,
            records = message.records_count(),
            "Submitting batch"
        );

        match transport.submit(&message).await {
            Ok(receipt) => {
                info!(
                    dispatch_id = %receipt.dispatch_id,
                    via_fallback = receipt.delivered_via_fallback,
                    "Batch accepted"
                );
                self.reset();
                Ok(SubmitOutcome::Submitted(receipt))
            }
            Err(e) => {
                warn!(error = %e, "Submission failed, batch retained for retry");
                Err(e)
            }
        }
    }

    fn reset(&mut self) {
        let draft = self.fresh_draft();
        self.drafts = vec![draft];
    }
}
