//! Batch-level validation

use crate::core::records::{RecordDraft, RecordKind};
use crate::utils::error::{PartPulseError, Result};
use serde::Serialize;
use std::fmt;

/// Required fields missing from one draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftFailure {
    /// Zero-based position of the draft in the batch
    pub draft_index: usize,
    pub missing_fields: Vec<&'static str>,
}

/// Every failing draft of a rejected batch, in batch order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationFailures(Vec<DraftFailure>);

impl ValidationFailures {
    pub fn new(failures: Vec<DraftFailure>) -> Self {
        Self(failures)
    }

    pub fn failures(&self) -> &[DraftFailure] {
        &self.0
    }

    /// Failure for the draft at `index`, if it failed
    pub fn for_draft(&self, index: usize) -> Option<&DraftFailure> {
        self.0.iter().find(|f| f.draft_index == index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(
                f,
                "record {} is missing {}",
                failure.draft_index + 1,
                failure.missing_fields.join(", ")
            )?;
        }
        Ok(())
    }
}

/// A batch that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBatch {
    kind: RecordKind,
    drafts: Vec<RecordDraft>,
}

impl ValidatedBatch {
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn drafts(&self) -> &[RecordDraft] {
        &self.drafts
    }

    pub fn into_drafts(self) -> Vec<RecordDraft> {
        self.drafts
    }
}

/// Result of validating a whole batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchValidation {
    Valid(ValidatedBatch),
    Invalid(ValidationFailures),
}

impl BatchValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, BatchValidation::Valid(_))
    }
}

/// Collect the missing required fields of every draft
pub fn validate_drafts(drafts: &[RecordDraft]) -> std::result::Result<(), ValidationFailures> {
    let failures: Vec<DraftFailure> = drafts
        .iter()
        .enumerate()
        .filter_map(|(draft_index, draft)| {
            let missing_fields = draft.missing_required_fields();
            (!missing_fields.is_empty()).then_some(DraftFailure {
                draft_index,
                missing_fields,
            })
        })
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailures(failures))
    }
}

/// Check drafts arriving from outside the form model
///
/// Rejects an empty batch, a batch mixing record kinds, and any draft with
/// missing required fields. Returns the batch kind on success.
pub fn check_drafts(drafts: &[RecordDraft]) -> Result<RecordKind> {
    let kind = drafts.first().ok_or(PartPulseError::EmptyBatch)?.kind();

    if let Some(other) = drafts.iter().find(|d| d.kind() != kind) {
        return Err(PartPulseError::bad_request(format!(
            "batch mixes {} and {} records",
            kind,
            other.kind()
        )));
    }

    validate_drafts(drafts).map_err(PartPulseError::Validation)?;
    Ok(kind)
}

pub(super) fn validate_batch(kind: RecordKind, drafts: &[RecordDraft]) -> BatchValidation {
    match validate_drafts(drafts) {
        Ok(()) => BatchValidation::Valid(ValidatedBatch {
            kind,
            drafts: drafts.to_vec(),
        }),
        Err(failures) => BatchValidation::Invalid(failures),
    }
}
