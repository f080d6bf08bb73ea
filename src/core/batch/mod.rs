//! Batch Form Model
//!
//! Holds the ordered drafts of one submission session, gates submission on
//! completeness (all-or-nothing), and hands valid batches to a
//! [`SubmissionTransport`].

mod form;
mod submission;
mod validation;

pub use form::{BatchForm, SubmitOutcome};
pub use submission::{SubmissionReceipt, SubmissionTransport};
pub use validation::{
    BatchValidation, DraftFailure, ValidatedBatch, ValidationFailures, check_drafts,
    validate_drafts,
};

#[cfg(test)]
pub use submission::MockSubmissionTransport;
