//! Record drafts and record kinds
//!
//! A record draft is one user-editable parts-movement line. Every draft
//! carries an id, a date, and the field set of its kind. The kind declares
//! which fields are required; validation iterates that declaration instead
//! of hand-written per-kind checks.

mod draft;
mod fields;
mod id;
mod kind;

pub use draft::RecordDraft;
pub use fields::{InternalTransferFields, RecordFields, WarrantyClaimFields};
pub use id::{DraftId, DraftIdGenerator};
pub use kind::{DATE_FIELD, RecordKind};
