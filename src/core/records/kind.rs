//! Record kinds and their declared field sets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire name of the date every draft carries
pub const DATE_FIELD: &str = "date";

const INTERNAL_TRANSFER_REQUIRED: &[&str] = &[
    DATE_FIELD,
    "ssidPsidType",
    "ssidPsidValue",
    "quantity",
    "partNumber",
    "description",
];
const INTERNAL_TRANSFER_OPTIONAL: &[&str] = &["poNumber", "siteName"];

const WARRANTY_CLAIM_REQUIRED: &[&str] = &[
    DATE_FIELD,
    "ssid",
    "chillerSerialNumber",
    "chillerModel",
    "buildingName",
    "quantity",
    "partNumber",
    "failedSerialNumber",
    "repairSerialNumber",
    "dateOfFailure",
    "dateOfRepair",
];
const WARRANTY_CLAIM_OPTIONAL: &[&str] = &[];

/// Discriminant of a record draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Internal transfer of parts between sites or stores
    InternalTransfer,
    /// Warranty claim for a failed and repaired part
    WarrantyClaim,
}

impl RecordKind {
    /// Fields that must be non-empty for submission, in declaration order
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            RecordKind::InternalTransfer => INTERNAL_TRANSFER_REQUIRED,
            RecordKind::WarrantyClaim => WARRANTY_CLAIM_REQUIRED,
        }
    }

    /// Fields that may be left empty
    pub fn optional_fields(self) -> &'static [&'static str] {
        match self {
            RecordKind::InternalTransfer => INTERNAL_TRANSFER_OPTIONAL,
            RecordKind::WarrantyClaim => WARRANTY_CLAIM_OPTIONAL,
        }
    }

    /// Whether the kind declares an editable field with this wire name
    pub fn declares(self, field: &str) -> bool {
        self.required_fields().contains(&field) || self.optional_fields().contains(&field)
    }

    /// Human-readable title used in subjects and headings
    pub fn title(self) -> &'static str {
        match self {
            RecordKind::InternalTransfer => "Internal Parts Transfer",
            RecordKind::WarrantyClaim => "Warranty Claim",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::InternalTransfer => "internal_transfer",
            RecordKind::WarrantyClaim => "warranty_claim",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
