//! Record draft

use super::fields::RecordFields;
use super::id::DraftId;
use super::kind::{DATE_FIELD, RecordKind};
use crate::utils::error::{PartPulseError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_VALUED_FIELDS: &[&str] = &[DATE_FIELD, "dateOfFailure", "dateOfRepair"];

/// One user-editable parts-movement line
///
/// The id is fixed at creation; every other field stays mutable until the
/// batch is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    id: DraftId,
    #[serde(rename = "date", default)]
    occurred_on: String,
    #[serde(flatten)]
    fields: RecordFields,
}

impl RecordDraft {
    /// A draft with every field empty
    pub fn new(id: DraftId, kind: RecordKind) -> Self {
        Self {
            id,
            occurred_on: String::new(),
            fields: RecordFields::empty(kind),
        }
    }

    /// Prefill the date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.occurred_on = date.format(DATE_FORMAT).to_string();
        self
    }

    pub fn id(&self) -> DraftId {
        self.id
    }

    pub fn kind(&self) -> RecordKind {
        self.fields.kind()
    }

    /// The date the movement occurred on, as entered
    pub fn occurred_on(&self) -> &str {
        &self.occurred_on
    }

    pub fn fields(&self) -> &RecordFields {
        &self.fields
    }

    /// Value of a field by wire name, including `date`
    pub fn field(&self, name: &str) -> Option<&str> {
        if name == DATE_FIELD {
            Some(&self.occurred_on)
        } else {
            self.fields.get(name)
        }
    }

    /// Value of a field by wire name, empty when the kind lacks it
    pub fn value(&self, name: &str) -> &str {
        self.field(name).unwrap_or_default()
    }

    /// Replace one field's value
    ///
    /// Rejects names the kind does not declare and values that fail the
    /// field's own format check. Empty values are always accepted.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        let kind = self.kind();

        if !kind.declares(name) {
            return Err(PartPulseError::UnknownField {
                kind,
                field: name.to_string(),
            });
        }

        check_field_value(name, &value)?;

        let slot = if name == DATE_FIELD {
            &mut self.occurred_on
        } else {
            self.fields
                .get_mut(name)
                .ok_or_else(|| PartPulseError::UnknownField {
                    kind,
                    field: name.to_string(),
                })?
        };
        *slot = value;
        Ok(())
    }

    /// Required fields whose trimmed value is empty, in declaration order
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        self.kind()
            .required_fields()
            .iter()
            .copied()
            .filter(|name| self.value(name).trim().is_empty())
            .collect()
    }

    /// Site identifier shown in subjects, e.g. `SSID 1234`
    pub fn identifier(&self) -> String {
        let (label, value) = match &self.fields {
            RecordFields::InternalTransfer(fields) => {
                (fields.ssid_psid_type.trim(), fields.ssid_psid_value.trim())
            }
            RecordFields::WarrantyClaim(fields) => ("SSID", fields.ssid.trim()),
        };
        match (label.is_empty(), value.is_empty()) {
            (_, true) => label.to_string(),
            (true, false) => value.to_string(),
            (false, false) => format!("{} {}", label, value),
        }
    }
}

fn check_field_value(name: &str, value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }

    if DATE_VALUED_FIELDS.contains(&name) {
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| {
            PartPulseError::invalid_field(name, format!("'{}' is not a YYYY-MM-DD date", value))
        })?;
    }

    match name {
        "ssidPsidType" if !matches!(trimmed, "SSID" | "PSID") => Err(
            PartPulseError::invalid_field(name, format!("expected SSID or PSID, got '{}'", value)),
        ),
        "quantity" => match trimmed.parse::<u32>() {
            Ok(quantity) if quantity > 0 => Ok(()),
            _ => Err(PartPulseError::invalid_field(
                name,
                format!("'{}' is not a positive whole number", value),
            )),
        },
        _ => Ok(()),
    }
}
