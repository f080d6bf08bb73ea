//! YAML batch files
//!
//! ```yaml
//! kind: internal_transfer
//! records:
//!   - date: 2025-01-10
//!     ssidPsidType: SSID
//!     ssidPsidValue: "1234"
//!     quantity: 2
//!     partNumber: PT-1
//!     description: gasket
//! ```

use crate::core::batch::BatchForm;
use crate::core::records::RecordKind;
use crate::utils::error::{PartPulseError, Result};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::debug;

/// Drafts read from a batch file, not yet validated
#[derive(Debug, Clone, Deserialize)]
pub struct BatchFile {
    pub kind: RecordKind,
    #[serde(default)]
    pub records: Vec<Mapping>,
}

impl BatchFile {
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Enter every record into a new batch form, one draft per record
    ///
    /// Goes through `add_draft` and `update_field`, so field-level checks
    /// apply exactly as they would to interactive edits. Fields a record
    /// leaves out keep their defaults.
    pub fn into_form(self, submitter: &str) -> Result<BatchForm> {
        if self.records.is_empty() {
            return Err(PartPulseError::bad_request("batch file contains no records"));
        }

        let mut form = BatchForm::new(self.kind, submitter);
        for (index, record) in self.records.iter().enumerate() {
            let id = if index == 0 {
                form.first_id()
            } else {
                form.add_draft()
            };

            for (key, value) in record {
                let field = key.as_str().ok_or_else(|| {
                    PartPulseError::bad_request(format!(
                        "record {} has a non-string field name",
                        index + 1
                    ))
                })?;
                form.update_field(id, field, scalar_text(field, value)?)?;
            }
        }

        debug!(kind = %form.kind(), drafts = form.len(), "Batch file loaded");
        Ok(form)
    }
}

fn scalar_text(field: &str, value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        _ => Err(PartPulseError::invalid_field(
            field,
            "expected a single value",
        )),
    }
}

/// Read and parse a batch file
pub async fn load_batch_file<P: AsRef<Path>>(path: P) -> Result<BatchFile> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    BatchFile::from_yaml(&content)
}
