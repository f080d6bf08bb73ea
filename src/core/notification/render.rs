//! HTML rendering of notification messages
//!
//! Rendering is a pure function of the message. The only timestamp in the
//! output is the message's captured submission time.

use super::message::NotificationMessage;
use crate::core::records::{RecordDraft, RecordKind};
use crate::utils::error::{PartPulseError, Result};
use crate::utils::html::{escape, escape_or_dash};
use chrono::{DateTime, Utc};

/// Subject line plus HTML body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub subject: String,
    pub html: String,
}

/// One table column
#[derive(Clone, Copy)]
enum Column {
    /// 1-based position of the record in the batch
    Position,
    /// `SSID 1234` style identifier
    Identifier,
    Field(&'static str),
}

struct Layout {
    title_lines: &'static [&'static str],
    columns: &'static [(&'static str, Column)],
    collection_block: bool,
}

const INTERNAL_TRANSFER_LAYOUT: Layout = Layout {
    title_lines: &["INTERNAL PARTS", "TRANSFER ORDER FORM"],
    columns: &[
        ("#", Column::Position),
        ("DATE", Column::Field("date")),
        ("SSID/PSID", Column::Identifier),
        ("SITE", Column::Field("siteName")),
        ("PO NO.", Column::Field("poNumber")),
        ("QTY", Column::Field("quantity")),
        ("PART NO.", Column::Field("partNumber")),
        ("DESCRIPTION", Column::Field("description")),
    ],
    collection_block: true,
};

const WARRANTY_CLAIM_LAYOUT: Layout = Layout {
    title_lines: &["WARRANTY CLAIM", "NOTIFICATION FORM"],
    columns: &[
        ("#", Column::Position),
        ("DATE", Column::Field("date")),
        ("SSID", Column::Field("ssid")),
        ("BUILDING", Column::Field("buildingName")),
        ("CHILLER MODEL", Column::Field("chillerModel")),
        ("CHILLER S/N", Column::Field("chillerSerialNumber")),
        ("QTY", Column::Field("quantity")),
        ("PART NO.", Column::Field("partNumber")),
        ("FAILED S/N", Column::Field("failedSerialNumber")),
        ("REPAIR S/N", Column::Field("repairSerialNumber")),
        ("FAILED ON", Column::Field("dateOfFailure")),
        ("REPAIRED ON", Column::Field("dateOfRepair")),
    ],
    collection_block: false,
};

const STYLE: &str = r#"
    body { font-family: Arial, Helvetica, sans-serif; margin: 0; padding: 20px; background-color: #ffffff; }
    .container { max-width: 900px; margin: 0 auto; }
    .header { text-align: center; margin-bottom: 30px; }
    .brand { color: #FF2B00; font-weight: bold; font-size: 24px; }
    .title { font-size: 18px; font-weight: bold; text-transform: uppercase; margin: 10px 0; }
    .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 20px; margin-bottom: 15px; }
    .form-field label { font-weight: bold; display: block; margin-bottom: 5px; }
    .form-field .value { border-bottom: 1px solid #000; padding: 5px 0; min-height: 20px; }
    table { width: 100%; border-collapse: collapse; margin: 20px 0; }
    th { background-color: #f0f0f0; border: 1px solid #000; padding: 10px; text-align: left; font-weight: bold; }
    td { border: 1px solid #000; padding: 8px; }
    .signature-section { margin: 30px 0; padding: 15px; border-top: 2px solid #000; }
    .admin-section { border: 2px solid #000; padding: 15px; display: inline-block; }
    .stamp { color: #FF2B00; font-weight: bold; font-size: 16px; text-transform: uppercase; }
    .note { margin-top: 30px; padding: 15px; background-color: #f9f9f9; border-left: 4px solid #FF2B00; font-size: 12px; color: #666; }
"#;

const BLANK_LINE: &str = "____________________________________";

/// Render a message into its subject and HTML body
pub fn render(message: &NotificationMessage) -> Result<RenderedDocument> {
    let first = message.drafts().first().ok_or(PartPulseError::EmptyBatch)?;
    let kind = first.kind();

    Ok(RenderedDocument {
        subject: subject(kind, first, message.submitted_at()),
        html: html(kind, first, message),
    })
}

fn subject(kind: RecordKind, first: &RecordDraft, submitted_at: DateTime<Utc>) -> String {
    let identifier = first.identifier();
    let date = submitted_at.format("%Y-%m-%d").to_string();
    [kind.title(), identifier.as_str(), date.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" - ")
}

fn layout(kind: RecordKind) -> &'static Layout {
    match kind {
        RecordKind::InternalTransfer => &INTERNAL_TRANSFER_LAYOUT,
        RecordKind::WarrantyClaim => &WARRANTY_CLAIM_LAYOUT,
    }
}

fn html(kind: RecordKind, first: &RecordDraft, message: &NotificationMessage) -> String {
    let layout = layout(kind);
    let submitted_date = message.submitted_at().format("%Y/%m/%d").to_string();
    let submitted_time = message.submitted_at().format("%H:%M:%S").to_string();

    let mut out = String::with_capacity(4096 + message.records_count() * 512);
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n");
    out.push_str(&format!("  <title>{}</title>\n", escape(kind.title())));
    out.push_str(&format!("  <style>{}</style>\n</head>\n<body>\n", STYLE));
    out.push_str("  <div class=\"container\">\n");

    out.push_str("    <div class=\"header\">\n      <div class=\"brand\">PARTPULSE</div>\n");
    for line in layout.title_lines {
        out.push_str(&format!("      <div class=\"title\">{}</div>\n", line));
    }
    out.push_str("    </div>\n");

    general_section(&mut out, kind, first, message.submitter(), &submitted_date);
    records_table(&mut out, layout, message.drafts());

    if layout.collection_block {
        out.push_str("    <div class=\"signature-section\">\n");
        out.push_str("      <p>Below is for parts that are sold and collected by client. MUST be signed and dated before releasing the parts.</p>\n");
        for label in ["Client name", "Date", "Signature"] {
            out.push_str(&format!(
                "      <div class=\"form-field\"><label>{}:</label><div class=\"value\">{}</div></div>\n",
                label, BLANK_LINE
            ));
        }
        out.push_str("    </div>\n");
    }

    out.push_str("    <div style=\"display: flex; justify-content: space-between; align-items: center; margin-top: 30px;\">\n");
    out.push_str("      <div class=\"admin-section\">\n");
    out.push_str("        <div style=\"font-weight: bold; margin-bottom: 10px;\">OFFICE ADMIN USE ONLY</div>\n");
    out.push_str("        <div>A &ndash; &#9744;</div>\n        <div>B &ndash; &#9744;</div>\n");
    out.push_str(&format!(
        "        <div style=\"margin-top: 10px;\"><label>Date and Signature:</label><div>{}</div></div>\n",
        BLANK_LINE
    ));
    out.push_str("      </div>\n");
    out.push_str(&format!(
        "      <div style=\"text-align: right;\"><div class=\"stamp\">SUBMITTED DIGITALLY</div><div>{}</div></div>\n",
        submitted_date
    ));
    out.push_str("    </div>\n");

    out.push_str(&format!(
        "    <div class=\"note\"><strong>Note:</strong> This form was submitted digitally via PartPulse on {} at {} UTC.",
        submitted_date, submitted_time
    ));
    if message.records_count() > 1 {
        out.push_str(&format!(
            " This submission contains {} parts.",
            message.records_count()
        ));
    }
    out.push_str("</div>\n  </div>\n</body>\n</html>\n");
    out
}

fn general_section(
    out: &mut String,
    kind: RecordKind,
    first: &RecordDraft,
    submitter: &str,
    submitted_date: &str,
) {
    let mut fields: Vec<(&str, String)> = vec![("Date", escape_or_dash(first.occurred_on()).into_owned())];

    match kind {
        RecordKind::InternalTransfer => {
            let value = first.value("ssidPsidValue");
            let id_type = first.value("ssidPsidType");
            let number = if id_type.trim().is_empty() {
                escape_or_dash(value).into_owned()
            } else {
                format!("{} ({})", escape_or_dash(value), escape(id_type))
            };
            fields.push(("SSID/PSID Number", number));
            fields.push(("Site Name", escape_or_dash(first.value("siteName")).into_owned()));
            fields.push(("PO Number", escape_or_dash(first.value("poNumber")).into_owned()));
        }
        RecordKind::WarrantyClaim => {
            fields.push(("SSID", escape_or_dash(first.value("ssid")).into_owned()));
            fields.push((
                "Building Name",
                escape_or_dash(first.value("buildingName")).into_owned(),
            ));
        }
    }

    fields.push(("Technician Name", escape_or_dash(submitter).into_owned()));
    fields.push(("Signature", format!("Digital Submission - {}", submitted_date)));

    out.push_str("    <div class=\"form-section\">\n");
    for pair in fields.chunks(2) {
        out.push_str("      <div class=\"form-row\">\n");
        for (label, value) in pair {
            out.push_str(&format!(
                "        <div class=\"form-field\"><label>{}:</label><div class=\"value\">{}</div></div>\n",
                label, value
            ));
        }
        out.push_str("      </div>\n");
    }
    out.push_str("    </div>\n");
}

fn records_table(out: &mut String, layout: &Layout, drafts: &[RecordDraft]) {
    out.push_str("    <table>\n      <thead>\n        <tr>");
    for (heading, _) in layout.columns {
        out.push_str(&format!("<th>{}</th>", heading));
    }
    out.push_str("</tr>\n      </thead>\n      <tbody>\n");

    for (index, draft) in drafts.iter().enumerate() {
        out.push_str(&format!("        <tr data-record=\"{}\">", index + 1));
        for (_, column) in layout.columns {
            let cell = match column {
                Column::Position => (index + 1).to_string(),
                Column::Identifier => escape_or_dash(&draft.identifier()).into_owned(),
                Column::Field(name) => escape_or_dash(draft.value(name)).into_owned(),
            };
            out.push_str(&format!("<td>{}</td>", cell));
        }
        out.push_str("</tr>\n");
    }

    out.push_str("      </tbody>\n    </table>\n");
}
