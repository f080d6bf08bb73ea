//! Fallback sinks used when no e-mail transport is configured

use parking_lot::Mutex;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// Everything the transport would have sent, captured instead of delivered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackRecord {
    pub dispatch_id: Uuid,
    pub from: String,
    pub recipient: String,
    pub subject: String,
    pub records_count: usize,
    pub html: String,
}

/// Receives notifications that were not handed to a transport
///
/// Called exactly once per fallback dispatch.
pub trait FallbackSink: Send + Sync + std::fmt::Debug {
    fn record(&self, record: FallbackRecord);
}

/// Writes fallback notifications to the tracing log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingFallbackSink;

impl FallbackSink for TracingFallbackSink {
    fn record(&self, record: FallbackRecord) {
        info!(
            dispatch_id = %record.dispatch_id,
            from = %record.from,
            to = %record.recipient,
            subject = %record.subject,
            records = record.records_count,
            html_bytes = record.html.len(),
            "E-mail transport not configured, notification logged instead of sent"
        );
    }
}

/// Keeps fallback notifications in memory
#[derive(Debug, Default)]
pub struct MemoryFallbackSink {
    records: Mutex<Vec<FallbackRecord>>,
}

impl MemoryFallbackSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn records(&self) -> Vec<FallbackRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl FallbackSink for MemoryFallbackSink {
    fn record(&self, record: FallbackRecord) {
        self.records.lock().push(record);
    }
}
