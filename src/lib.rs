//! # PartPulse
//!
//! Batch parts-movement notifications for field technicians.
//!
//! A technician fills in one or more record drafts (internal parts transfers
//! or warranty claims) in a [`BatchForm`]. The batch is validated as a whole
//! and, once every draft is complete, handed to a [`SubmissionTransport`].
//! On the server side the [`NotificationDispatcher`] renders the batch into a
//! single HTML document and delivers it through the configured e-mail
//! transport, or logs it when no transport is configured.
//!
//! ## Submitting in process
//!
//! ```rust,no_run
//! use partpulse::{BatchForm, Config, NotificationDispatcher, RecordKind, SubmitOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/partpulse.yaml").await?;
//!     let dispatcher = NotificationDispatcher::new(config.notification.clone())?;
//!
//!     let mut form = BatchForm::new(RecordKind::InternalTransfer, "Current User");
//!     let id = form.first_id();
//!     form.update_field(id, "ssidPsidType", "SSID")?;
//!     form.update_field(id, "ssidPsidValue", "1234")?;
//!     form.update_field(id, "quantity", "2")?;
//!     form.update_field(id, "partNumber", "PT-1")?;
//!     form.update_field(id, "description", "gasket")?;
//!
//!     match form.submit(&dispatcher).await? {
//!         SubmitOutcome::Submitted(receipt) => println!("sent {}", receipt.dispatch_id),
//!         SubmitOutcome::Rejected(failures) => println!("incomplete: {}", failures),
//!     }
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod client;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{PartPulseError, Result};

pub use client::{BatchFile, HttpSubmissionClient, load_batch_file};
pub use core::batch::{
    BatchForm, BatchValidation, DraftFailure, SubmissionReceipt, SubmissionTransport,
    SubmitOutcome, ValidationFailures,
};
pub use core::notification::{
    FallbackSink, MemoryFallbackSink, NotificationDispatcher, NotificationMessage,
    RenderedDocument, ResendTransport, TracingFallbackSink,
};
pub use core::records::{DraftId, RecordDraft, RecordKind};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build information for the running binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
