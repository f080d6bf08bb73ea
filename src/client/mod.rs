//! Client side of the submission boundary
//!
//! [`HttpSubmissionClient`] sends a validated batch to a running server;
//! [`BatchFile`] reads drafts from YAML so they can be entered through the
//! batch form model from the command line.

pub mod batch_file;
pub mod http;

pub use batch_file::{BatchFile, load_batch_file};
pub use http::HttpSubmissionClient;
