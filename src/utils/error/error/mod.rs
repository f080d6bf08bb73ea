//! Error handling for PartPulse
//!
//! This module defines all error types used throughout the crate.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{PartPulseError, Result};
