//! Utility modules for PartPulse
//!
//! - **error**: crate-wide error type and its HTTP mapping
//! - **html**: escaping helpers for the rendered notification document

pub mod error;
pub mod html;
