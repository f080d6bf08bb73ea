//! Error handling utilities
//!
//! This module defines the crate-wide error type and its HTTP mapping.

pub mod error;

pub use error::*;
