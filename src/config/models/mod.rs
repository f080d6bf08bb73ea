//! Configuration models
//!
//! This module contains the configuration structures and their defaults.

pub mod notification;
pub mod server;

pub use notification::*;
pub use server::*;

/// Default server host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

/// Default transport API base
pub fn default_api_base() -> String {
    "https://api.resend.com".to_string()
}

/// Sender used when none is configured
pub fn default_from_address() -> String {
    "onboarding@resend.dev".to_string()
}

/// Fixed notification recipient
pub fn default_recipient() -> String {
    "parts-office@partpulse.local".to_string()
}
