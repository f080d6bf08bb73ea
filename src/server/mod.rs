//! HTTP server implementation
//!
//! This module provides the HTTP server that accepts batch submissions and
//! hands them to the notification dispatcher.

pub mod builder;
pub mod routes;
pub mod server;
pub mod state;

pub use builder::{ServerBuilder, run_server};
pub use server::{HttpServer, create_app};
pub use state::AppState;
