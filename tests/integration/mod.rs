//! Integration tests for partpulse
//!
//! These tests verify the interaction between components. External services
//! are stood in for by local `wiremock` servers.

pub mod client_tests;
pub mod error_handling_tests;
pub mod resend_transport_tests;
pub mod route_tests;
pub mod submission_scenarios;
