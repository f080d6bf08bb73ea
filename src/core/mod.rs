//! Core functionality for PartPulse
//!
//! Record drafts and their kinds, the batch form model that gates
//! submission, and the notification dispatcher that renders and delivers a
//! submitted batch.

pub mod batch;
pub mod notification;
pub mod records;
