//! Notification dispatcher
//!
//! Turns one [`NotificationMessage`] into one rendered document and makes a
//! single delivery attempt. With no transport configured the document goes to
//! the fallback sink and the dispatch still succeeds.

use super::fallback::{FallbackRecord, FallbackSink, TracingFallbackSink};
use super::message::NotificationMessage;
use super::render::{RenderedDocument, render};
use super::state::{DispatchState, DispatchTracker};
use super::transport::{EmailTransport, OutboundEmail, ResendTransport};
use crate::config::NotificationConfig;
use crate::core::batch::{SubmissionReceipt, SubmissionTransport, check_drafts};
use crate::utils::error::{PartPulseError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Result of one delivery attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Transport accepted the message
    Delivered { message_id: Option<String> },
    /// No transport configured
    TransportUnavailable,
    /// Transport rejected the message or could not be reached
    TransportError { status: Option<u16>, detail: String },
}

/// How a successful dispatch was delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivered {
    Transport { message_id: Option<String> },
    Fallback,
}

/// A completed dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub dispatch_id: Uuid,
    pub records_count: usize,
    pub delivered: Delivered,
}

impl DispatchOutcome {
    pub fn via_fallback(&self) -> bool {
        matches!(self.delivered, Delivered::Fallback)
    }

    pub fn message_id(&self) -> Option<&str> {
        match &self.delivered {
            Delivered::Transport { message_id } => message_id.as_deref(),
            Delivered::Fallback => None,
        }
    }
}

impl From<DispatchOutcome> for SubmissionReceipt {
    fn from(outcome: DispatchOutcome) -> Self {
        let delivered_via_fallback = outcome.via_fallback();
        let message_id = match outcome.delivered {
            Delivered::Transport { message_id } => message_id,
            Delivered::Fallback => None,
        };
        Self {
            dispatch_id: outcome.dispatch_id,
            records_count: outcome.records_count,
            delivered_via_fallback,
            message_id,
        }
    }
}

/// Renders and delivers notification messages
///
/// Configuration is fixed at construction, so the delivery path taken for a
/// message depends only on the message and this value.
#[derive(Debug)]
pub struct NotificationDispatcher {
    config: NotificationConfig,
    transport: Option<Arc<dyn EmailTransport>>,
    sink: Arc<dyn FallbackSink>,
}

impl NotificationDispatcher {
    /// Build from configuration, using Resend when an API key is present and
    /// the tracing sink otherwise
    pub fn new(config: NotificationConfig) -> Result<Self> {
        let transport = ResendTransport::from_config(&config)?
            .map(|transport| Arc::new(transport) as Arc<dyn EmailTransport>);

        match &transport {
            Some(t) => info!(transport = t.name(), "Notification transport configured"),
            None => warn!("No e-mail transport configured, notifications will be logged"),
        }

        Ok(Self::with_parts(
            config,
            transport,
            Arc::new(TracingFallbackSink),
        ))
    }

    /// Build from explicit parts
    pub fn with_parts(
        config: NotificationConfig,
        transport: Option<Arc<dyn EmailTransport>>,
        sink: Arc<dyn FallbackSink>,
    ) -> Self {
        Self {
            config,
            transport,
            sink,
        }
    }

    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }

    /// Name of the configured transport, or `fallback`
    pub fn transport_name(&self) -> &str {
        self.transport
            .as_deref()
            .map(|t| t.name())
            .unwrap_or("fallback")
    }

    pub fn render(&self, message: &NotificationMessage) -> Result<RenderedDocument> {
        render(message)
    }

    /// Make one delivery attempt to `recipient`
    pub async fn deliver(&self, document: &RenderedDocument, recipient: &str) -> DeliveryOutcome {
        let Some(transport) = &self.transport else {
            return DeliveryOutcome::TransportUnavailable;
        };

        let email = OutboundEmail {
            from: self.config.from_address.clone(),
            to: vec![recipient.to_string()],
            subject: document.subject.clone(),
            html: document.html.clone(),
        };

        match transport.send(&email).await {
            Ok(receipt) => DeliveryOutcome::Delivered {
                message_id: receipt.id,
            },
            Err(PartPulseError::Transport { status, detail }) => {
                DeliveryOutcome::TransportError { status, detail }
            }
            Err(e) => DeliveryOutcome::TransportError {
                status: None,
                detail: e.to_string(),
            },
        }
    }

    /// Validate, render and deliver one message
    ///
    /// Resolves to a delivered outcome or an error; a missing transport is
    /// never an error.
    pub async fn dispatch(&self, message: &NotificationMessage) -> Result<DispatchOutcome> {
        let dispatch_id = Uuid::new_v4();
        let mut tracker = DispatchTracker::new(dispatch_id);

        let result = self.run(&mut tracker, message).await;
        if result.is_err() {
            tracker.fail();
        }

        match &result {
            Ok(outcome) => info!(
                dispatch_id = %dispatch_id,
                records = outcome.records_count,
                via_fallback = outcome.via_fallback(),
                "Notification dispatched"
            ),
            Err(e) => warn!(
                dispatch_id = %dispatch_id,
                state = %tracker.state(),
                error = %e,
                "Notification dispatch failed"
            ),
        }
        result
    }

    async fn run(
        &self,
        tracker: &mut DispatchTracker,
        message: &NotificationMessage,
    ) -> Result<DispatchOutcome> {
        let dispatch_id = tracker.dispatch_id();
        check_drafts(message.drafts())?;

        tracker.advance(DispatchState::Rendering)?;
        let document = self.render(message)?;

        tracker.advance(DispatchState::Delivering)?;
        let recipient = self.config.recipient.as_str();
        let delivered = match self.deliver(&document, recipient).await {
            DeliveryOutcome::Delivered { message_id } => Delivered::Transport { message_id },
            DeliveryOutcome::TransportUnavailable => {
                self.sink.record(FallbackRecord {
                    dispatch_id,
                    from: self.config.from_address.clone(),
                    recipient: recipient.to_string(),
                    subject: document.subject,
                    records_count: message.records_count(),
                    html: document.html,
                });
                Delivered::Fallback
            }
            DeliveryOutcome::TransportError { status, detail } => {
                return Err(PartPulseError::Transport { status, detail });
            }
        };
        tracker.advance(DispatchState::Delivered)?;

        Ok(DispatchOutcome {
            dispatch_id,
            records_count: message.records_count(),
            delivered,
        })
    }
}

#[async_trait]
impl SubmissionTransport for NotificationDispatcher {
    async fn submit(&self, message: &NotificationMessage) -> Result<SubmissionReceipt> {
        self.dispatch(message).await.map(SubmissionReceipt::from)
    }
}
