//! Notification Dispatcher
//!
//! Turns a submitted batch into one rendered HTML document and attempts
//! delivery exactly once. When no transport is configured the would-be
//! delivery is written to a fallback sink and reported as delivered.

mod dispatcher;
mod fallback;
mod message;
mod render;
mod state;
mod transport;

pub use dispatcher::{Delivered, DeliveryOutcome, DispatchOutcome, NotificationDispatcher};
pub use fallback::{FallbackRecord, FallbackSink, MemoryFallbackSink, TracingFallbackSink};
pub use message::NotificationMessage;
pub use render::{RenderedDocument, render};
pub use state::DispatchState;
pub use transport::{EmailTransport, OutboundEmail, ResendTransport, TransportReceipt};
