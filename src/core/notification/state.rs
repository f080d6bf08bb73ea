//! Dispatch lifecycle

use crate::utils::error::{PartPulseError, Result};
use serde::Serialize;
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Where a single dispatch currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchState {
    Pending,
    Rendering,
    Delivering,
    Delivered,
    Failed,
}

impl DispatchState {
    /// Whether `next` may follow `self`
    pub fn can_advance_to(self, next: DispatchState) -> bool {
        use DispatchState::*;
        matches!(
            (self, next),
            (Pending, Rendering)
                | (Pending, Failed)
                | (Rendering, Delivering)
                | (Rendering, Failed)
                | (Delivering, Delivered)
                | (Delivering, Failed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, DispatchState::Delivered | DispatchState::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DispatchState::Pending => "pending",
            DispatchState::Rendering => "rendering",
            DispatchState::Delivering => "delivering",
            DispatchState::Delivered => "delivered",
            DispatchState::Failed => "failed",
        }
    }
}

impl fmt::Display for DispatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks the state of one dispatch and refuses illegal transitions
#[derive(Debug)]
pub(crate) struct DispatchTracker {
    dispatch_id: Uuid,
    state: DispatchState,
}

impl DispatchTracker {
    pub(crate) fn new(dispatch_id: Uuid) -> Self {
        Self {
            dispatch_id,
            state: DispatchState::Pending,
        }
    }

    pub(crate) fn dispatch_id(&self) -> Uuid {
        self.dispatch_id
    }

    pub(crate) fn state(&self) -> DispatchState {
        self.state
    }

    pub(crate) fn advance(&mut self, next: DispatchState) -> Result<()> {
        if !self.state.can_advance_to(next) {
            return Err(PartPulseError::internal(format!(
                "dispatch {} cannot move from {} to {}",
                self.dispatch_id, self.state, next
            )));
        }
        debug!(dispatch_id = %self.dispatch_id, from = %self.state, to = %next, "Dispatch state change");
        self.state = next;
        Ok(())
    }

    /// Mark failed unless already terminal
    pub(crate) fn fail(&mut self) {
        if !self.state.is_terminal() {
            self.state = DispatchState::Failed;
        }
    }
}
