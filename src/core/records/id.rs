//! Draft identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a draft within its batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftId(u64);

impl DraftId {
    /// Raw numeric value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id source scoped to one batch
///
/// Never hands out the same id twice, including across batch resets.
#[derive(Debug, Clone)]
pub struct DraftIdGenerator {
    next: u64,
}

impl DraftIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next id
    pub fn next_id(&mut self) -> DraftId {
        let id = DraftId(self.next);
        self.next += 1;
        id
    }
}

impl Default for DraftIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
