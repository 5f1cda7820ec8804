use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Set of elapsed-second instants for which a notification has already been
/// delivered.
///
/// Keyed by instant, not by objective: if two objectives land on the same
/// elapsed second, a single entry covers both. Membership guarantees
/// at-most-once delivery per instant; clearing the set re-arms every
/// objective for a fresh run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationTracker {
    delivered: HashSet<u64>,
}

impl NotificationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a notification has already been delivered at `instant`.
    pub fn has(&self, instant: u64) -> bool {
        self.delivered.contains(&instant)
    }

    /// Record that a notification was delivered at `instant`.
    pub fn mark(&mut self, instant: u64) {
        self.delivered.insert(instant);
    }

    /// Forget all delivered instants. Idempotent.
    pub fn clear(&mut self) {
        self.delivered.clear();
    }

    pub fn len(&self) -> usize {
        self.delivered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delivered.is_empty()
    }
}
