//! In-session activity log of access-relevant events.
//!
//! Entries carry the acting user's name, so the log is installed after the
//! auth provider. The log is a bounded ring; the oldest entry goes first.

#[cfg(test)]
#[path = "activity_log_test.rs"]
mod activity_log_test;

use std::collections::VecDeque;

use uuid::Uuid;

#[derive(Clone, Debug, PartialEq)]
pub struct ActivityEntry {
    pub id: Uuid,
    pub actor: String,
    pub action: String,
    /// Milliseconds since the Unix epoch.
    pub at_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActivityLogState {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl ActivityLogState {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { entries: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn record(&mut self, actor: impl Into<String>, action: impl Into<String>, at_ms: f64) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(ActivityEntry { id: Uuid::new_v4(), actor: actor.into(), action: action.into(), at_ms });
    }

    /// Entries newest first.
    pub fn recent(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
